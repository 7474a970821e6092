//! Common test utilities for zbx-client integration tests
//!
//! A minimal in-process WebSocket JSON-RPC server. Each test decides how
//! requests are answered by passing a handler that receives the parsed
//! request object.

#![allow(dead_code)]

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::Message;

/// What the mock does with one incoming request
pub enum Reply {
    /// Send this text frame back
    Send(String),
    /// Stay silent
    Ignore,
    /// Drop the connection
    Hangup,
}

/// Mock WebSocket server for client testing
pub struct MockWsServer {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    message_rx: mpsc::Receiver<Value>,
}

impl MockWsServer {
    /// Start a server that answers every request with its own params as result
    pub async fn echo() -> Self {
        Self::with_handler(|req| Reply::Send(mock_response(&req["id"], req["params"].clone()))).await
    }

    /// Start a server with a custom handler
    pub async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(Value) -> Reply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (msg_tx, msg_rx) = mpsc::channel::<Value>(100);
        let handler = Arc::new(handler);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    accepted = listener.accept() => {
                        let Ok((stream, _)) = accepted else { continue };
                        let msg_tx = msg_tx.clone();
                        let handler = handler.clone();

                        tokio::spawn(async move {
                            let Ok(ws_stream) = accept_async(stream).await else { return };
                            let (mut write, mut read) = ws_stream.split();

                            while let Some(Ok(msg)) = read.next().await {
                                let Message::Text(text) = msg else { continue };
                                let Ok(request) = serde_json::from_str::<Value>(&text) else { continue };
                                let _ = msg_tx.send(request.clone()).await;

                                match handler(request) {
                                    Reply::Send(response) => {
                                        let _ = write.send(Message::Text(response)).await;
                                    }
                                    Reply::Ignore => {}
                                    Reply::Hangup => {
                                        let _ = write.send(Message::Close(None)).await;
                                        break;
                                    }
                                }
                            }
                        });
                    }
                }
            }
        });

        Self {
            addr,
            shutdown_tx,
            message_rx: msg_rx,
        }
    }

    /// WebSocket URL for this server
    pub fn url(&self) -> String {
        format!("ws://{}", self.addr)
    }

    /// Next request object the server received, or None after 5 seconds
    pub async fn next_request(&mut self) -> Option<Value> {
        tokio::time::timeout(tokio::time::Duration::from_secs(5), self.message_rx.recv())
            .await
            .ok()
            .flatten()
    }

    /// Stop accepting connections
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

/// A JSON-RPC success response for `id`
pub fn mock_response(id: &Value, result: Value) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "result": result,
        "id": id
    })
    .to_string()
}

/// A Zabbix-style JSON-RPC error response for `id`
pub fn mock_error_response(id: &Value, code: i32, message: &str, data: &str) -> String {
    serde_json::json!({
        "jsonrpc": "2.0",
        "error": {
            "code": code,
            "message": message,
            "data": data
        },
        "id": id
    })
    .to_string()
}

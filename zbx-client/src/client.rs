//! JSON-RPC client implementation over WebSocket
//!
//! `RpcClient` owns one WebSocket connection. Requests are written on the
//! sink half; a background task reads the stream half and hands each
//! response to the waiter registered under its id.
//!
//! # Client Lifecycle
//!
//! 1. **Connect**: `RpcClient::connect` or `ClientBuilder::connect`
//! 2. **Use**: `request` for typed calls, or pass the client to `ZabbixApi`
//!    as its `RpcTransport`
//! 3. **Close**: `close`, or the server hangs up; either way every pending
//!    request fails with `Error::ConnectionClosed`
//!
//! There is no reconnection: once closed, a client stays closed.
//!
//! # Cloning
//!
//! Clones share the connection, the request table and the metrics.

use crate::metrics::ClientMetrics;
use crate::request::RequestManager;
use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use zbx_core::{codec, Error, Id, JsonRpcRequest, JsonRpcResponse, Result, RpcTransport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// JSON-RPC client over WebSocket
#[derive(Clone)]
pub struct RpcClient {
    sender: Arc<Mutex<WsSink>>,
    request_manager: RequestManager,
    connected: Arc<AtomicBool>,
    request_timeout: Option<Duration>,
    metrics: Option<Arc<ClientMetrics>>,
}

impl RpcClient {
    /// Connect with default settings (30s request timeout, no metrics)
    ///
    /// Use [`ClientBuilder`](crate::ClientBuilder) to change them.
    pub async fn connect(url: &str) -> Result<Self> {
        crate::ClientBuilder::new(url).connect().await
    }

    #[tracing::instrument(skip_all, fields(url = url))]
    pub(crate) async fn establish(
        url: &str,
        request_timeout: Option<Duration>,
        metrics: Option<Arc<ClientMetrics>>,
    ) -> Result<Self> {
        tracing::info!("Connecting to server");
        let (ws_stream, _) = connect_async(url)
            .await
            .map_err(|e| Error::WebSocket(e.to_string()))?;

        let (sender, receiver) = ws_stream.split();

        let client = Self {
            sender: Arc::new(Mutex::new(sender)),
            request_manager: RequestManager::new(),
            connected: Arc::new(AtomicBool::new(true)),
            request_timeout,
            metrics,
        };

        tokio::spawn(Self::receive_loop(
            receiver,
            client.request_manager.clone(),
            client.connected.clone(),
            client.metrics.clone(),
        ));

        tracing::info!("Connected successfully");
        Ok(client)
    }

    /// Whether the connection is still usable
    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// The per-request timeout, if any
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Number of requests awaiting a response
    pub async fn pending_requests(&self) -> usize {
        self.request_manager.pending_count().await
    }

    /// Send a request and deserialize its result into `R`
    ///
    /// # Errors
    ///
    /// - `Error::JsonRpc` if the server answered with an error object
    /// - `Error::Timeout` if no answer arrived in time
    /// - `Error::ConnectionClosed` if the connection is or goes down
    /// - `Error::Serialization` if params or result don't fit their types
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let params = serde_json::to_value(params)?;
        let result = self.send_request(method, params).await?;
        serde_json::from_value(result).map_err(|e| {
            Error::Serialization(format!("{}: cannot decode result: {}", method, e))
        })
    }

    #[tracing::instrument(name = "rpc_call", skip_all, fields(method = %method))]
    async fn send_request(&self, method: &str, params: Value) -> Result<Value> {
        if !self.is_connected() {
            return Err(Error::ConnectionClosed);
        }

        let start = Instant::now();
        let id = self.request_manager.next_id();
        let request = JsonRpcRequest::new(method, Some(params), id.clone());
        let request_text = codec::encode_request(&request)?;

        let rx = self.request_manager.register(id.clone()).await;

        // The receive loop flips the flag before draining the table, so a
        // slot registered after the drain is caught here
        if !self.is_connected() {
            self.request_manager.release(&id).await;
            return Err(Error::ConnectionClosed);
        }

        if let Err(e) = self.sender.lock().await.send(Message::Text(request_text)).await {
            self.request_manager.release(&id).await;
            let error = Error::WebSocket(e.to_string());
            self.record_failure(method, &error, start);
            return Err(error);
        }

        tracing::debug!(id = %id, "Request sent, waiting for response");
        if let Some(ref m) = self.metrics {
            m.request_started();
        }

        let outcome = match self.request_timeout {
            Some(limit) => match tokio::time::timeout(limit, rx).await {
                Ok(received) => received,
                Err(_) => {
                    self.request_manager.release(&id).await;
                    Ok(Err(Error::Timeout))
                }
            },
            None => rx.await,
        };

        if let Some(ref m) = self.metrics {
            m.request_finished();
        }

        let result = outcome
            .map_err(|_| Error::Internal("Response channel closed".to_string()))
            .and_then(|response| response)
            .and_then(JsonRpcResponse::into_result);

        match result {
            Ok(value) => {
                let duration = start.elapsed().as_secs_f64();
                if let Some(ref m) = self.metrics {
                    m.record_request(method, "success", duration);
                }
                tracing::debug!(duration_secs = duration, "Request completed successfully");
                Ok(value)
            }
            Err(error) => {
                self.record_failure(method, &error, start);
                Err(error)
            }
        }
    }

    fn record_failure(&self, method: &str, error: &Error, start: Instant) {
        let duration = start.elapsed().as_secs_f64();
        if let Some(ref m) = self.metrics {
            m.record_request(method, "error", duration);
            m.record_error(error.kind());
        }
        if error.is_remote() {
            tracing::warn!(error = %error, "Request rejected by server");
        } else {
            tracing::error!(error = %error, "Request failed");
        }
    }

    /// Close the connection
    ///
    /// Pending requests fail with `Error::ConnectionClosed`. Calling `close`
    /// again is a no-op.
    pub async fn close(&self) {
        if self.connected.swap(false, Ordering::SeqCst) {
            let mut sender = self.sender.lock().await;
            if let Err(e) = sender.send(Message::Close(None)).await {
                tracing::debug!(error = %e, "Close frame not sent");
            }
            tracing::info!("Connection closed by client");
        }
        self.request_manager.fail_all(Error::ConnectionClosed).await;
    }

    async fn receive_loop(
        mut receiver: WsSource,
        request_manager: RequestManager,
        connected: Arc<AtomicBool>,
        metrics: Option<Arc<ClientMetrics>>,
    ) {
        while let Some(message) = receiver.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    Self::handle_message(&text, &request_manager, &metrics).await;
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Connection closed by server");
                    break;
                }
                Ok(_) => {} // pings are answered by tungstenite
                Err(e) => {
                    tracing::error!(error = %e, "WebSocket error");
                    if let Some(ref m) = metrics {
                        m.record_error("websocket");
                    }
                    break;
                }
            }
        }

        connected.store(false, Ordering::SeqCst);
        request_manager.fail_all(Error::ConnectionClosed).await;
    }

    async fn handle_message(
        text: &str,
        request_manager: &RequestManager,
        metrics: &Option<Arc<ClientMetrics>>,
    ) {
        match codec::decode_response(text) {
            Ok(JsonRpcResponse {
                id: Id::Null,
                error: Some(error),
                ..
            }) => {
                // The server could not read a request id; only attributable
                // when a single request is in flight
                if request_manager.fail_sole(Error::JsonRpc(error.clone())).await {
                    tracing::debug!(error = %error, "Uncorrelated error delivered to the only pending request");
                } else {
                    tracing::warn!(error = %error, "Uncorrelated error response discarded");
                }
            }
            Ok(response) => {
                let id = response.id.clone();
                if !request_manager.complete(&id, response).await {
                    tracing::warn!(id = %id, "Response for unknown request discarded");
                }
            }
            Err(e) => {
                if let Some(ref m) = metrics {
                    m.record_error("decode");
                }
                if !request_manager.fail_sole(e.clone()).await {
                    tracing::warn!(error = %e, "Undecodable message discarded");
                }
            }
        }
    }
}

#[async_trait]
impl RpcTransport for RpcClient {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        self.send_request(method, params).await
    }
}

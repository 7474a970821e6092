//! Client lifecycle integration tests
//!
//! Connect, close, and what happens to requests when the connection goes away.

mod common;

use common::{MockWsServer, Reply};
use serde_json::{json, Value};
use std::time::Duration;
use zbx_client::{ClientBuilder, RpcClient};
use zbx_core::Error;

#[tokio::test]
async fn test_client_connect_success() {
    let server = MockWsServer::echo().await;
    let client = RpcClient::connect(&server.url()).await.unwrap();

    assert!(client.is_connected());
    assert_eq!(client.request_timeout(), Some(zbx_client::DEFAULT_REQUEST_TIMEOUT));

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_client_connect_invalid_url() {
    let result = RpcClient::connect("not a url").await;
    assert!(matches!(result, Err(Error::WebSocket(_))));
}

#[tokio::test]
async fn test_close_is_idempotent_and_final() {
    let server = MockWsServer::echo().await;
    let client = RpcClient::connect(&server.url()).await.unwrap();

    client.close().await;
    client.close().await;
    assert!(!client.is_connected());

    let result: Result<Value, _> = client.request("item.get", json!({})).await;
    assert!(matches!(result, Err(Error::ConnectionClosed)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_close_fails_pending_requests() {
    let server = MockWsServer::with_handler(|_req| Reply::Ignore).await;
    let client = ClientBuilder::new(server.url()).without_timeout().connect().await.unwrap();

    let waiter = client.clone();
    let pending = tokio::spawn(async move { waiter.request::<_, Value>("item.get", json!({})).await });

    // Let the request reach the table
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(client.pending_requests().await, 1);

    client.close().await;

    let result = pending.await.unwrap();
    assert!(matches!(result, Err(Error::ConnectionClosed)));

    server.shutdown().await;
}

#[tokio::test]
async fn test_server_hangup_fails_pending_requests() {
    let server = MockWsServer::with_handler(|_req| Reply::Hangup).await;
    let client = ClientBuilder::new(server.url()).without_timeout().connect().await.unwrap();

    let result: Result<Value, _> = client.request("item.get", json!({})).await;
    assert!(matches!(result, Err(Error::ConnectionClosed)));

    // The receive loop marks the client closed before failing requests
    assert!(!client.is_connected());

    server.shutdown().await;
}

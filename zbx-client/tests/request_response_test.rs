//! Request/response integration tests
//!
//! Success, remote errors, timeouts and typed results against a mock server.

mod common;

use common::{mock_error_response, mock_response, MockWsServer, Reply};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use zbx_client::{ClientBuilder, RpcClient};
use zbx_core::{Error, RpcTransport};

#[derive(Debug, Deserialize, PartialEq)]
struct CreateResult {
    itemids: Vec<String>,
}

#[tokio::test]
async fn test_request_success() {
    let mut server = MockWsServer::with_handler(|req| {
        if req["method"] == "item.create" {
            Reply::Send(mock_response(&req["id"], json!({"itemids": ["24758"]})))
        } else {
            Reply::Ignore
        }
    })
    .await;

    let client = RpcClient::connect(&server.url()).await.unwrap();

    let result: CreateResult = client
        .request("item.create", json!([{"name": "ping", "key_": "agent.ping"}]))
        .await
        .unwrap();
    assert_eq!(result.itemids, vec!["24758".to_string()]);

    let sent = server.next_request().await.unwrap();
    assert_eq!(sent["jsonrpc"], "2.0");
    assert_eq!(sent["method"], "item.create");
    assert_eq!(sent["params"][0]["key_"], "agent.ping");
    assert!(sent["id"].is_number());

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_remote_error_is_surfaced_verbatim() {
    let server = MockWsServer::with_handler(|req| {
        Reply::Send(mock_error_response(
            &req["id"],
            -32602,
            "Invalid params.",
            "Item with key \"agent.ping\" already exists on \"web01\".",
        ))
    })
    .await;

    let client = RpcClient::connect(&server.url()).await.unwrap();
    let result: Result<Value, _> = client.request("item.create", json!([])).await;

    match result {
        Err(Error::JsonRpc(data)) => {
            assert_eq!(data.code, -32602);
            assert_eq!(data.message, "Invalid params.");
            assert!(data.detail().unwrap().contains("already exists"));
        }
        other => panic!("expected remote error, got {:?}", other),
    }

    // A rejected call does not poison the connection
    assert!(client.is_connected());

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_request_timeout_releases_slot() {
    let server = MockWsServer::with_handler(|_req| Reply::Ignore).await;

    let client = ClientBuilder::new(server.url())
        .request_timeout(Duration::from_millis(200))
        .connect()
        .await
        .unwrap();

    let result: Result<Value, _> = client.request("item.get", json!({})).await;
    assert!(matches!(result, Err(Error::Timeout)));
    assert_eq!(client.pending_requests().await, 0);

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_requests_are_correlated() {
    // Answer each request with its own id so mix-ups are visible
    let server =
        MockWsServer::with_handler(|req| Reply::Send(mock_response(&req["id"], req["id"].clone()))).await;

    let client = RpcClient::connect(&server.url()).await.unwrap();

    let (a, b, c) = tokio::join!(
        client.request::<_, i64>("item.get", json!({})),
        client.request::<_, i64>("item.get", json!({})),
        client.request::<_, i64>("item.get", json!({})),
    );

    let mut ids = vec![a.unwrap(), b.unwrap(), c.unwrap()];
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_result_type_mismatch() {
    let server = MockWsServer::with_handler(|req| Reply::Send(mock_response(&req["id"], json!("7.0.3")))).await;

    let client = RpcClient::connect(&server.url()).await.unwrap();
    let result: Result<CreateResult, _> = client.request("item.create", json!([])).await;

    match result {
        Err(Error::Serialization(msg)) => assert!(msg.contains("item.create")),
        other => panic!("expected serialization error, got {:?}", other),
    }

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_transport_trait_returns_unwrapped_result() {
    let server = MockWsServer::echo().await;

    let client = RpcClient::connect(&server.url()).await.unwrap();
    let transport: &dyn RpcTransport = &client;

    let result = transport.call("item.delete", json!(["1", "2"])).await.unwrap();
    assert_eq!(result, json!(["1", "2"]));

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_null_id_error_fails_the_only_pending_request() {
    let server = MockWsServer::with_handler(|_req| {
        Reply::Send(mock_error_response(
            &Value::Null,
            -32600,
            "Invalid request.",
            "Invalid parameter \"/\": the parameter \"id\" is missing.",
        ))
    })
    .await;

    let client = ClientBuilder::new(server.url())
        .request_timeout(Duration::from_secs(10))
        .connect()
        .await
        .unwrap();

    let started = std::time::Instant::now();
    let result: Result<Value, _> = client.request("item.get", json!({})).await;

    match result {
        Err(Error::JsonRpc(data)) => {
            assert_eq!(data.code, -32600);
            assert!(data.detail().unwrap().contains("\"id\" is missing"));
        }
        other => panic!("expected remote error, got {:?}", other),
    }
    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(client.pending_requests().await, 0);

    client.close().await;
    server.shutdown().await;
}

#[tokio::test]
async fn test_unreadable_reply_fails_the_only_pending_request() {
    let server = MockWsServer::with_handler(|_req| Reply::Send("<html>502 Bad Gateway</html>".to_string())).await;

    let client = ClientBuilder::new(server.url()).without_timeout().connect().await.unwrap();

    let result: Result<Value, _> = client.request("item.get", json!({})).await;
    match result {
        Err(err @ Error::InvalidResponse(_)) => assert!(!err.is_remote()),
        other => panic!("expected invalid response, got {:?}", other),
    }

    client.close().await;
    server.shutdown().await;
}

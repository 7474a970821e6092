//! JSON-RPC 2.0 client over WebSocket for zbx
//!
//! `RpcClient` is the transport shipped with zbx: it implements
//! [`zbx_core::RpcTransport`], so it can back a `ZabbixApi` directly, and it
//! also offers typed `request` calls of its own.
//!
//! # Features
//!
//! - **Id correlation**: concurrent requests on one connection
//! - **Envelope unwrap**: remote error objects become `Error::JsonRpc`
//! - **Timeouts**: per-request limit, 30s by default
//! - **Observability**: `tracing` spans per call, optional OpenTelemetry metrics
//!
//! Authentication, reconnection and retries are left to the caller.
//!
//! # Zabbix deployments
//!
//! Zabbix frontends serve the API over HTTP (`api_jsonrpc.php`) only. Pointing
//! `RpcClient` at a Zabbix server therefore needs a WebSocket-to-HTTP JSON-RPC
//! proxy in front of the frontend, which also attaches the API token. To talk
//! HTTP directly, implement [`zbx_core::RpcTransport`] over your own session
//! and hand that to `ZabbixApi` instead.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use zbx_client::RpcClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RpcClient::connect("ws://localhost:8080").await?;
//!
//!     let version: String = client.request("apiinfo.version", serde_json::json!({})).await?;
//!     println!("API version: {}", version);
//!
//!     client.close().await;
//!     Ok(())
//! }
//! ```

mod client;
mod client_builder;
mod metrics;
mod request;

pub use client::RpcClient;
pub use client_builder::{ClientBuilder, DEFAULT_REQUEST_TIMEOUT};
pub use metrics::ClientMetrics;
pub use request::RequestManager;

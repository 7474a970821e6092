//! Core JSON-RPC 2.0 types and transport seam for zbx
//!
//! This crate holds everything the Zabbix API bindings and the shipped client
//! agree on:
//!
//! - **Types**: the JSON-RPC 2.0 request and response envelopes
//! - **Codec**: encoding requests and decoding responses
//! - **Error handling**: the shared `Error` enum and the remote error object
//! - **Transport**: the `RpcTransport` trait every API call is routed through
//! - **Observability**: `tracing` subscriber and OpenTelemetry setup
//!
//! # Architecture
//!
//! The API crate never talks to a socket. It marshals typed parameters into a
//! `serde_json::Value`, hands them to an `RpcTransport`, and unmarshals the
//! unwrapped `result` member. Anything that can perform that round trip
//! (the WebSocket client in `zbx-client`, a test double, an adapter over a
//! caller's own session) can back the API.
//!
//! # Example
//!
//! ```rust
//! use zbx_core::{codec, Id, JsonRpcRequest};
//!
//! let request = JsonRpcRequest::new(
//!     "item.get",
//!     Some(serde_json::json!({"hostids": ["10084"]})),
//!     Id::Number(1),
//! );
//!
//! let json = codec::encode_request(&request).unwrap();
//! assert!(json.contains("\"method\":\"item.get\""));
//! ```

pub mod codec;
pub mod error;
pub mod observability;
pub mod transport;
pub mod types;

pub use error::{Error, JsonRpcErrorData, Result};
pub use observability::{init_observability, shutdown_observability, ObservabilityConfig};
pub use transport::RpcTransport;
pub use types::{Id, JsonRpcRequest, JsonRpcResponse};

//! The RPC transport seam
//!
//! Every Zabbix API wrapper funnels through one primitive: call method `M`
//! with params `P` and hand back the unwrapped `result`. Session handling,
//! authentication and the wire itself belong to whoever implements
//! [`RpcTransport`].
//!
//! # Implementing a Transport
//!
//! ```rust
//! use async_trait::async_trait;
//! use serde_json::{json, Value};
//! use zbx_core::{Result, RpcTransport};
//!
//! struct Canned;
//!
//! #[async_trait]
//! impl RpcTransport for Canned {
//!     async fn call(&self, method: &str, _params: Value) -> Result<Value> {
//!         Ok(json!({ "called": method }))
//!     }
//! }
//! ```

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Invoke a remote method and return its unwrapped result
///
/// Implementations receive params that are already marshalled and must
/// return the `result` member of the response. A remote error object must be
/// surfaced as `Error::JsonRpc`, so callers can tell rejections from
/// transport failures.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    /// Perform one round trip
    async fn call(&self, method: &str, params: Value) -> Result<Value>;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        (**self).call(method, params).await
    }
}

#[async_trait]
impl<'a, T: RpcTransport + ?Sized> RpcTransport for &'a T {
    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        (**self).call(method, params).await
    }
}

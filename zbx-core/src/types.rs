//! JSON-RPC 2.0 envelope types
//!
//! The Zabbix API speaks plain JSON-RPC 2.0: the client sends a request
//! object naming a method such as `item.get`, the server answers with a
//! response carrying either a `result` or an `error` member and the same `id`.
//!
//! Only the two message kinds a management client needs are modelled here.
//! Notifications and batches are never produced by the API.

use crate::error::{Error, JsonRpcErrorData, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON-RPC 2.0 request ID
///
/// Correlates a response with the request that produced it. The protocol
/// allows a string, a number or null; the shipped client only ever issues
/// numbers but accepts any form back.
///
/// # Examples
///
/// ```rust
/// use zbx_core::Id;
///
/// let id1: Id = "req-7".into();
/// let id2: Id = 42i64.into();
///
/// assert_eq!(id1.to_string(), "\"req-7\"");
/// assert_eq!(id2.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    /// String identifier
    String(String),
    /// Numeric identifier
    Number(i64),
    /// Null identifier, used by servers that could not read the request id
    Null,
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::String(s) => write!(f, "\"{}\"", s),
            Id::Number(n) => write!(f, "{}", n),
            Id::Null => write!(f, "null"),
        }
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Id::String(s)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::String(s.to_string())
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

impl From<u64> for Id {
    /// Values above `i64::MAX` wrap; request counters never get there.
    fn from(n: u64) -> Self {
        Id::Number(n as i64)
    }
}

/// JSON-RPC 2.0 request message
///
/// `params` is omitted from the wire when `None`. Zabbix methods always take
/// params, either an object (`item.get`), an array of objects
/// (`item.create`) or an array of ids (`item.delete`).
///
/// # Examples
///
/// ```rust
/// use zbx_core::{Id, JsonRpcRequest};
/// use serde_json::json;
///
/// let req = JsonRpcRequest::new("item.delete", Some(json!(["28494"])), Id::Number(3));
/// assert_eq!(req.jsonrpc, "2.0");
/// assert_eq!(req.method, "item.delete");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Remote method name, e.g. `itemprototype.update`
    pub method: String,
    /// Marshalled parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<serde_json::Value>,
    /// Correlation id
    pub id: Id,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC 2.0 request
    pub fn new(method: impl Into<String>, params: Option<serde_json::Value>, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: method.into(),
            params,
            id,
        }
    }
}

/// JSON-RPC 2.0 response message
///
/// Carries exactly one of `result` or `error`. Use [`JsonRpcResponse::into_result`]
/// to unwrap the envelope into the value a caller actually wants.
///
/// # Examples
///
/// ```rust
/// use zbx_core::{Id, JsonRpcErrorData, JsonRpcResponse};
/// use serde_json::json;
///
/// let ok = JsonRpcResponse::success(json!({"itemids": ["24758"]}), Id::Number(1));
/// assert_eq!(ok.into_result().unwrap()["itemids"][0], "24758");
///
/// let failed = JsonRpcResponse::error(
///     JsonRpcErrorData::invalid_params("No permissions to referred object or it does not exist!"),
///     Id::Number(2),
/// );
/// assert!(failed.into_result().is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version, always "2.0"
    pub jsonrpc: String,
    /// Method result, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error object, present on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcErrorData>,
    /// Id of the request this answers
    pub id: Id,
}

impl JsonRpcResponse {
    /// Create a successful response
    pub fn success(result: serde_json::Value, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: JsonRpcErrorData, id: Id) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id,
        }
    }

    /// Whether the response carries a result
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Whether the response carries an error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Unwrap the envelope
    ///
    /// An `error` member wins over a `result` member if a misbehaving server
    /// sends both.
    ///
    /// # Errors
    ///
    /// - `Error::JsonRpc` when the server rejected the call
    /// - `Error::InvalidResponse` when neither member is present
    pub fn into_result(self) -> Result<serde_json::Value> {
        if let Some(error) = self.error {
            return Err(Error::JsonRpc(error));
        }
        self.result.ok_or_else(|| {
            Error::InvalidResponse(format!("response {} has neither result nor error", self.id))
        })
    }
}

//! Error types for zbx
//!
//! Two layers:
//!
//! - **Error**: what every fallible zbx operation returns (uses thiserror)
//! - **JsonRpcErrorData**: the `error` member of a JSON-RPC response, exactly as
//!   the server sent it
//!
//! # Zabbix Error Objects
//!
//! Zabbix fills `message` with a generic phrase and puts the useful part in
//! `data`:
//!
//! ```json
//! {"code": -32602, "message": "Invalid params.", "data": "Item with key \"agent.ping\" already exists on \"web01\"."}
//! ```
//!
//! `JsonRpcErrorData`'s `Display` therefore includes a string `data` member.
//!
//! # Examples
//!
//! ```rust
//! use zbx_core::{Error, JsonRpcErrorData};
//!
//! let remote = JsonRpcErrorData::with_data(-32602, "Invalid params.", "No permissions.".into());
//! assert_eq!(remote.detail(), Some("No permissions."));
//!
//! let error = Error::from(remote);
//! assert!(error.is_remote());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for zbx operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for zbx operations
///
/// # Error Categories
///
/// - **Remote**: `JsonRpc`, the API received the call and rejected it
/// - **Transport**: `WebSocket`, `ConnectionClosed`, `Timeout`
/// - **Marshalling**: `Serialization`, `InvalidResponse`
/// - **Local**: `Internal`
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Error object returned by the remote API
    #[error("JSON-RPC error: {0}")]
    JsonRpc(#[from] JsonRpcErrorData),

    /// Params could not be marshalled or a result could not be unmarshalled
    ///
    /// Usually a schema mismatch between the typed objects and what the
    /// server actually returned.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// WebSocket transport layer error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Well-formed JSON that is not a usable JSON-RPC response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Unexpected local failure (e.g. a dropped response channel)
    #[error("Internal error: {0}")]
    Internal(String),

    /// No response arrived within the configured request timeout
    #[error("Request timeout")]
    Timeout,

    /// The connection is gone; pending and later requests fail with this
    #[error("Connection closed")]
    ConnectionClosed,
}

impl Error {
    /// True when the remote API answered with an error object
    ///
    /// Remote errors are deterministic for a given request (bad params,
    /// missing permissions, duplicate keys); everything else is a transport
    /// or local problem.
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::JsonRpc(_))
    }

    /// Short label for metrics and log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Error::JsonRpc(_) => "json_rpc",
            Error::Serialization(_) => "serialization",
            Error::WebSocket(_) => "websocket",
            Error::InvalidResponse(_) => "invalid_response",
            Error::Internal(_) => "internal",
            Error::Timeout => "timeout",
            Error::ConnectionClosed => "connection_closed",
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// JSON-RPC 2.0 error object
///
/// # Standard Error Codes
///
/// - `-32700`: Parse error
/// - `-32600`: Invalid Request
/// - `-32601`: Method not found
/// - `-32602`: Invalid params (Zabbix uses this for most validation failures)
/// - `-32603`: Internal error
/// - `-32500`: Application error (Zabbix, e.g. session terminated)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorData {
    /// Numeric error code
    pub code: i32,

    /// Short description
    pub message: String,

    /// Additional information; a string with the real reason on Zabbix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcErrorData {
    /// Create an error object with code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create an error object with additional data
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zbx_core::JsonRpcErrorData;
    ///
    /// let error = JsonRpcErrorData::with_data(
    ///     -32602,
    ///     "Invalid params.",
    ///     "Incorrect value for field \"delay\".".into(),
    /// );
    /// assert_eq!(error.to_string(), "[-32602] Invalid params.: Incorrect value for field \"delay\".");
    /// ```
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Parse error (-32700)
    pub fn parse_error() -> Self {
        Self::new(-32700, "Parse error")
    }

    /// Invalid request error (-32600)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::new(-32600, msg)
    }

    /// Method not found error (-32601)
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::new(-32601, format!("Method not found: {}", method.into()))
    }

    /// Invalid params error (-32602)
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(-32602, msg)
    }

    /// Internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(-32603, msg)
    }

    /// `data` as text, when the server sent a string
    pub fn detail(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.as_str())
    }
}

impl std::fmt::Display for JsonRpcErrorData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "[{}] {}: {}", self.code, self.message, detail),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for JsonRpcErrorData {}

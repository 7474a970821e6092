//! Codec for JSON-RPC message serialization and deserialization
//!
//! Thin wrappers over `serde_json` that map failures onto the crate's error
//! type:
//!
//! - Unparseable text → `Error::InvalidResponse`
//! - Valid JSON that is not a response → `Error::InvalidResponse`
//! - Anything else serde rejects → `Error::Serialization`
//!
//! A reply the client cannot read is a local failure, never `Error::JsonRpc`,
//! so `Error::is_remote` stays reserved for error objects the server sent.
//!
//! # Examples
//!
//! ```rust
//! use zbx_core::codec;
//!
//! let response = codec::decode_response(r#"{"jsonrpc":"2.0","result":"7.0.3","id":1}"#).unwrap();
//! assert_eq!(response.into_result().unwrap(), "7.0.3");
//! ```

use crate::error::{Error, Result};
use crate::types::{JsonRpcRequest, JsonRpcResponse};
use serde::{Deserialize, Serialize};

/// Encode any serializable message to a JSON string
///
/// # Errors
///
/// Returns `Error::Serialization` if the value cannot be represented as JSON
/// (for instance a map with non-string keys).
pub fn encode<T: Serialize>(msg: &T) -> Result<String> {
    serde_json::to_string(msg).map_err(|e| Error::Serialization(e.to_string()))
}

/// Encode a JSON-RPC request
pub fn encode_request(req: &JsonRpcRequest) -> Result<String> {
    encode(req)
}

/// Decode a single JSON-RPC response
///
/// Parsing happens in two steps so that "not JSON at all" and "JSON, but not
/// a response object" get different messages.
///
/// # Errors
///
/// `Error::InvalidResponse` if the text is not JSON or not a response object
///
/// # Examples
///
/// ```rust
/// use zbx_core::{codec, Error};
///
/// let err = codec::decode_response("not json").unwrap_err();
/// assert!(matches!(err, Error::InvalidResponse(_)));
/// assert!(!err.is_remote());
/// ```
pub fn decode_response(data: &str) -> Result<JsonRpcResponse> {
    let value: serde_json::Value = serde_json::from_str(data)
        .map_err(|e| Error::InvalidResponse(format!("not JSON: {}", e)))?;

    if !value.is_object() {
        return Err(Error::InvalidResponse(
            "expected a single response object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::InvalidResponse(format!("not a JSON-RPC response: {}", e)))
}

/// Decode a JSON string directly into `T`
///
/// # Errors
///
/// Returns `Error::Serialization` if the JSON doesn't match `T`.
pub fn decode_as<'de, T: Deserialize<'de>>(data: &'de str) -> Result<T> {
    serde_json::from_str(data).map_err(|e| Error::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Id;
    use serde_json::json;

    #[test]
    fn test_encode_request() {
        let request = JsonRpcRequest::new("item.delete", Some(json!(["1", "2"])), Id::Number(9));
        let json = encode_request(&request).unwrap();

        assert!(json.contains("\"method\":\"item.delete\""));
        assert!(json.contains("\"params\":[\"1\",\"2\"]"));
        assert!(json.contains("\"id\":9"));
    }

    #[test]
    fn test_decode_success_response() {
        let json = r#"{"jsonrpc":"2.0","result":{"itemids":["24758"]},"id":1}"#;
        let response = decode_response(json).unwrap();

        assert!(response.is_success());
        assert_eq!(response.id, Id::Number(1));
    }

    #[test]
    fn test_decode_error_response() {
        let json = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Invalid params.","data":"No permissions to referred object or it does not exist!"},"id":3}"#;
        let response = decode_response(json).unwrap();

        assert!(response.is_error());
        let error = response.error.unwrap();
        assert_eq!(error.code, -32602);
        assert!(error.detail().unwrap().contains("No permissions"));
    }

    #[test]
    fn test_decode_invalid_json() {
        match decode_response("{not json") {
            Err(err @ Error::InvalidResponse(_)) => assert!(!err.is_remote()),
            other => panic!("expected invalid response, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_array_is_rejected() {
        match decode_response(r#"[{"jsonrpc":"2.0","result":1,"id":1}]"#) {
            Err(Error::InvalidResponse(msg)) => assert!(msg.contains("single response object")),
            other => panic!("expected invalid response, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_object_without_id_is_rejected() {
        match decode_response(r#"{"jsonrpc":"2.0","result":1}"#) {
            Err(Error::InvalidResponse(msg)) => assert!(msg.contains("id")),
            other => panic!("expected invalid response, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_as_typed() {
        let request: JsonRpcRequest =
            decode_as(r#"{"jsonrpc":"2.0","method":"item.get","params":{},"id":1}"#).unwrap();
        assert_eq!(request.method, "item.get");
        assert!(decode_as::<JsonRpcRequest>("[]").is_err());
    }
}

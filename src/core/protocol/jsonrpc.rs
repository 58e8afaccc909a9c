//! JSON-RPC 2.0 response envelope and error codes.
//!
//! Every dispatch outcome, whatever protocol the request arrived over, is a
//! [`JsonRpcResponse`]; the encoder then wraps it in the caller's wire
//! shape. The response `id` is the request id verbatim - including an
//! explicit `null` - which is why `id` is a plain [`Value`] here rather
//! than an `Option`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Create an error response carrying extra data.
    pub fn error_with_data(
        id: Value,
        code: i32,
        message: impl Into<String>,
        data: Value,
    ) -> Self {
        let mut response = Self::error(id, code, message);
        if let Some(err) = response.error.as_mut() {
            err.data = Some(data);
        }
        response
    }

    /// Parse error (malformed JSON before any dispatch).
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::error(Value::Null, error_codes::PARSE_ERROR, message)
    }

    /// Invalid request error.
    pub fn invalid_request(id: Value, message: impl Into<String>) -> Self {
        Self::error(id, error_codes::INVALID_REQUEST, message)
    }

    /// Method not found error.
    pub fn method_not_found(id: Value, message: impl Into<String>) -> Self {
        Self::error(id, error_codes::METHOD_NOT_FOUND, message)
    }

    /// Invalid params error.
    pub fn invalid_params(id: Value, message: impl Into<String>) -> Self {
        Self::error(id, error_codes::INVALID_PARAMS, message)
    }

    /// Internal error. The message is fixed; anything request-specific goes
    /// in `data` (and the details in server-side logs).
    pub fn internal_error(id: Value, data: Value) -> Self {
        Self::error_with_data(id, error_codes::INTERNAL_ERROR, "Internal error", data)
    }
}

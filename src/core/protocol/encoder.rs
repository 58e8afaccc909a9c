//! Response encoder: canonical results back to wire shapes.
//!
//! Per JSON-RPC convention, transport success and logical success are
//! separate: every dispatched outcome (including JSON-RPC error objects)
//! encodes at HTTP 200. Non-200 statuses are reserved for wire-level
//! failures detected before dispatch.

use serde_json::{Value, json};
use tracing::error;

use super::adapter::ProtocolTag;
use super::error::RequestError;
use super::jsonrpc::JsonRpcResponse;

/// A protocol-encoded response, ready for the transport to send.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedResponse {
    /// HTTP status. Transports without statuses (stdio) ignore it.
    pub status: u16,
    pub body: Value,
}

/// Encode a dispatched JSON-RPC response into the caller's wire shape.
pub fn encode(protocol: ProtocolTag, response: &JsonRpcResponse) -> EncodedResponse {
    match protocol {
        // Bare JSON-RPC object; logical errors are still transport success.
        ProtocolTag::JsonRpc | ProtocolTag::Direct => EncodedResponse {
            status: 200,
            body: to_value(response),
        },
        ProtocolTag::LambdaProxy => EncodedResponse {
            status: 200,
            body: proxy_wrap(200, &to_value(response)),
        },
    }
}

/// Encode a wire-level failure. The body doubles as a JSON-RPC error
/// object (id `null`) so JSON-RPC callers keep their error taxonomy even
/// on non-200 responses. A body that parsed but is not an object is a
/// protocol-level rejection, not a transport failure, so it stays at 200.
pub fn encode_request_error(err: &RequestError) -> EncodedResponse {
    let (status, response) = match err {
        RequestError::TooLarge { limit, .. } => (
            413,
            JsonRpcResponse::invalid_request(
                Value::Null,
                format!("Request body exceeds the {limit} byte limit"),
            ),
        ),
        RequestError::Parse(_) => (
            400,
            JsonRpcResponse::parse_error("Request body is not valid JSON"),
        ),
        RequestError::NotAnObject => (
            200,
            JsonRpcResponse::invalid_request(Value::Null, "Request body must be a JSON object"),
        ),
        RequestError::ProxyBody(_) => (
            400,
            JsonRpcResponse::parse_error("Proxy event body is not a JSON object"),
        ),
    };
    EncodedResponse {
        status,
        body: to_value(&response),
    }
}

/// Wrap a response in the Lambda-proxy integration shape: the payload is a
/// JSON-encoded *string* under `body`, next to CORS headers.
fn proxy_wrap(status_code: u16, payload: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "GET, POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": payload.to_string(),
    })
}

fn to_value(response: &JsonRpcResponse) -> Value {
    serde_json::to_value(response).unwrap_or_else(|e| {
        // JsonRpcResponse is plain data; serialization cannot realistically
        // fail, but the pipeline must still answer if it does.
        error!("failed to serialize response: {}", e);
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32603, "message": "Internal error"}
        })
    })
}

//! Protocol-layer error types.

use thiserror::Error;

use super::adapter::ProtocolTag;

/// Wire-level failures detected before any JSON-RPC processing.
///
/// These never reach the dispatcher or a tool handler; the encoder turns
/// them into non-200 responses.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request body exceeds the configured size cap. Detected before
    /// any JSON parsing is attempted.
    #[error("request body of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    /// The body is not valid JSON at the top level.
    #[error("request body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The body parsed but is not a JSON object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// A proxy event's `body` member could not be interpreted.
    #[error("proxy event body is invalid: {0}")]
    ProxyBody(String),
}

/// A flat invocation payload yielded no tool name under any candidate key.
///
/// This is a protocol-level failure (the JSON was valid); it surfaces as a
/// JSON-RPC `INVALID_REQUEST` at HTTP 200, never as a silent fallback to a
/// hardcoded default.
#[derive(Debug, Error)]
#[error(
    "no tool name found: expected 'name' or 'tool' at the top level, under 'input', \
     or under 'parameters'"
)]
pub struct ExtractionError {
    /// Protocol classified before extraction failed; drives encoding.
    pub protocol: ProtocolTag,
}

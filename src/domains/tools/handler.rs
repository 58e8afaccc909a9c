//! The contract every tool must satisfy.

use serde_json::{Map, Value};

use crate::core::context::ExecutionContext;

use super::{ToolDescriptor, ToolError, ToolResult};

/// Trait implemented by every registered tool.
///
/// Handlers are synchronous; a handler may perform blocking I/O (the DNS
/// lookup tool does) and the calling worker blocks for the duration. The
/// deadline carried by [`ExecutionContext`] is advisory: long-running
/// handlers should self-check it, the dispatcher never cancels them.
///
/// A handler must convert *expected* domain failures (division by zero,
/// negative square root, failed resolution) into
/// [`ToolResult::error`] values. Returning `Err` is reserved for
/// argument-type violations and infrastructure-level failures.
pub trait ToolHandler: Send + Sync {
    /// The tool's wire-visible metadata. Called once at registration.
    fn descriptor(&self) -> ToolDescriptor;

    /// Execute the tool over validated arguments.
    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError>;
}

/// Read a required number argument, rejecting wrong types.
///
/// Presence of required arguments is enforced by the dispatcher before
/// invocation; this guards the type.
pub fn require_number(arguments: &Map<String, Value>, key: &str) -> Result<f64, ToolError> {
    arguments
        .get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| ToolError::invalid_arguments(format!("'{key}' must be a number")))
}

/// Read a required string argument, rejecting wrong types.
pub fn require_str<'a>(
    arguments: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a str, ToolError> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::invalid_arguments(format!("'{key}' must be a string")))
}

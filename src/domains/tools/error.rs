//! Tool-specific error types.

use thiserror::Error;

/// Errors a tool handler may raise instead of returning a result.
///
/// Expected business failures must be returned as error *results*
/// ([`crate::domains::tools::ToolResult::error`]), not raised; raising is
/// reserved for argument-contract violations and genuinely unexpected
/// failures, which the dispatcher maps to JSON-RPC errors.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments were present but of the wrong type or shape.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The tool execution failed unexpectedly. The dispatcher reports
    /// these as an opaque JSON-RPC internal error.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }
}

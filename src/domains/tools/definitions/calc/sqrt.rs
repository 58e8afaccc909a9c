//! Square root tool.

use serde_json::{Map, Value};

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult, require_number};

use super::format_number;

/// Square root tool.
pub struct SqrtTool;

impl SqrtTool {
    pub const NAME: &'static str = "sqrt";
    pub const DESCRIPTION: &'static str =
        "Compute the square root of a number. Negative input is reported as an error result.";
}

impl ToolHandler for SqrtTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION).required_property(
            "number",
            "number",
            "Value to take the square root of",
        )
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let number = require_number(arguments, "number")?;
        if number < 0.0 {
            return Ok(ToolResult::error(format!(
                "Cannot take the square root of a negative number: {}",
                format_number(number)
            )));
        }
        Ok(ToolResult::text(format_number(number.sqrt())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(json: Value) -> Result<ToolResult, ToolError> {
        let args = json.as_object().unwrap().clone();
        SqrtTool.invoke(&args, &ExecutionContext::new(None))
    }

    #[test]
    fn test_sqrt_perfect_square() {
        let result = invoke(serde_json::json!({"number": 16})).unwrap();
        assert!(!result.is_error);
        assert_eq!(result.content[0].as_text(), "4");
    }

    #[test]
    fn test_sqrt_fractional() {
        let result = invoke(serde_json::json!({"number": 2.25})).unwrap();
        assert_eq!(result.content[0].as_text(), "1.5");
    }

    #[test]
    fn test_sqrt_negative_is_domain_error() {
        let result = invoke(serde_json::json!({"number": -4})).unwrap();
        assert!(result.is_error);
        assert!(result.content[0].as_text().contains("negative"));
    }

    #[test]
    fn test_sqrt_zero() {
        let result = invoke(serde_json::json!({"number": 0})).unwrap();
        assert_eq!(result.content[0].as_text(), "0");
    }
}

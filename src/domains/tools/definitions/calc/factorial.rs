//! Factorial tool.

use serde_json::{Map, Value};

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult};

use super::format_number;

/// Largest n for which n! stays finite in an f64.
const MAX_FACTORIAL_INPUT: i64 = 170;

/// Factorial tool.
pub struct FactorialTool;

impl FactorialTool {
    pub const NAME: &'static str = "factorial";
    pub const DESCRIPTION: &'static str = "Compute n! for a non-negative integer n. \
        Negative or overflowing input is reported as an error result.";

    fn execute(n: i64) -> ToolResult {
        if n < 0 {
            return ToolResult::error(format!(
                "Cannot compute the factorial of a negative number: {n}"
            ));
        }
        if n > MAX_FACTORIAL_INPUT {
            return ToolResult::error(format!(
                "Factorial of {n} overflows; the largest supported input is {MAX_FACTORIAL_INPUT}"
            ));
        }

        let mut product = 1.0_f64;
        for i in 2..=n {
            product *= i as f64;
        }
        ToolResult::text(format_number(product))
    }
}

impl ToolHandler for FactorialTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION).required_property(
            "n",
            "integer",
            "Non-negative integer to compute the factorial of",
        )
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let n = arguments
            .get("n")
            .and_then(Value::as_i64)
            .ok_or_else(|| ToolError::invalid_arguments("'n' must be an integer"))?;
        Ok(Self::execute(n))
    }
}

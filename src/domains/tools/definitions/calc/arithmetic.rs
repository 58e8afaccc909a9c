//! Binary arithmetic tools: add, subtract, multiply, divide.
//!
//! All four share the same argument contract (`a` and `b`, numbers) and the
//! same rendering rules; divide additionally treats division by exact zero
//! as a domain failure, returned as an error result rather than raised.

use serde_json::{Map, Value};
use tracing::info;

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult, require_number};

use super::format_number;

fn binary_descriptor(name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor::new(name, description)
        .required_property("a", "number", "First operand")
        .required_property("b", "number", "Second operand")
}

fn binary_operands(arguments: &Map<String, Value>) -> Result<(f64, f64), ToolError> {
    Ok((require_number(arguments, "a")?, require_number(arguments, "b")?))
}

/// Addition tool.
pub struct AddTool;

impl AddTool {
    pub const NAME: &'static str = "add";
    pub const DESCRIPTION: &'static str = "Add two numbers and return the sum.";
}

impl ToolHandler for AddTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_descriptor(Self::NAME, Self::DESCRIPTION)
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let (a, b) = binary_operands(arguments)?;
        Ok(ToolResult::text(format_number(a + b)))
    }
}

/// Subtraction tool.
pub struct SubtractTool;

impl SubtractTool {
    pub const NAME: &'static str = "subtract";
    pub const DESCRIPTION: &'static str = "Subtract the second number from the first.";
}

impl ToolHandler for SubtractTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_descriptor(Self::NAME, Self::DESCRIPTION)
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let (a, b) = binary_operands(arguments)?;
        Ok(ToolResult::text(format_number(a - b)))
    }
}

/// Multiplication tool.
pub struct MultiplyTool;

impl MultiplyTool {
    pub const NAME: &'static str = "multiply";
    pub const DESCRIPTION: &'static str = "Multiply two numbers and return the product.";
}

impl ToolHandler for MultiplyTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_descriptor(Self::NAME, Self::DESCRIPTION)
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let (a, b) = binary_operands(arguments)?;
        Ok(ToolResult::text(format_number(a * b)))
    }
}

/// Division tool.
pub struct DivideTool;

impl DivideTool {
    pub const NAME: &'static str = "divide";
    pub const DESCRIPTION: &'static str =
        "Divide the first number by the second. Division by zero is reported as an error result.";
}

impl ToolHandler for DivideTool {
    fn descriptor(&self) -> ToolDescriptor {
        binary_descriptor(Self::NAME, Self::DESCRIPTION)
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let (a, b) = binary_operands(arguments)?;
        if b == 0.0 {
            info!("divide called with zero divisor");
            return Ok(ToolResult::error("Cannot divide by zero"));
        }
        Ok(ToolResult::text(format_number(a / b)))
    }
}

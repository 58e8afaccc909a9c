//! Summary statistics tool.

use serde_json::{Map, Value};

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult};

use super::format_number;

/// Summary statistics tool: count, min, max, mean, and standard deviation.
pub struct StatsSummaryTool;

impl StatsSummaryTool {
    pub const NAME: &'static str = "stats_summary";
    pub const DESCRIPTION: &'static str = "Compute count, min, max, mean, and population \
        standard deviation for a list of numbers.";

    fn execute(values: &[f64]) -> ToolResult {
        if values.is_empty() {
            return ToolResult::error("Cannot summarize an empty list of values");
        }

        let count = values.len();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        let summary = format!(
            "count: {count}\nmin: {}\nmax: {}\nmean: {}\nstddev: {}",
            format_number(min),
            format_number(max),
            format_number(mean),
            format_number(variance.sqrt())
        );
        ToolResult::text(summary)
    }
}

impl ToolHandler for StatsSummaryTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION).required_property(
            "values",
            "array",
            "Numbers to summarize",
        )
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let values = arguments
            .get("values")
            .and_then(Value::as_array)
            .ok_or_else(|| ToolError::invalid_arguments("'values' must be an array"))?;

        let numbers: Vec<f64> = values
            .iter()
            .map(|v| {
                v.as_f64().ok_or_else(|| {
                    ToolError::invalid_arguments("'values' must contain only numbers")
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Self::execute(&numbers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoke(json: Value) -> Result<ToolResult, ToolError> {
        StatsSummaryTool.invoke(json.as_object().unwrap(), &ExecutionContext::new(None))
    }

    #[test]
    fn test_summary_of_known_values() {
        let result = invoke(serde_json::json!({"values": [2, 4, 4, 4, 5, 5, 7, 9]})).unwrap();
        let text = result.content[0].as_text();
        assert!(text.contains("count: 8"));
        assert!(text.contains("min: 2"));
        assert!(text.contains("max: 9"));
        assert!(text.contains("mean: 5"));
        assert!(text.contains("stddev: 2"));
    }

    #[test]
    fn test_empty_values_is_domain_error() {
        let result = invoke(serde_json::json!({"values": []})).unwrap();
        assert!(result.is_error);
        assert!(result.content[0].as_text().contains("empty"));
    }

    #[test]
    fn test_non_numeric_entry_is_invalid_arguments() {
        let outcome = invoke(serde_json::json!({"values": [1, "two", 3]}));
        assert!(matches!(outcome, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_single_value() {
        let result = invoke(serde_json::json!({"values": [3.5]})).unwrap();
        let text = result.content[0].as_text();
        assert!(text.contains("count: 1"));
        assert!(text.contains("stddev: 0"));
    }
}

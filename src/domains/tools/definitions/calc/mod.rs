//! Calculator tools.

mod arithmetic;
mod factorial;
mod sqrt;
mod stats;

pub use arithmetic::{AddTool, DivideTool, MultiplyTool, SubtractTool};
pub use factorial::FactorialTool;
pub use sqrt::SqrtTool;
pub use stats::StatsSummaryTool;

/// Render a numeric result for client-visible text.
///
/// Integer-valued results drop the trailing `.0`; fractional results are
/// printed at bounded precision with trailing zeros trimmed.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let rendered = format!("{value:.10}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

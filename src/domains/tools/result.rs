//! Canonical tool results.
//!
//! Every tool invocation produces a [`ToolResult`]: an ordered list of
//! content items plus an `isError` flag. Expected business failures (divide
//! by zero, failed DNS resolution, ...) are *successful* invocations whose
//! result carries `isError: true`; they are never surfaced as JSON-RPC
//! errors.

use serde::{Deserialize, Serialize};

/// A single piece of tool output. Only text content is produced today; the
/// tagged representation leaves room for other content kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Text { text: String },
}

impl ContentItem {
    /// Create a text content item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The text of this item.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// The protocol-independent outcome of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Output items, serialized in insertion order.
    pub content: Vec<ContentItem>,

    /// True when the invocation failed for an expected business reason.
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    /// A successful result with a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
            is_error: false,
        }
    }

    /// A domain-error result with a single text item.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentItem::text(text)],
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let result = ToolResult::text("5");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "5");
        assert_eq!(value["isError"], false);
    }

    #[test]
    fn test_error_result() {
        let result = ToolResult::error("Cannot divide by zero");
        assert!(result.is_error);
        assert_eq!(result.content[0].as_text(), "Cannot divide by zero");
    }

    #[test]
    fn test_content_order_preserved() {
        let result = ToolResult {
            content: vec![ContentItem::text("first"), ContentItem::text("second")],
            is_error: false,
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["content"][0]["text"], "first");
        assert_eq!(value["content"][1]["text"], "second");
    }

    #[test]
    fn test_roundtrip() {
        let result = ToolResult::error("négatif \u{2603}");
        let json = serde_json::to_string(&result).unwrap();
        let back: ToolResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}

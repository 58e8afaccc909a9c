//! Tool metadata types.
//!
//! A [`ToolDescriptor`] is the wire-visible description of a tool: its name,
//! a human-readable description, and a JSON-Schema-like input schema. The
//! descriptors are built once during registry construction and are immutable
//! afterwards; `tools/list` serializes them verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire-visible description of a registered tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Tool name as used in `tools/call`.
    pub name: String,

    /// Description shown to clients.
    pub description: String,

    /// Schema describing the tool's arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: InputSchema,
}

/// JSON-Schema-like description of a tool's argument object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    /// Always `"object"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// Per-argument schemas, keyed by argument name.
    pub properties: BTreeMap<String, SchemaProperty>,

    /// Argument names that must be present in `tools/call` arguments.
    pub required: Vec<String>,

    /// Whether arguments outside `properties` are accepted.
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

/// Schema for a single argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaProperty {
    /// JSON type name (`"number"`, `"string"`, `"array"`, ...).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ToolDescriptor {
    /// Create a descriptor with an empty object schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema: InputSchema::object(),
        }
    }

    /// Add an optional argument to the input schema.
    pub fn property(
        mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.input_schema.properties.insert(
            name.into(),
            SchemaProperty {
                kind: kind.into(),
                description: Some(description.into()),
            },
        );
        self
    }

    /// Add a required argument to the input schema.
    pub fn required_property(
        self,
        name: impl Into<String>,
        kind: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut descriptor = self.property(name.clone(), kind, description);
        descriptor.input_schema.required.push(name);
        descriptor
    }
}

impl InputSchema {
    /// An empty `type: "object"` schema rejecting unknown arguments.
    pub fn object() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
            additional_properties: false,
        }
    }
}

//! Tool registry - central registration and lookup for all tools.
//!
//! The registry is built once at process start and is read-only for the
//! process lifetime, so it can be shared across workers without locking.
//! Registration order is preserved: it is the order `tools/list` reports.

use std::collections::HashMap;

use crate::domains::tools::definitions::{
    AddTool, DivideTool, DnsLookupTool, FactorialTool, HelpdeskSearchTool, MultiplyTool, SqrtTool,
    StatsSummaryTool, SubtractTool,
};

use super::{ToolDescriptor, ToolHandler};

/// A tool together with its descriptor, captured at registration.
struct RegisteredTool {
    descriptor: ToolDescriptor,
    handler: Box<dyn ToolHandler>,
}

/// Tool registry - maps tool names to handlers and descriptors.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tools: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Register a tool. Names must be unique; registration happens at
    /// startup before any request is served.
    pub fn register(&mut self, handler: Box<dyn ToolHandler>) -> &mut Self {
        let descriptor = handler.descriptor();
        let name = descriptor.name.clone();
        let previous = self.index.insert(name.clone(), self.tools.len());
        assert!(previous.is_none(), "duplicate tool name: {name}");
        self.tools.push(RegisteredTool {
            descriptor,
            handler,
        });
        self
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<(&ToolDescriptor, &dyn ToolHandler)> {
        self.index
            .get(name)
            .and_then(|&i| self.tools.get(i))
            .map(|t| (&t.descriptor, t.handler.as_ref()))
    }

    /// Descriptors in registration order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter().map(|t| &t.descriptor)
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.descriptor.name.as_str()).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the registry with every tool this server ships.
pub fn build_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(Box::new(AddTool))
        .register(Box::new(SubtractTool))
        .register(Box::new(MultiplyTool))
        .register(Box::new(DivideTool))
        .register(Box::new(SqrtTool))
        .register(Box::new(FactorialTool))
        .register(Box::new(StatsSummaryTool))
        .register(Box::new(DnsLookupTool))
        .register(Box::new(HelpdeskSearchTool));
    registry
}

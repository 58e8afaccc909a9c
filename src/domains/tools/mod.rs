//! Tools domain module.
//!
//! Tools are named, schema-described operations exposed via `tools/list`
//! and invoked via `tools/call`, whatever protocol the call arrived over.
//!
//! ## Architecture
//!
//! - `definitions/` - individual tool implementations (one file per tool
//!   or per small family)
//! - `registry.rs` - central registration and O(1) lookup
//! - `descriptor.rs` / `result.rs` - wire-visible metadata and results
//! - `handler.rs` - the [`ToolHandler`] contract
//! - `error.rs` - tool-specific error types
//!
//! ## Adding a new tool
//!
//! 1. Create a file in `definitions/` with a params extraction step and an
//!    `execute()` implementation
//! 2. Implement [`ToolHandler`] for it
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `registry.rs::build_registry`

pub mod definitions;
mod descriptor;
mod error;
mod handler;
mod registry;
mod result;

pub use descriptor::{InputSchema, SchemaProperty, ToolDescriptor};
pub use error::ToolError;
pub use handler::{ToolHandler, require_number, require_str};
pub use registry::{ToolRegistry, build_registry};
pub use result::{ContentItem, ToolResult};

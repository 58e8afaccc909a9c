//! Multi-protocol tool invocation server.
//!
//! One process exposes a set of named, schema-described tools over three
//! incompatible invocation protocols at once: MCP-style JSON-RPC 2.0
//! envelopes (`tools/list` / `tools/call`), Lambda-proxy-style events
//! wrapping the real payload in a `body` member, and plain flat JSON
//! invocations over HTTP POST.
//!
//! # Architecture
//!
//! - **core**: infrastructure - configuration, execution context, the
//!   protocol layer (request adapter, JSON-RPC envelope, response
//!   encoder), the dispatcher, the server pipeline, and transports
//! - **domains**: business logic
//!   - **tools**: the registry and the tool implementations
//!     (calculator operations, DNS lookup, helpdesk search)
//!
//! # Example
//!
//! ```rust
//! use ops_mcp_server::core::{Config, McpServer};
//!
//! let server = McpServer::new(Config::default());
//! let response = server.handle_raw(
//!     br#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#,
//! );
//! assert_eq!(response.status, 200);
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer, TransportConfig, TransportService};
pub use domains::tools::{ToolHandler, ToolRegistry, ToolResult};

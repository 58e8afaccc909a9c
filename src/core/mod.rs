//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the server:
//! configuration, the per-request execution context, the protocol layer
//! (classification, JSON-RPC, encoding), the dispatcher, the server
//! pipeline, and the transport layer.

pub mod config;
pub mod context;
pub mod dispatcher;
pub mod protocol;
pub mod server;
pub mod transport;

pub use config::Config;
pub use context::ExecutionContext;
pub use dispatcher::Dispatcher;
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};

//! Transport layer for the server.
//!
//! Transports move bytes; protocol classification happens in the server
//! pipeline, so every payload shape (JSON-RPC envelope, Lambda-proxy
//! event, flat invocation) works over every transport.
//!
//! - **HTTP** (default): axum listener, JSON over POST on any path
//! - **STDIO**: one JSON payload per line on stdin, one response per line
//!   on stdout

mod config;
mod error;
mod service;

pub mod http;
pub mod stdio;

pub use config::{HttpConfig, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

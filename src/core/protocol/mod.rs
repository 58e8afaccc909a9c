//! Protocol layer: classification, JSON-RPC envelopes, and encoding.
//!
//! Data flow per request:
//!
//! ```text
//! bytes -> adapter::parse/extract -> Dispatcher::handle -> encoder::encode -> bytes
//! ```
//!
//! - `adapter` - classify an inbound payload and extract a canonical request
//! - `jsonrpc` - JSON-RPC 2.0 response envelope and error codes
//! - `encoder` - re-encode dispatched results into the caller's wire shape
//! - `error` - wire-level and extraction error types

pub mod adapter;
pub mod encoder;
pub mod error;
pub mod jsonrpc;

pub use adapter::{CanonicalRequest, ProtocolTag, RequestShape};
pub use encoder::EncodedResponse;
pub use error::{ExtractionError, RequestError};
pub use jsonrpc::{JsonRpcError, JsonRpcResponse, error_codes};

//! Server pipeline and lifecycle management.
//!
//! [`McpServer`] owns the registry and dispatcher and runs the full
//! per-request pipeline: classify, extract, dispatch, encode. Transports
//! only move bytes; every protocol decision lives here or below.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::core::config::Config;
use crate::core::context::ExecutionContext;
use crate::core::dispatcher::Dispatcher;
use crate::core::protocol::{EncodedResponse, JsonRpcResponse, adapter, encoder};
use crate::domains::tools::{ToolRegistry, build_registry};

/// The multi-protocol tool server.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    dispatcher: Dispatcher,
}

impl McpServer {
    /// Create a new server with the given configuration. The registry is
    /// built once here and is read-only afterwards.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let registry = Arc::new(build_registry());
        info!("registered {} tool(s)", registry.len());
        Self {
            dispatcher: Dispatcher::new(registry.clone()),
            config,
            registry,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool registry.
    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    /// Run the full pipeline over one raw request payload.
    ///
    /// This is synchronous and may block (tool handlers are allowed
    /// blocking I/O); transports call it from a blocking-capable worker.
    pub fn handle_raw(&self, body: &[u8]) -> EncodedResponse {
        let parsed = match adapter::parse(body, self.config.limits.max_body_bytes) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("rejected request at the wire level: {}", e);
                return encoder::encode_request_error(&e);
            }
        };

        let req = match adapter::extract(parsed) {
            Ok(req) => req,
            Err(e) => {
                debug!("extraction failed: {}", e);
                let response = JsonRpcResponse::invalid_request(
                    serde_json::Value::Null,
                    e.to_string(),
                );
                return encoder::encode(e.protocol, &response);
            }
        };

        let budget = self.config.limits.handler_deadline_ms;
        let ctx = ExecutionContext::new((budget > 0).then(|| Duration::from_millis(budget)));

        let response = self.dispatcher.handle(&req, &ctx);
        encoder::encode(req.protocol, &response)
    }
}

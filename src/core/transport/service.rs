//! Transport service - orchestrates the configured transport.

use tracing::info;

use super::http::HttpTransport;
use super::stdio::StdioTransport;
use super::{TransportConfig, TransportResult};
use crate::core::McpServer;

/// Transport service - manages the transport layer for the server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Create a transport service from environment variables.
    pub fn from_env() -> Self {
        Self::new(TransportConfig::from_env())
    }

    /// Get the transport configuration.
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Start the transport with the given server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            TransportConfig::Http(cfg) => HttpTransport::new(cfg).run(server).await,
            TransportConfig::Stdio => StdioTransport::run(server).await,
        }
    }
}

//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// HTTP transport (default): JSON over POST.
    Http(HttpConfig),

    /// Standard input/output transport, one JSON payload per line.
    Stdio,
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_cors() -> bool {
    true
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::Http(HttpConfig::default())
    }
}

impl TransportConfig {
    /// Create an HTTP transport config.
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Create a STDIO transport config.
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            "stdio" => Self::Stdio,
            _ => {
                let port = std::env::var("MCP_HTTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080);
                let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
                let enable_cors = std::env::var("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true);
                Self::Http(HttpConfig {
                    port,
                    host,
                    enable_cors,
                })
            }
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
            Self::Stdio => "STDIO (line-delimited JSON)".to_string(),
        }
    }
}

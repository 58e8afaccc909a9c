//! Configuration management for the server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use serde::{Deserialize, Serialize};

use super::transport::TransportConfig;

/// Main configuration structure for the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Admission and size limits.
    pub limits: LimitsConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Admission and size limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum accepted request body, in bytes. Oversized bodies are
    /// rejected before any JSON parsing.
    pub max_body_bytes: usize,

    /// Maximum concurrently processed requests; beyond this the HTTP
    /// transport answers 503 without invoking the pipeline.
    pub max_in_flight: usize,

    /// Advisory per-request time budget handed to tool handlers, in
    /// milliseconds. Zero disables the budget. Never enforced by the
    /// framework.
    pub handler_deadline_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 256 * 1024,
            max_in_flight: 64,
            handler_deadline_ms: 30_000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "ops-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            limits: LimitsConfig::default(),
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables are prefixed with `MCP_`, e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_MAX_BODY_BYTES`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(max_body) = env_parse("MCP_MAX_BODY_BYTES") {
            config.limits.max_body_bytes = max_body;
        }

        if let Some(max_in_flight) = env_parse("MCP_MAX_IN_FLIGHT") {
            config.limits.max_in_flight = max_in_flight;
        }

        if let Some(deadline) = env_parse("MCP_HANDLER_DEADLINE_MS") {
            config.limits.handler_deadline_ms = deadline;
        }

        config.transport = TransportConfig::from_env();

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "ops-mcp-server");
        assert!(config.limits.max_body_bytes > 0);
        assert!(config.limits.max_in_flight > 0);
    }

    #[test]
    fn test_limits_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_MAX_BODY_BYTES", "1024");
            std::env::set_var("MCP_MAX_IN_FLIGHT", "2");
        }
        let config = Config::from_env();
        assert_eq!(config.limits.max_body_bytes, 1024);
        assert_eq!(config.limits.max_in_flight, 2);
        unsafe {
            std::env::remove_var("MCP_MAX_BODY_BYTES");
            std::env::remove_var("MCP_MAX_IN_FLIGHT");
        }
    }

    #[test]
    fn test_invalid_env_value_falls_back_to_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_MAX_BODY_BYTES", "not a number");
        }
        let config = Config::from_env();
        assert_eq!(
            config.limits.max_body_bytes,
            LimitsConfig::default().max_body_bytes
        );
        unsafe {
            std::env::remove_var("MCP_MAX_BODY_BYTES");
        }
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "renamed");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "renamed");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }
}

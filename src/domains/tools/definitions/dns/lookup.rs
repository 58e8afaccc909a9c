//! DNS lookup tool.
//!
//! Resolves a hostname through the system resolver. This is blocking I/O:
//! the calling worker blocks for the duration of the query, and the tool
//! self-checks the advisory deadline before issuing it.

use std::net::ToSocketAddrs;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult, require_str};

/// DNS lookup tool.
pub struct DnsLookupTool;

impl DnsLookupTool {
    pub const NAME: &'static str = "dns_lookup";
    pub const DESCRIPTION: &'static str = "Resolve a hostname to its IP addresses using the \
        system resolver. Resolution failures are reported as an error result.";

    fn execute(hostname: &str, port: u16) -> ToolResult {
        match (hostname, port).to_socket_addrs() {
            Ok(addrs) => {
                let mut ips: Vec<String> = addrs.map(|a| a.ip().to_string()).collect();
                ips.dedup();
                if ips.is_empty() {
                    return ToolResult::error(format!("No addresses found for {hostname}"));
                }
                info!("Resolved {} to {} address(es)", hostname, ips.len());
                ToolResult::text(format!("{hostname} resolves to: {}", ips.join(", ")))
            }
            Err(e) => {
                warn!("DNS lookup failed for {}: {}", hostname, e);
                ToolResult::error(format!("DNS lookup failed for {hostname}: {e}"))
            }
        }
    }
}

impl ToolHandler for DnsLookupTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION)
            .required_property("hostname", "string", "Hostname to resolve")
            .property("port", "integer", "Port used for resolution (default 0)")
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let hostname = require_str(arguments, "hostname")?;
        if hostname.trim().is_empty() {
            return Ok(ToolResult::error("Hostname must not be empty"));
        }

        let port = match arguments.get("port") {
            None => 0,
            Some(value) => value
                .as_u64()
                .and_then(|p| u16::try_from(p).ok())
                .ok_or_else(|| {
                    ToolError::invalid_arguments("'port' must be an integer between 0 and 65535")
                })?,
        };

        // The deadline is advisory; refuse to start a query we cannot finish.
        if ctx.is_expired() {
            return Ok(ToolResult::error(format!(
                "Deadline exceeded before resolving {hostname}"
            )));
        }

        Ok(Self::execute(hostname, port))
    }
}

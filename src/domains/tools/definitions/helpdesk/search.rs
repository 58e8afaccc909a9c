//! IT-helpdesk knowledge-base search tool.
//!
//! Searches a small built-in knowledge base by keyword overlap. Zero hits
//! is a successful result, not a domain error: the search itself worked.

use serde_json::{Map, Value};
use tracing::info;

use crate::core::context::ExecutionContext;
use crate::domains::tools::{ToolDescriptor, ToolError, ToolHandler, ToolResult, require_str};

/// One knowledge-base article: title, match keywords, resolution steps.
struct Article {
    title: &'static str,
    keywords: &'static [&'static str],
    resolution: &'static str,
}

const KNOWLEDGE_BASE: &[Article] = &[
    Article {
        title: "VPN connection drops repeatedly",
        keywords: &["vpn", "disconnect", "drop", "tunnel", "remote"],
        resolution: "Restart the VPN client, verify the system clock is in sync, \
            and switch to the backup gateway if the primary keeps dropping.",
    },
    Article {
        title: "Password reset and account lockout",
        keywords: &["password", "reset", "lockout", "locked", "login", "account"],
        resolution: "Use the self-service portal to reset the password; accounts \
            unlock automatically 15 minutes after the last failed attempt.",
    },
    Article {
        title: "Printer not responding",
        keywords: &["printer", "print", "spooler", "paper", "toner"],
        resolution: "Clear the print queue, restart the spooler service, and \
            confirm the printer is on the office network segment.",
    },
    Article {
        title: "Email delivery delays",
        keywords: &["email", "mail", "outlook", "smtp", "delay", "delivery"],
        resolution: "Check the service-status page for queue backlogs; messages \
            over 25 MB are deferred and should be shared via the file server.",
    },
    Article {
        title: "Wi-Fi authentication failures",
        keywords: &["wifi", "wireless", "network", "authentication", "certificate"],
        resolution: "Forget and rejoin the corporate SSID; if the device \
            certificate has expired, re-enroll through the device portal.",
    },
    Article {
        title: "Slow laptop performance",
        keywords: &["slow", "performance", "laptop", "cpu", "memory", "disk"],
        resolution: "Reboot to clear leaked memory, check disk usage is below \
            90%, and make sure the endpoint scanner is not running a full scan.",
    },
];

const DEFAULT_LIMIT: usize = 3;

/// Knowledge-base search tool.
pub struct HelpdeskSearchTool;

impl HelpdeskSearchTool {
    pub const NAME: &'static str = "helpdesk_search";
    pub const DESCRIPTION: &'static str = "Search the IT-helpdesk knowledge base by keyword \
        and return the best-matching articles with their resolution steps.";

    fn execute(query: &str, limit: usize) -> ToolResult {
        let terms: Vec<String> = query
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let mut scored: Vec<(usize, &Article)> = KNOWLEDGE_BASE
            .iter()
            .filter_map(|article| {
                let score = terms
                    .iter()
                    .filter(|term| {
                        article.keywords.iter().any(|k| k.contains(term.as_str()))
                            || article.title.to_lowercase().contains(term.as_str())
                    })
                    .count();
                (score > 0).then_some((score, article))
            })
            .collect();

        // Stable sort keeps knowledge-base order among equal scores
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(limit);

        info!("helpdesk_search matched {} article(s)", scored.len());

        if scored.is_empty() {
            return ToolResult::text(format!(
                "No knowledge-base articles matched '{query}'. Try different keywords \
                 or open a ticket with the service desk."
            ));
        }

        let mut lines = vec![format!("Found {} article(s) for '{query}':", scored.len())];
        for (rank, (_score, article)) in scored.iter().enumerate() {
            lines.push(format!("{}. {}", rank + 1, article.title));
            lines.push(format!("   Resolution: {}", article.resolution));
        }
        ToolResult::text(lines.join("\n"))
    }
}

impl ToolHandler for HelpdeskSearchTool {
    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION)
            .required_property("query", "string", "Search terms describing the problem")
            .property("limit", "integer", "Maximum number of articles (default 3)")
    }

    fn invoke(
        &self,
        arguments: &Map<String, Value>,
        _ctx: &ExecutionContext,
    ) -> Result<ToolResult, ToolError> {
        let query = require_str(arguments, "query")?;
        if query.trim().is_empty() {
            return Ok(ToolResult::error("Search query must not be empty"));
        }

        let limit = match arguments.get("limit") {
            None => DEFAULT_LIMIT,
            Some(value) => value
                .as_u64()
                .filter(|&l| l > 0)
                .map(|l| l as usize)
                .ok_or_else(|| {
                    ToolError::invalid_arguments("'limit' must be a positive integer")
                })?,
        };

        Ok(Self::execute(query, limit))
    }
}

//! STDIO transport implementation.
//!
//! Line-delimited JSON on stdin/stdout: one payload per line in, one
//! response per line out. The payload goes through the same pipeline as
//! HTTP, so envelopes, proxy events, and flat invocations all work here
//! too; the HTTP status carried by the encoded response is dropped.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until stdin closes.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        let mut lines = stdin.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let worker = server.clone();
            let encoded =
                tokio::task::spawn_blocking(move || worker.handle_raw(line.as_bytes()))
                    .await
                    .map_err(|e| TransportError::task(e.to_string()))?;

            if encoded.status != 200 {
                warn!("request rejected at the wire level (status {})", encoded.status);
            }

            let mut out = serde_json::to_vec(&encoded.body)?;
            out.push(b'\n');
            stdout.write_all(&out).await?;
            stdout.flush().await?;
        }

        info!("STDIO transport finished");
        Ok(())
    }
}

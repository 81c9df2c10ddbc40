//! Newline-delimited JSON-RPC over stdin/stdout

use serde_json::Value;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::info;

use super::{error_response, McpServer, PARSE_ERROR};

impl McpServer {
    /// Serve on the process's stdin/stdout until stdin closes
    pub async fn serve_stdio(&self) -> io::Result<()> {
        info!(mode = ?self.registry().mode(), "MCP server listening on stdio");
        self.serve_lines(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Read one message per line and write one reply per line
    ///
    /// Messages are handled in order. Blank lines are skipped; a line that is
    /// not JSON gets a parse error reply.
    pub async fn serve_lines<R, W>(&self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            let reply = match serde_json::from_str::<Value>(&line) {
                Ok(message) => self.handle(message).await,
                Err(e) => Some(error_response(Value::Null, PARSE_ERROR, format!("Parse error: {e}"))),
            };

            if let Some(reply) = reply {
                let mut out = serde_json::to_vec(&reply)?;
                out.push(b'\n');
                writer.write_all(&out).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }
}

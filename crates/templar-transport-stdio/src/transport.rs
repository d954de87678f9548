//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is one line terminated by `\n`. Blank lines
//! between messages are skipped.

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Upper bound on a single incoming message.
pub const MAX_MESSAGE_BYTES: u64 = 4 * 1024 * 1024;

/// Reads messages from a reader and writes responses to a writer.
///
/// Generic over reader/writer so tests can drive it from memory.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
        }
    }

    /// Reads the next non-blank line, trimmed.
    ///
    /// Returns `None` on EOF.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Read` on I/O failure or when a line exceeds
    /// [`MAX_MESSAGE_BYTES`].
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        loop {
            let mut buf = Vec::new();
            let read = (&mut self.reader)
                .take(MAX_MESSAGE_BYTES + 1)
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| TransportError::Read(e.to_string()))?;

            if read == 0 {
                return Ok(None);
            }
            if buf.len() as u64 > MAX_MESSAGE_BYTES {
                return Err(TransportError::Read(format!(
                    "message exceeds {MAX_MESSAGE_BYTES} bytes"
                )));
            }

            let line = String::from_utf8_lossy(&buf);
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            trace!(len = trimmed.len(), "read message");
            return Ok(Some(trimmed.to_string()));
        }
    }

    /// Writes one message followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");
        let mut framed = Vec::with_capacity(message.len() + 1);
        framed.extend_from_slice(message.as_bytes());
        framed.push(b'\n');

        self.writer
            .write_all(&framed)
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;
        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))
    }
}

//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`
//! (a trailing `\r` is tolerated). This follows the MCP stdio transport.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::trace;

use crate::error::TransportError;

/// Reads JSON-RPC messages from an input stream, writes replies to an output stream.
///
/// Generic over reader/writer so tests can drive it with in-memory buffers.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    buf: Vec<u8>,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            buf: Vec::new(),
        }
    }

    /// Reads the next line, trimmed.
    ///
    /// Returns `None` on EOF and `Some("")` for a blank line. Invalid UTF-8
    /// is replaced rather than treated as a fatal read error, so the line
    /// surfaces as a JSON parse failure instead of ending the session.
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        self.buf.clear();
        let bytes_read = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if bytes_read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&self.buf);
        let trimmed = line.trim();
        trace!(len = trimmed.len(), "read message");
        Ok(Some(trimmed.to_string()))
    }

    /// Writes one message followed by `\n`, then flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        self.writer
            .write_all(message.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .write_all(b"\n")
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        Ok(())
    }

    /// Consumes the transport, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn transport(input: &[u8]) -> StdioTransport<Cursor<Vec<u8>>, Vec<u8>> {
        StdioTransport::new(Cursor::new(input.to_vec()), Vec::new())
    }

    #[tokio::test]
    async fn read_single_line() {
        let mut t = transport(b"{\"jsonrpc\":\"2.0\"}\n");
        let line = t.read_line().await.expect("read");
        assert_eq!(line, Some("{\"jsonrpc\":\"2.0\"}".to_string()));
    }

    #[tokio::test]
    async fn read_eof_returns_none() {
        let mut t = transport(b"");
        assert_eq!(t.read_line().await.expect("read"), None);
    }

    #[tokio::test]
    async fn read_last_line_without_newline() {
        let mut t = transport(b"tail");
        assert_eq!(t.read_line().await.expect("read"), Some("tail".to_string()));
        assert_eq!(t.read_line().await.expect("read"), None);
    }

    #[tokio::test]
    async fn read_strips_crlf() {
        let mut t = transport(b"{}\r\n");
        assert_eq!(t.read_line().await.expect("read"), Some("{}".to_string()));
    }

    #[tokio::test]
    async fn blank_line_is_empty_string() {
        let mut t = transport(b"   \nnext\n");
        assert_eq!(t.read_line().await.expect("r1"), Some(String::new()));
        assert_eq!(t.read_line().await.expect("r2"), Some("next".to_string()));
    }

    #[tokio::test]
    async fn invalid_utf8_is_not_fatal() {
        let mut t = transport(b"\xff\xfe\n{}\n");
        let first = t.read_line().await.expect("r1").expect("line");
        assert!(first.contains('\u{FFFD}'));
        assert_eq!(t.read_line().await.expect("r2"), Some("{}".to_string()));
    }

    #[tokio::test]
    async fn read_multibyte_text() {
        let mut t = transport("學而不思則罔\n".as_bytes());
        assert_eq!(
            t.read_line().await.expect("read"),
            Some("學而不思則罔".to_string())
        );
    }

    #[tokio::test]
    async fn write_appends_newline() {
        let mut t = transport(b"");
        t.write_line("{\"ok\":true}").await.expect("write");
        let output = String::from_utf8(t.into_writer()).expect("utf8");
        assert_eq!(output, "{\"ok\":true}\n");
    }
}

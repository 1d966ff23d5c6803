//! MCP server loop over stdio transport.
//!
//! Reads JSON-RPC messages line by line, dispatches requests via
//! `McpHandler`, and writes one reply per request. Notifications (no `id`)
//! are handled without a reply.

use tracing::{debug, error, info, warn};

use lingua_mcp::{JsonRpcOutput, McpHandler};
use lingua_protocol::{error_codes, IncomingMessage, JsonRpcErrorResponse, RequestId};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: McpHandler,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: McpHandler) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the input stream is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server starting on stdio");
        let mut served: u64 = 0;

        loop {
            let line = match self.transport.read_line().await? {
                Some(line) if line.is_empty() => continue,
                Some(line) => line,
                None => {
                    info!(served, "stdin closed, shutting down");
                    return Ok(());
                }
            };

            match IncomingMessage::parse(&line) {
                Ok(IncomingMessage::Request(request)) => {
                    debug!(method = %request.method, id = %request.id, "received request");
                    let output = self.handler.dispatch(&request);
                    if let JsonRpcOutput::Error(e) = &output {
                        debug!(code = e.error.code, message = %e.error.message, "request failed");
                    }
                    self.write_output(&output).await?;
                    served += 1;
                }
                Ok(IncomingMessage::Notification(notif)) => {
                    debug!(method = %notif.method, "received notification");
                    self.handler.handle_notification(&notif);
                }
                Err(e) => {
                    warn!(error = %e, "failed to parse JSON-RPC message");
                    let err = JsonRpcErrorResponse::error(
                        RequestId::Number(0),
                        error_codes::PARSE_ERROR,
                        format!("parse error: {e}"),
                    );
                    self.write_output(&JsonRpcOutput::Error(err)).await?;
                }
            }
        }
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Serialize(e.to_string()))
            }
        }
    }
}

//! MCP server loop over stdio transport.
//!
//! Reads one JSON-RPC message per line, dispatches it via `McpHandler`
//! and writes the response back. Notifications (no `id`) never get a
//! response line.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use templar_mcp::{JsonRpcOutput, McpHandler};
use templar_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcNotification, JsonRpcRequest, RequestId,
};

use crate::error::TransportError;
use crate::transport::StdioTransport;

/// MCP server that reads from a transport and dispatches to a handler.
pub struct McpServer<R, W> {
    transport: StdioTransport<R, W>,
    handler: Arc<McpHandler>,
}

impl<R, W> McpServer<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and handler.
    pub fn new(transport: StdioTransport<R, W>, handler: Arc<McpHandler>) -> Self {
        Self { transport, handler }
    }

    /// Runs the server loop until the transport is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("MCP server listening on stdio");

        while let Some(line) = self.transport.read_line().await? {
            if let Some(output) = handle_line(&self.handler, &line).await {
                self.write_output(&output).await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Serializes and writes a JSON-RPC output to the transport.
    async fn write_output(&mut self, output: &JsonRpcOutput) -> Result<(), TransportError> {
        match output.to_json() {
            Ok(json) => self.transport.write_line(&json).await,
            Err(e) => {
                error!(error = %e, "failed to serialize response");
                Err(TransportError::Write(e.to_string()))
            }
        }
    }
}

/// Handles one message line. Returns `None` for notifications.
pub async fn handle_line(handler: &McpHandler, line: &str) -> Option<JsonRpcOutput> {
    let value: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "failed to parse JSON-RPC message");
            return Some(error_output(
                error_codes::PARSE_ERROR,
                format!("parse error: {e}"),
            ));
        }
    };

    let has_id = value.get("id").is_some_and(|v| !v.is_null());
    if !has_id {
        match serde_json::from_value::<JsonRpcNotification>(value) {
            Ok(notification) => {
                debug!(method = %notification.method, "received notification");
                handler.handle_notification(&notification);
            }
            Err(e) => debug!(error = %e, "dropping malformed notification"),
        }
        return None;
    }

    match serde_json::from_value::<JsonRpcRequest>(value) {
        Ok(request) => {
            debug!(method = %request.method, id = %request.id, "received request");
            Some(handler.dispatch(&request).await)
        }
        Err(e) => Some(error_output(
            error_codes::INVALID_REQUEST,
            format!("invalid request: {e}"),
        )),
    }
}

// The offending message has no usable id; 0 stands in for it.
fn error_output(code: i32, message: String) -> JsonRpcOutput {
    JsonRpcOutput::Error(JsonRpcErrorResponse::error(RequestId::Number(0), code, message))
}

//! # templar-transport-stdio
//!
//! Stdio transport adapter for MCP JSON-RPC communication.
//!
//! Provides line-delimited JSON transport over stdin/stdout,
//! and a server loop that ties it together.

pub mod error;
pub mod server;
pub mod transport;

pub use error::TransportError;
// McpHandler lives in templar-mcp (APPLICATION layer); re-exported for convenience.
pub use templar_mcp::{JsonRpcOutput, McpHandler};
pub use server::McpServer;
pub use transport::StdioTransport;

/// Runs an MCP server on the process's stdin/stdout until stdin closes.
pub async fn serve_stdio(handler: std::sync::Arc<McpHandler>) -> Result<(), TransportError> {
    let transport = StdioTransport::new(tokio::io::stdin(), tokio::io::stdout());
    McpServer::new(transport, handler).run().await
}

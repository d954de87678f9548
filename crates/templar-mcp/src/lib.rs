//! # templar-mcp
//!
//! MCP method dispatch handler (APPLICATION layer).
//!
//! Provides `McpHandler` and `JsonRpcOutput` for routing JSON-RPC requests
//! to the catalog tools defined in [`catalog`].

pub mod catalog;
mod dispatch;
pub mod handler;

pub use catalog::CatalogTool;
pub use handler::{JsonRpcOutput, McpHandler};

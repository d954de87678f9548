//! HTTP transport adapter for templar.
//! Serves MCP over `POST /mcp` (optional Bearer token), health probes,
//! and the HTML interface from `templar-web` on the same listener.

pub mod auth;
mod error;
pub mod router;
pub mod server;

pub use error::HttpTransportError;
pub use router::{build_app, build_router, AppState};
pub use server::HttpServer;

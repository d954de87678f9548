//! HTTP server that binds the application router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use templar_mcp::McpHandler;
use templar_web::WebState;

use crate::error::HttpTransportError;
use crate::router::{build_app, AppState};

/// Axum-based HTTP server for MCP and the web UI.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
    pub(crate) web: WebState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// `token`, when set, guards `/mcp` only; the HTML pages stay open.
    pub fn new(
        handler: Arc<McpHandler>,
        web: WebState,
        addr: SocketAddr,
        token: Option<String>,
    ) -> Self {
        Self {
            addr,
            state: AppState { handler, token },
            web,
        }
    }

    /// Binds and serves until `shutdown` resolves.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|e| HttpTransportError::Bind {
                addr: self.addr.to_string(),
                source: e,
            })?;

        tracing::info!(
            addr = %self.addr,
            auth = self.state.token.is_some(),
            "templar HTTP server ready"
        );

        let app = build_app(self.state, self.web);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| HttpTransportError::Serve(e.to_string()))?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

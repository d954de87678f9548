//! `templar serve` command.
//!
//! Starts the HTTP server (MCP on `/mcp` plus the web UI) or an MCP
//! server over stdio.

use std::sync::Arc;

use clap::{Args, ValueEnum};

use templar_config::TemplarConfig;
use templar_mcp::McpHandler;
use templar_transport_http::HttpServer;
use templar_web::WebState;

use crate::shared;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// MCP + web UI over HTTP.
    Http,
    /// MCP only, line-delimited JSON-RPC on stdin/stdout.
    Stdio,
}

/// Start the server.
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, value_enum, default_value = "http")]
    pub transport: Transport,
    /// Interface to bind (overrides `server.host`).
    #[arg(long)]
    pub host: Option<String>,
    /// TCP port (overrides `server.port`).
    #[arg(long)]
    pub port: Option<u16>,
    /// Bearer token for `/mcp` (overrides `server.token`).
    #[arg(long)]
    pub token: Option<String>,
    /// Skip demo seeding even if the store is empty.
    #[arg(long)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// Applies command-line overrides on top of the loaded config.
    fn apply(&self, config: &TemplarConfig) -> TemplarConfig {
        let mut config = config.clone();
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if self.token.is_some() {
            config.server.token = self.token.clone();
        }
        if self.no_seed {
            config.store.seed = false;
        }
        config
    }
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let config = args.apply(config);
    let repo = shared::open_repository(&config)?;
    if config.store.seed {
        shared::seed_demo(&repo).await?;
    }
    let handler = Arc::new(McpHandler::new(repo.clone()));

    match args.transport {
        Transport::Http => {
            let addr = config
                .server
                .socket_addr()
                .map_err(|e| anyhow::anyhow!("invalid server.host '{}': {e}", config.server.host))?;
            let web = WebState::new(repo).map_err(|e| anyhow::anyhow!("web UI init error: {e}"))?;
            let server = HttpServer::new(handler, web, addr, config.server.token.clone());
            server
                .run(shutdown_signal())
                .await
                .map_err(|e| anyhow::anyhow!("server error: {e}"))?;
        }
        Transport::Stdio => {
            tokio::select! {
                result = templar_transport_stdio::serve_stdio(handler) => {
                    result.map_err(|e| anyhow::anyhow!("server error: {e}"))?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("shutdown signal received");
                }
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

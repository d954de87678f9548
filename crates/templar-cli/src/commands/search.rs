//! `templar search` command.

use clap::Args;
use serde_json::json;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;

use crate::{output, shared};

/// Search name, description and tags (case-insensitive substring).
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for.
    pub query: String,
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the search command.
pub async fn execute(args: &SearchArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    let items = repo
        .search(&args.query)
        .await
        .map_err(|e| anyhow::anyhow!("search failed: {e}"))?;
    tracing::debug!(query = %args.query, hits = items.len(), "search finished");
    if args.json {
        output::print_json(&json!(items))?;
    } else {
        println!("{}", output::summary_table(&items));
    }
    Ok(())
}

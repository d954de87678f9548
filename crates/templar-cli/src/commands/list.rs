//! `templar list` command.

use clap::Args;
use serde_json::json;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;

use crate::{output, shared};

/// List every template (without code).
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the list command.
pub async fn execute(args: &ListArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    let items = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("list failed: {e}"))?;
    if args.json {
        output::print_json(&json!(items))?;
    } else {
        println!("{}", output::summary_table(&items));
    }
    Ok(())
}

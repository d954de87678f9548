//! `templar update` command.
//!
//! Fields not given on the command line keep their stored value; the
//! record is still written back whole.

use std::path::PathBuf;

use clap::Args;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;
use templar_types::{parse_tags, TemplateDraft};

use crate::{input, output, shared};

/// Update a template in place. The id never changes.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Template id.
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    /// Comma-separated tags (replaces all tags).
    #[arg(short, long)]
    pub tags: Option<String>,
    /// Inline code body.
    #[arg(long)]
    pub code: Option<String>,
    /// Read the code body from a file (`-` for stdin).
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

/// Executes the update command.
pub async fn execute(args: &UpdateArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    let current = repo
        .get(&args.id)
        .await
        .map_err(|e| anyhow::anyhow!("registry error: {e}"))?
        .ok_or_else(|| shared::not_found(&args.id))?;

    let code = input::resolve_code(args.code.as_deref(), args.code_file.as_deref())?;
    let draft = TemplateDraft {
        name: args
            .name
            .as_deref()
            .map_or(current.name, |n| n.trim().to_string()),
        description: args
            .description
            .as_deref()
            .map_or(current.description, |d| d.trim().to_string()),
        tags: args.tags.as_deref().map_or(current.tags, parse_tags),
        code: code.unwrap_or(current.code),
    };
    draft.validate().map_err(|e| anyhow::anyhow!(e.message))?;

    match repo
        .update(&args.id, &draft)
        .await
        .map_err(|e| anyhow::anyhow!("update failed: {e}"))?
    {
        Some(updated) => {
            output::print_success(&format!("Updated {} ({})", updated.name, updated.id));
            Ok(())
        }
        // Deleted between the read and the write.
        None => Err(shared::not_found(&args.id)),
    }
}

//! `templar delete` command.

use clap::Args;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;

use crate::{output, shared};

/// Delete a template by id.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Template id.
    pub id: String,
    /// Succeed even if the template does not exist.
    #[arg(long)]
    pub missing_ok: bool,
}

/// Executes the delete command.
pub async fn execute(args: &DeleteArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    let removed = repo
        .delete(&args.id)
        .await
        .map_err(|e| anyhow::anyhow!("delete failed: {e}"))?;

    match (removed, args.missing_ok) {
        (true, _) => output::print_success(&format!("Deleted {}", args.id)),
        (false, true) => output::print_success(&format!("Nothing to delete for {}", args.id)),
        (false, false) => return Err(shared::not_found(&args.id)),
    }
    Ok(())
}

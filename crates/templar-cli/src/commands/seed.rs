//! `templar seed` command.

use clap::Args;

use templar_config::TemplarConfig;

use crate::{output, shared};

/// Create the demo templates if the store is empty.
#[derive(Debug, Args)]
pub struct SeedArgs {}

/// Executes the seed command.
pub async fn execute(_args: &SeedArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    match shared::seed_demo(&repo).await? {
        0 => output::print_success("Store already has templates, nothing seeded"),
        n => output::print_success(&format!("Seeded {n} demo templates")),
    }
    Ok(())
}

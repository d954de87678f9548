//! Shared helpers used across CLI commands.

use std::sync::Arc;

use templar_config::TemplarConfig;
use templar_registry::seed_if_empty;
use templar_types::TemplarError;
use templar_store_fs::FsTemplateRepository;

use crate::seeds;

/// Opens the template store configured in `store.templates_dir`,
/// creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn open_repository(config: &TemplarConfig) -> anyhow::Result<Arc<FsTemplateRepository>> {
    let repo = FsTemplateRepository::new(&config.store.templates_dir);
    repo.ensure_dir().map_err(|e| {
        anyhow::anyhow!(
            "cannot open template directory {}: {e}",
            config.store.templates_dir.display()
        )
    })?;
    tracing::debug!(dir = %repo.dir().display(), "template store opened");
    Ok(Arc::new(repo))
}

/// The error reported when `id` names no template.
pub fn not_found(id: &str) -> anyhow::Error {
    TemplarError::not_found("template not found")
        .with_context(format!("id: {id}"))
        .into()
}

/// Creates the built-in demo templates if the store holds none.
/// Returns how many were created.
pub async fn seed_demo(repo: &FsTemplateRepository) -> anyhow::Result<usize> {
    seed_if_empty(repo, &seeds::demo_templates())
        .await
        .map_err(|e| anyhow::anyhow!("seeding failed: {e}"))
}

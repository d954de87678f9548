//! First-run seeding of an empty catalog.

use templar_types::TemplateDraft;

use crate::repository::{RepositoryError, TemplateRepository};

/// Creates `drafts` only if the repository currently lists no templates.
///
/// Returns the number of templates created (zero when the catalog was
/// already populated).
pub async fn seed_if_empty(
    repository: &dyn TemplateRepository,
    drafts: &[TemplateDraft],
) -> Result<usize, RepositoryError> {
    if !repository.list().await?.is_empty() {
        return Ok(0);
    }
    for draft in drafts {
        repository.create(draft).await?;
    }
    tracing::info!(count = drafts.len(), "seeded empty template catalog");
    Ok(drafts.len())
}

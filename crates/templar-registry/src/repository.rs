//! Abstract repository trait (port) for template storage.

use async_trait::async_trait;
use thiserror::Error;

use templar_types::{Template, TemplateDraft, TemplateSummary};

/// Errors returned by repository implementations.
///
/// Expected conditions (a missing or unreadable record) are never errors:
/// they surface as `None`, `false` or an omitted list entry. Only failures
/// of the storage location itself end up here.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A filesystem or database error occurred.
    #[error("storage error: {message}")]
    Storage { message: String },
    /// A record could not be encoded for writing.
    #[error("encode error: {message}")]
    Encode { message: String },
}

/// Abstract trait for template persistence.
///
/// Implementations live in adapter crates (e.g., `templar-store-fs`).
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Lists summaries of every readable template, ordered by id.
    async fn list(&self) -> Result<Vec<TemplateSummary>, RepositoryError>;

    /// Loads the full record for `id`, or `None` if it is missing or unreadable.
    async fn get(&self, id: &str) -> Result<Option<Template>, RepositoryError>;

    /// Creates a new template, assigning a unique id derived from its name.
    async fn create(&self, draft: &TemplateDraft) -> Result<Template, RepositoryError>;

    /// Replaces every field of an existing template except its id.
    /// Returns `None` (and writes nothing) if `id` does not exist.
    async fn update(
        &self,
        id: &str,
        draft: &TemplateDraft,
    ) -> Result<Option<Template>, RepositoryError>;

    /// Deletes a template by id. Returns true if it existed.
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;

    /// Case-insensitive substring search over name, description and tags.
    ///
    /// Results keep the ordering of [`list`](Self::list).
    async fn search(&self, query: &str) -> Result<Vec<TemplateSummary>, RepositoryError> {
        let all = self.list().await?;
        Ok(all.into_iter().filter(|t| t.matches(query)).collect())
    }
}

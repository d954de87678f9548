//! `TemplateRepository` trait implementation for `FsTemplateRepository`.

use async_trait::async_trait;
use templar_registry::{RepositoryError, TemplateRepository};
use templar_types::{Template, TemplateDraft, TemplateSummary};

use crate::record::RecordLoad;
use crate::repository::FsTemplateRepository;

#[async_trait]
impl TemplateRepository for FsTemplateRepository {
    async fn list(&self) -> Result<Vec<TemplateSummary>, RepositoryError> {
        let summaries = self
            .scan()?
            .into_iter()
            .filter_map(|load| match load {
                RecordLoad::Loaded(template) => Some(TemplateSummary::from(template)),
                RecordLoad::Skipped { path, reason } => {
                    tracing::warn!(path = %path.display(), %reason, "skipping template record");
                    None
                }
            })
            .collect();
        Ok(summaries)
    }

    async fn get(&self, id: &str) -> Result<Option<Template>, RepositoryError> {
        Ok(self.load(id))
    }

    async fn create(&self, draft: &TemplateDraft) -> Result<Template, RepositoryError> {
        let template = self.insert(draft)?;
        tracing::debug!(id = %template.id, "template created");
        Ok(template)
    }

    async fn update(
        &self,
        id: &str,
        draft: &TemplateDraft,
    ) -> Result<Option<Template>, RepositoryError> {
        let updated = self.replace(id, draft)?;
        if updated.is_some() {
            tracing::debug!(%id, "template updated");
        }
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let removed = self.remove(id)?;
        tracing::debug!(%id, removed, "template delete");
        Ok(removed)
    }
}

//! `templar create` command.

use std::path::PathBuf;

use clap::Args;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;
use templar_types::TemplateDraft;

use crate::{input, output, shared};

/// Create a template. The id is derived from the name.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Template name (required, must not be blank).
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Comma-separated tags.
    #[arg(short, long, default_value = "")]
    pub tags: String,
    /// Inline code body.
    #[arg(long)]
    pub code: Option<String>,
    /// Read the code body from a file (`-` for stdin).
    #[arg(long)]
    pub code_file: Option<PathBuf>,
}

/// Executes the create command.
pub async fn execute(args: &CreateArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let code = input::resolve_code(args.code.as_deref(), args.code_file.as_deref())?
        .unwrap_or_default();
    let draft = TemplateDraft::from_input(&args.name, &args.description, &args.tags, &code);
    draft.validate().map_err(|e| anyhow::anyhow!(e.message))?;

    let repo = shared::open_repository(config)?;
    let created = repo
        .create(&draft)
        .await
        .map_err(|e| anyhow::anyhow!("create failed: {e}"))?;
    output::print_success(&format!("Created {} ({})", created.name, created.id));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::scratch_config;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.into(),
            description: " Basic invoice ".into(),
            tags: "finance, ru".into(),
            code: Some("<code/>".into()),
            code_file: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_slug_id() {
        let (_tmp, config) = scratch_config();
        execute(&args("Invoice Template"), &config).await.expect("create");
        let repo = shared::open_repository(&config).expect("open");
        let stored = repo
            .get("invoice_template")
            .await
            .expect("get")
            .expect("exists");
        assert_eq!(stored.description, "Basic invoice");
        assert_eq!(stored.tags, vec!["finance", "ru"]);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let (_tmp, config) = scratch_config();
        let err = execute(&args("   "), &config).await.expect_err("blank");
        assert!(err.to_string().contains("Name cannot be empty"));
    }
}

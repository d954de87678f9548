//! `templar get` command.

use clap::Args;
use serde_json::json;

use templar_config::TemplarConfig;
use templar_registry::TemplateRepository;

use crate::{output, shared};

/// Show one template, including its code.
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Template id.
    pub id: String,
    /// Print the full JSON record.
    #[arg(long, conflicts_with = "code_only")]
    pub json: bool,
    /// Print only the code body.
    #[arg(long)]
    pub code_only: bool,
}

/// Executes the get command.
pub async fn execute(args: &GetArgs, config: &TemplarConfig) -> anyhow::Result<()> {
    let repo = shared::open_repository(config)?;
    let template = repo
        .get(&args.id)
        .await
        .map_err(|e| anyhow::anyhow!("registry error: {e}"))?
        .ok_or_else(|| shared::not_found(&args.id))?;

    if args.json {
        output::print_json(&json!(template))?;
    } else if args.code_only {
        print!("{}", template.code);
    } else {
        println!("{}", output::template_detail(&template));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::scratch_config;

    #[tokio::test]
    async fn get_missing_template_fails() {
        let (_tmp, config) = scratch_config();
        let args = GetArgs {
            id: "ghost".into(),
            json: false,
            code_only: false,
        };
        let err = execute(&args, &config).await.expect_err("missing");
        assert!(err.to_string().contains("not found"));
    }
}

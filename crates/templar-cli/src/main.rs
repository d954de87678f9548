//! templar CLI: a catalog of reusable code templates.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use templar_config::TemplarConfig;

mod commands;
mod input;
mod output;
mod seeds;
pub(crate) mod shared;

/// templar - code template catalog served over MCP and HTML.
#[derive(Debug, Parser)]
#[command(name = "templar", version, about)]
struct Cli {
    /// Configuration file path (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Template directory (overrides `store.templates_dir`).
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value = "plain")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Plain,
    /// One JSON object per event, for log aggregation.
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve MCP and the web UI over HTTP, or MCP over stdio.
    Serve(commands::serve::ServeArgs),
    /// List templates.
    List(commands::list::ListArgs),
    /// Show a template with its code.
    Get(commands::get::GetArgs),
    /// Search templates by name, description and tags.
    Search(commands::search::SearchArgs),
    /// Create a template.
    Create(commands::create::CreateArgs),
    /// Update a template in place.
    Update(commands::update::UpdateArgs),
    /// Delete a template.
    Delete(commands::delete::DeleteArgs),
    /// Create the demo templates if the store is empty.
    Seed(commands::seed::SeedArgs),
}

/// Picks the log filter: `RUST_LOG` wins, then `-v` flags, then config.
fn log_filter(verbose: u8, configured: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_tracing(format: LogFormat, filter: EnvFilter) {
    // stdout carries command output and the stdio MCP stream.
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().with_target(true).init(),
        LogFormat::Plain => builder.init(),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<TemplarConfig> {
    let mut config = templar_config::load_config(cli.config.as_deref())?;
    if let Some(dir) = &cli.templates_dir {
        config.store.templates_dir = dir.clone();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(cli.log_format, log_filter(cli.verbose, &config.logging.level));

    tracing::debug!(
        config = ?cli.config,
        templates_dir = %config.store.templates_dir.display(),
        "templar starting"
    );

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::List(args) => commands::list::execute(args, &config).await,
        Commands::Get(args) => commands::get::execute(args, &config).await,
        Commands::Search(args) => commands::search::execute(args, &config).await,
        Commands::Create(args) => commands::create::execute(args, &config).await,
        Commands::Update(args) => commands::update::execute(args, &config).await,
        Commands::Delete(args) => commands::delete::execute(args, &config).await,
        Commands::Seed(args) => commands::seed::execute(args, &config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "templar",
            "list",
            "--templates-dir",
            "/tmp/t",
            "-vv",
            "--log-format",
            "json",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.log_format, LogFormat::Json));
        assert_eq!(cli.templates_dir, Some(PathBuf::from("/tmp/t")));
    }

    #[test]
    fn serve_defaults_to_http() {
        let cli = Cli::try_parse_from(["templar", "serve"]).expect("parse");
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.transport, commands::serve::Transport::Http);
    }

    #[test]
    fn create_requires_name() {
        assert!(Cli::try_parse_from(["templar", "create"]).is_err());
    }
}

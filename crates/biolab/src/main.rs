//! BioLab command-line entry point.

use anyhow::{Context, Result};
use biolab::cli::{Cli, Command};
use biolab::{AppConfig, Console, ContentProvider, LlmClient, LlmContentProvider, ScriptedContentProvider};
use clap::Parser;
use std::sync::Arc;
use tokio::io::BufReader;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout belongs to the console.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let command = cli.command.unwrap_or(Command::Menu);

    let provider: Arc<dyn ContentProvider> = if cli.offline || command == Command::Topics {
        info!("Using built-in sample content");
        Arc::new(ScriptedContentProvider::sample())
    } else {
        let llm_config = config
            .create_llm_config()
            .context("LLM credentials missing (run with --offline to use sample content)")?;
        info!(provider = ?llm_config.provider(), model = %llm_config.model(), "Using LLM content");
        Arc::new(LlmContentProvider::new(LlmClient::new(llm_config)))
    };

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        provider,
        config,
    );
    if let Err(e) = console.run(command).await {
        warn!(error = %e, "Console stopped");
        return Err(e).context("Terminal I/O failed");
    }
    Ok(())
}

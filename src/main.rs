//! Steward CLI entry point.

use anyhow::Context;
use clap::Parser;

use steward::cli::{dispatch, handle_error, AppContext, Cli};
use steward::infrastructure::config::ConfigLoader;
use steward::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        handle_error(err, json_mode);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let _logger = LoggerImpl::init(&config.logging).context("Failed to initialize logging")?;
    tracing::debug!(agent = %config.chat.default_agent, model = %config.remote.model_id, "configuration loaded");

    let ctx = AppContext::from_config(config)?;
    dispatch(cli.command, &ctx, cli.json).await
}

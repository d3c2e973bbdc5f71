mod cli;
mod config;
mod declaration;
mod destination;
mod document_types;
mod github;
mod http;
mod logger;
mod service;
mod slug;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;

    logger::init(&config.log_level, cli.verbose)?;

    log::debug!("Starting");
    cli::run(cli, config).await
}

//! Rewind - terminal tic-tac-toe with move history and a live clock.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, TuiConfig, init_tracing, run};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.merge_cli(&cli);
    init_tracing(config.log_file())?;
    info!(?config, "Configuration resolved");

    run(&config)
}

//! Command-line interface for rewind.

use clap::Parser;
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time-travel history and a live clock
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "rewind")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Do not annotate moves with their column and row
    #[arg(long)]
    pub no_coordinates: bool,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Start with the clock hidden
    #[arg(long)]
    pub no_clock: bool,

    /// Clock tick interval in milliseconds
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// File that receives tracing output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

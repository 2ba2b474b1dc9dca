//! Front-end configuration loaded from TOML, with CLI overrides.

use crate::cli::Cli;
use crate::clock::DEFAULT_TICK;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_tictactoe::{GameState, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Annotate moves with their column and row.
    track_coordinates: bool,

    /// List moves newest first.
    start_descending: bool,

    /// Show the clock on start.
    show_clock: bool,

    /// Clock tick interval in milliseconds.
    tick_ms: u64,

    /// File that receives tracing output.
    log_file: PathBuf,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            track_coordinates: true,
            start_descending: false,
            show_clock: true,
            tick_ms: DEFAULT_TICK.as_millis() as u64,
            log_file: PathBuf::from("rewind.log"),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be greater than zero"));
        }

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.no_coordinates {
            self.track_coordinates = false;
        }
        if cli.descending {
            self.start_descending = true;
        }
        if cli.no_clock {
            self.show_clock = false;
        }
        if let Some(tick_ms) = cli.tick_ms.filter(|ms| *ms > 0) {
            self.tick_ms = tick_ms;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        self
    }

    /// Clock tick interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Fresh game state honouring these settings.
    pub fn new_game(&self) -> GameState {
        let sort = if self.start_descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        GameState::with_coordinates(self.track_coordinates).with_sort_order(sort)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

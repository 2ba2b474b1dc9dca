//! Terminal front-end for rewind tic-tac-toe.
//!
//! - **App**: holds the single game-state cell and maps keys to transitions
//! - **UI**: board with winning-line highlight, status, move list, clock
//! - **Clock**: independent 1-second tick task with a scoped handle
//! - **Config**: TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod clock;
mod config;
mod input;
mod terminal;
pub mod ui;

pub use app::{App, AppAction, Focus};
pub use cli::Cli;
pub use clock::{ClockHandle, ClockWidget, DEFAULT_TICK, caption, format_time, mount};
pub use config::{ConfigError, TuiConfig};
pub use input::{digit_cell, move_cursor, move_selection};
pub use terminal::{init_tracing, run};

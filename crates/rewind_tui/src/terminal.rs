//! Terminal setup and the event loop.

use crate::app::{App, AppAction};
use crate::clock::ClockWidget;
use crate::config::TuiConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Sends tracing output to `log_file` so it does not draw over the TUI.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let log_file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rewind_tui=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Raw mode plus alternate screen, undone on drop.
///
/// Dropping also runs while a panic unwinds, so the shell is never left in
/// raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            error!(error = %err, "Failed to leave alternate screen");
        }
        debug!("Terminal restored");
    }
}

/// Runs the game until the user quits, restoring the terminal afterwards.
///
/// Must be called inside a tokio runtime (the clock spawns a task).
#[instrument(skip(config))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting Rewind TUI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let res = run_app(&mut terminal, App::new(config), config);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &TuiConfig,
) -> Result<()> {
    let mut clock = ClockWidget::new(config.tick());
    if *config.show_clock() {
        clock.mount();
    }

    loop {
        clock.poll();
        let caption = clock.caption();
        terminal.draw(|f| ui::draw(f, &app, caption.as_deref()))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_key(key.code) {
                AppAction::Continue => {}
                AppAction::ToggleClock => clock.toggle(),
                AppAction::Quit => {
                    info!("User quit");
                    break;
                }
            }
        }
    }

    clock.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_guard_restores_terminal_when_loop_panics() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard;
            panic!("event loop failed");
        });

        assert!(result.is_err());
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}

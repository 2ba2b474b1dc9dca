//! UI rendering using ratatui.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

pub use board::render_board;
pub use history::render_history;

/// Draws the main UI. `clock` is the clock caption, or `None` while hidden.
pub fn draw(f: &mut Frame, app: &App, clock: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(14),   // Board and moves
            Constraint::Length(3), // Status
            Constraint::Length(3), // Clock
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, columns[0], app);
    render_history(f, columns[1], app);

    let status_style = if app.game().phase().is_terminal() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.game().status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    if let Some(caption) = clock {
        let clock = Paragraph::new(caption)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Clock"));
        f.render_widget(clock, chunks[3]);
    }

    let help = Paragraph::new("1-9/Enter: move | Tab: focus | s: sort | r: restart | c: clock | q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}

//! Move list and sort button rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Renders the move list in display order, emphasising the viewed step.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area);

    let moves = app.game().display_moves();
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = moves
        .iter()
        .map(|d| {
            let style = if *d.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!("{:>2}. {}", d.step() + 1, d.label())).style(style)
        })
        .collect();

    let mut state = ListState::default();
    if focused {
        state.select(moves.iter().position(|d| *d.step() == app.selected()));
    }

    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title("Moves"),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[0], &mut state);

    let sort = Paragraph::new(format!("[s] {}", app.game().sort_order().button_label()))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(sort, chunks[1]);
}

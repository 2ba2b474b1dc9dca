//! Tic-tac-toe board rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, WinLine};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the viewed board. Cells on the winning line are highlighted.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let border = if app.focus() == Focus::Board {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!("Board - step {}", app.game().step()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board_area = center_rect(inner, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let line = app.game().winning_line();
    for (row, start) in [(rows[0], 0), (rows[2], 3), (rows[4], 6)] {
        render_row(f, row, app, &line, start);
    }
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);
}

fn render_row(f: &mut Frame, area: Rect, app: &App, line: &WinLine, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (col, offset) in [(cols[0], 0), (cols[2], 1), (cols[4], 2)] {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, col, app, line, pos);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, app: &App, line: &WinLine, pos: Position) {
    let (text, mut style) = match app.game().current_board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if line.contains(pos) {
        style = style.bg(Color::LightGreen).fg(Color::Black);
    }
    if app.focus() == Focus::Board && app.cursor() == pos {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(text, style)),
        Line::default(),
    ];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

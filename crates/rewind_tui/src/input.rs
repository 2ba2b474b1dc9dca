//! Keyboard mapping for the board cursor and the move list.

use crossterm::event::KeyCode;
use rewind_tictactoe::{MoveDescriptor, Position};

/// Moves the board cursor one cell with the arrow keys, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (col, row) = (cursor.to_index() % 3, cursor.to_index() / 3);

    let (col, row) = match key {
        KeyCode::Left => (col.saturating_sub(1), row),
        KeyCode::Right => ((col + 1).min(2), row),
        KeyCode::Up => (col, row.saturating_sub(1)),
        KeyCode::Down => (col, (row + 1).min(2)),
        _ => (col, row),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

/// Cell index for a digit key `1`-`9`.
pub fn digit_cell(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Moves the move-list selection up or down in display order.
///
/// `selected` is a history step; the result is the step of the neighbouring
/// row, or `selected` itself at either end.
pub fn move_selection(list: &[MoveDescriptor], selected: usize, key: KeyCode) -> usize {
    let Some(row) = list.iter().position(|d| *d.step() == selected) else {
        return list.first().map(|d| *d.step()).unwrap_or(0);
    };

    let row = match key {
        KeyCode::Up => row.saturating_sub(1),
        KeyCode::Down => (row + 1).min(list.len() - 1),
        _ => row,
    };
    *list[row].step()
}

//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning triples: rows, then columns, then diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed row, column or diagonal, or no line at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WinLine {
    cells: Option<[Position; 3]>,
}

impl WinLine {
    /// The empty line (no winner).
    pub const NONE: WinLine = WinLine { cells: None };

    /// Returns true if there is no winning line.
    pub fn is_empty(&self) -> bool {
        self.cells.is_none()
    }

    /// Positions of the line, empty if there is no winner.
    pub fn positions(&self) -> &[Position] {
        match &self.cells {
            Some(cells) => cells,
            None => &[],
        }
    }

    /// Board indices of the line.
    pub fn indices(&self) -> Vec<usize> {
        self.positions().iter().map(|p| p.to_index()).collect()
    }

    /// Whether `pos` is one of the three winning cells.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Finds the first winning triple on the board.
///
/// Triples are checked rows first, then columns, then the two diagonals.
/// Returns [`WinLine::NONE`] if no triple is fully held by one player.
#[instrument]
pub fn evaluate_winner(board: &Board) -> WinLine {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return WinLine { cells: Some(line) };
        }
    }

    WinLine::NONE
}

/// Returns the player holding the winning line, if any.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    let line = evaluate_winner(board);
    line.positions()
        .first()
        .and_then(|pos| board.get(*pos).player())
}

//! Snapshots on the game timeline.

use super::types::{Board, Coordinate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in the game's move timeline.
///
/// The initial entry has an empty board and no coordinate. Later entries carry
/// the coordinate of the move that produced them when tracking is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Column and row of the move, if recorded.
    coordinate: Option<Coordinate>,
}

impl HistoryEntry {
    /// The empty-board entry every game starts from.
    pub fn start() -> Self {
        Self::default()
    }

    /// Creates an entry for a board reached by a move.
    pub fn new(board: Board, coordinate: Option<Coordinate>) -> Self {
        Self { board, coordinate }
    }
}

//! Move preconditions for tic-tac-toe.
//!
//! A move is legal when the target index is on the board, the target square
//! of the viewed board is empty, and that board has no winner yet. Failing
//! any of these makes `apply_move` a no-op; the rejection says which.

use super::rules::winner;
use super::{Board, Player, Position};
use tracing::instrument;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The viewed board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),
}

/// Precondition: The cell index names a board position.
pub struct InBounds;

impl InBounds {
    /// Resolves the cell index to a position.
    #[instrument]
    pub fn check(cell: usize) -> Result<Position, MoveRejection> {
        Position::from_index(cell).ok_or(MoveRejection::OutOfBounds(cell))
    }
}

/// Precondition: Nobody has won the board yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Fails with the winner if the board is already decided.
    #[instrument(skip(board))]
    pub fn check(board: &Board) -> Result<(), MoveRejection> {
        match winner(board) {
            Some(player) => Err(MoveRejection::GameOver(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails if `pos` is already taken.
    #[instrument(skip(board))]
    pub fn check(pos: Position, board: &Board) -> Result<(), MoveRejection> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: all of the above, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for placing at `cell` on `board`.
    #[instrument(skip(board))]
    pub fn check(cell: usize, board: &Board) -> Result<Position, MoveRejection> {
        let pos = InBounds::check(cell)?;
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(pos, board)?;
        Ok(pos)
    }
}

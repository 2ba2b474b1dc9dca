//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player to move after `step` moves have been played.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of the board with `player` placed at `pos`.
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

/// Column and row of a move, both 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("Col:{column}, Row:{row}")]
pub struct Coordinate {
    /// Column (1-3, left to right).
    pub column: u8,
    /// Row (1-3, top to bottom).
    pub row: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::X);
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.occupied(), 3);
    }

    #[test]
    fn test_player_for_step() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(3), Player::O);
        assert_eq!(Player::for_step(4), Player::X);
    }

    #[test]
    fn test_coordinate_display() {
        let coordinate = Coordinate { column: 2, row: 3 };
        assert_eq!(coordinate.to_string(), "Col:2, Row:3");
    }
}

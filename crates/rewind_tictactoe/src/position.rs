//! Named board positions and their grid coordinates.

use super::types::Coordinate;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        <Self as strum::IntoEnumIterator>::iter().nth(index)
    }

    /// Column of this position, 1-indexed.
    pub fn column(self) -> u8 {
        (self.to_index() % 3) as u8 + 1
    }

    /// Row of this position, 1-indexed.
    pub fn row(self) -> u8 {
        (self.to_index() / 3) as u8 + 1
    }

    /// Grid coordinate of this position.
    pub fn coordinate(self) -> Coordinate {
        Coordinate {
            column: self.column(),
            row: self.row(),
        }
    }

    /// Creates position from a 1-indexed coordinate.
    pub fn from_coordinate(coordinate: Coordinate) -> Option<Self> {
        let Coordinate { column, row } = coordinate;
        if !(1..=3).contains(&column) || !(1..=3).contains(&row) {
            return None;
        }
        Self::from_index(usize::from(row - 1) * 3 + usize::from(column - 1))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

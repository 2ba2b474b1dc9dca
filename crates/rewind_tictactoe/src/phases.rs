//! Derived game phase and status line.

use super::Player;
use serde::{Deserialize, Serialize};

/// Phase of the viewed board in the game state machine.
///
/// `Won` and `Drawn` are terminal for moves. Jumping back in history can
/// return the view to an `InProgress` board without touching the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    InProgress,
    /// Player completed a line.
    Won(Player),
    /// Board is full with no line.
    Drawn,
}

impl Phase {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player has won the viewed board.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The viewed board is full with no winner.
    #[display("Draw: Nobody wins")]
    Draw,
    /// The game continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

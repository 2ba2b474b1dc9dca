//! Alternating turn invariant: X moves first, then players alternate.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Every snapshot holds as many X marks as O marks, or one more.
///
/// The player to move on the viewed board is X on even steps and O on odd
/// steps.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let balanced = state.history().iter().all(|entry| {
            let x = entry.board().count(Player::X);
            let o = entry.board().count(Player::O);
            x == o || x == o + 1
        });

        balanced && state.next_player() == Player::for_step(state.step())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

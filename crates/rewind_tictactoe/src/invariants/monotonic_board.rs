//! Monotonic board invariant: each snapshot adds exactly one mark.

use super::super::{GameState, Position, Square};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: Squares are never overwritten along the timeline.
///
/// The first snapshot is empty, and each later snapshot equals its
/// predecessor plus exactly one newly occupied square.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(first) = state.history().first() else {
            return false;
        };
        if first.board().occupied() != 0 {
            return false;
        }

        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let mut added = 0;
            for pos in Position::iter() {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => added += 1,
                    _ => return false,
                }
            }
            added == 1
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

//! History consistency invariant: the timeline matches the step pointer.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: Snapshot `k` holds `k` marks, coordinates name the square
/// added by their move, and the step pointer lies inside the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if state.step() >= history.len() {
            return false;
        }

        if history.iter().enumerate().any(|(k, e)| e.board().occupied() != k) {
            return false;
        }

        if history.first().and_then(|e| *e.coordinate()).is_some() {
            return false;
        }

        history.windows(2).all(|pair| {
            let Some(coordinate) = *pair[1].coordinate() else {
                return !state.tracks_coordinates();
            };
            match Position::from_coordinate(coordinate) {
                Some(pos) => {
                    pair[0].board().get(pos) == Square::Empty
                        && pair[1].board().get(pos) != Square::Empty
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "History length, coordinates and step pointer agree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, HistoryEntry, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold_with_and_without_tracking() {
        let tracked = GameState::new().apply_move(0).apply_move(4);
        assert!(HistoryConsistentInvariant::holds(&tracked));

        let untracked = GameState::with_coordinates(false).apply_move(0).apply_move(4);
        assert!(HistoryConsistentInvariant::holds(&untracked));
    }

    #[test]
    fn test_step_out_of_bounds_violates() {
        let mut state = GameState::new().apply_move(0);
        state.step = 2;
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_coordinate_violates() {
        let mut state = GameState::new();
        state.history.push(HistoryEntry::new(
            crate::Board::new().with_mark(Position::Center, Player::X),
            Some(Coordinate { column: 1, row: 1 }),
        ));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_missing_coordinate_violates_when_tracking() {
        let mut state = GameState::new();
        state.history.push(HistoryEntry::new(
            crate::Board::new().with_mark(Position::Center, Player::X),
            None,
        ));
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}

//! Displayable move list derived from the game timeline.
//!
//! The list is a pure view: building and ordering it never touches the
//! canonical `history` order used by moves and jumps.

use super::GameState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Caption of the step 0 entry.
pub const START_LABEL: &str = "Go to game start";

/// Presentation order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Caption of the button that switches to the other order.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Ascending => "Sort in Descending Order",
            Self::Descending => "Sort in Ascending Order",
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this row jumps to.
    step: usize,
    /// Button caption.
    label: String,
    /// True for the viewed step.
    is_current: bool,
}

/// Builds the move list in chronological order.
///
/// Step 0 is labelled [`START_LABEL`]; later steps read `Go to move #<step>`,
/// followed by ` @ Col:<c>, Row:<r>` when the entry has a coordinate.
#[instrument(skip(state), fields(len = state.history().len(), step = state.step()))]
pub fn build_move_list(state: &GameState) -> Vec<MoveDescriptor> {
    state
        .history()
        .iter()
        .enumerate()
        .map(|(step, entry)| {
            let label = match (step, entry.coordinate()) {
                (0, _) => START_LABEL.to_string(),
                (_, Some(coordinate)) => format!("Go to move #{step} @ {coordinate}"),
                (_, None) => format!("Go to move #{step}"),
            };
            MoveDescriptor {
                step,
                label,
                is_current: step == state.step(),
            }
        })
        .collect()
}

/// Reorders the list by step, ascending or descending.
#[instrument(skip(list), fields(len = list.len()))]
pub fn order_for_display(mut list: Vec<MoveDescriptor>, order: SortOrder) -> Vec<MoveDescriptor> {
    match order {
        SortOrder::Ascending => list.sort_by_key(|d| d.step),
        SortOrder::Descending => list.sort_by_key(|d| std::cmp::Reverse(d.step)),
    }
    list
}

impl GameState {
    /// Move list in the state's own display order.
    pub fn display_moves(&self) -> Vec<MoveDescriptor> {
        order_for_display(build_move_list(self), self.sort_order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(list: &[MoveDescriptor]) -> Vec<usize> {
        list.iter().map(|d| *d.step()).collect()
    }

    #[test]
    fn test_labels_with_coordinates() {
        let state = GameState::new().apply_move(0).apply_move(5);
        let labels: Vec<_> = build_move_list(&state)
            .into_iter()
            .map(|d| d.label().clone())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Go to game start",
                "Go to move #1 @ Col:1, Row:1",
                "Go to move #2 @ Col:3, Row:2",
            ]
        );
    }

    #[test]
    fn test_labels_without_coordinates() {
        let state = GameState::with_coordinates(false).apply_move(0);
        let list = build_move_list(&state);
        assert_eq!(list[1].label(), "Go to move #1");
    }

    #[test]
    fn test_current_marks_step_pointer() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(4)
            .jump_to_step(1);
        let current: Vec<_> = build_move_list(&state)
            .iter()
            .map(|d| *d.is_current())
            .collect();
        assert_eq!(current, vec![false, true, false]);
    }

    #[test]
    fn test_order_for_display() {
        let state = GameState::new().apply_move(0).apply_move(4);
        let history = state.history().to_vec();

        let desc = order_for_display(build_move_list(&state), SortOrder::Descending);
        assert_eq!(steps(&desc), vec![2, 1, 0]);

        let asc = order_for_display(desc, SortOrder::Ascending);
        assert_eq!(steps(&asc), vec![0, 1, 2]);

        assert_eq!(state.history(), history.as_slice());
    }

    #[test]
    fn test_display_moves_follows_sort_flag() {
        let state = GameState::new().apply_move(0).toggle_sort();
        assert_eq!(steps(&state.display_moves()), vec![1, 0]);
    }

    #[test]
    fn test_button_label() {
        assert_eq!(SortOrder::Ascending.button_label(), "Sort in Descending Order");
        assert_eq!(SortOrder::Descending.button_label(), "Sort in Ascending Order");
    }
}

//! Rewind tic-tac-toe - pure game logic with time-travel history.
//!
//! A [`GameState`] holds the whole timeline of board snapshots and a step
//! pointer into it. Moves append to the timeline (discarding any future that
//! was rewound past), jumps move the pointer, and the move list is derived
//! from the timeline for display.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Status};
//!
//! let state = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(GameState::new(), |state, cell| state.apply_move(cell));
//! assert_eq!(state.status(), Status::Winner(Player::X));
//! assert_eq!(state.winning_line().indices(), vec![0, 4, 8]);
//!
//! // Rewind two moves and branch: the old future is discarded.
//! let state = state.jump_to_step(3).apply_move(6);
//! assert_eq!(state.history().len(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod history;
pub mod history_view;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod state;
mod types;

pub use contracts::{InBounds, LegalMove, MoveRejection, NoWinnerYet, SquareIsEmpty};
pub use history::HistoryEntry;
pub use history_view::{MoveDescriptor, START_LABEL, SortOrder, build_move_list, order_for_display};
pub use phases::{Phase, Status};
pub use position::Position;
pub use rules::{WinLine, evaluate_winner, is_draw, is_full, winner};
pub use state::{GameState, InvalidSnapshot};
pub use types::{Board, Coordinate, Player, Square};

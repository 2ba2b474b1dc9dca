//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board) snapshot. Rules are
//! separated from the history model so views of any past step can reuse them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, evaluate_winner, winner};

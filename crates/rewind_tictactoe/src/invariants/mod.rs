//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are checked after each move in debug builds and can be
//! tested independently.

use super::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// An invariant that failed, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// Invariants checked together against one state.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, fn() -> &'static str);

fn violations<S>(state: &S, checks: &[Check<S>]) -> Result<(), Vec<InvariantViolation>> {
    let failed: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation {
            description: description(),
        })
        .collect();
    if failed.is_empty() { Ok(()) } else { Err(failed) }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 3] = [
            (A::holds, A::description),
            (B::holds, B::description),
            (C::holds, C::description),
        ];
        violations(state, &checks)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All timeline invariants as a composable set.
pub type GameInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Asserts that all game invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = GameInvariants::check_all(state)
    {
        for violation in &violations {
            warn!(%violation, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {violations:?}");
    }
}

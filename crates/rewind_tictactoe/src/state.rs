//! Game state and its pure transitions.
//!
//! A [`GameState`] is a value. Every transition consumes the old state and
//! returns the next one, so a front-end holds exactly one state cell and
//! replaces it on each user action. Invalid actions return the state
//! unchanged.

use super::contracts::{LegalMove, MoveRejection};
use super::history::HistoryEntry;
use super::history_view::SortOrder;
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation, assert_invariants};
use super::phases::{Phase, Status};
use super::rules::{WinLine, evaluate_winner, is_full, winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state: the timeline plus the viewed step.
///
/// Deserialization checks the game invariants, so a loaded snapshot is as
/// well-formed as one built from moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameSnapshot")]
pub struct GameState {
    /// Snapshots in chronological order. Never empty.
    pub(crate) history: Vec<HistoryEntry>,
    /// Index of the viewed snapshot.
    pub(crate) step: usize,
    /// Player to move on the viewed board.
    pub(crate) next: Player,
    /// Presentation order of the move list.
    pub(crate) sort: SortOrder,
    /// Whether new entries record the move's column and row.
    pub(crate) track_coordinates: bool,
}

/// Wire form of [`GameState`] before validation.
#[derive(Deserialize)]
struct GameSnapshot {
    history: Vec<HistoryEntry>,
    step: usize,
    next: Player,
    sort: SortOrder,
    track_coordinates: bool,
}

/// A snapshot that no sequence of moves could have produced.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game snapshot: {} invariant(s) violated", violations.len())]
pub struct InvalidSnapshot {
    #[error(not(source))]
    violations: Vec<InvariantViolation>,
}

impl InvalidSnapshot {
    /// Returns the violated invariants.
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }
}

impl TryFrom<GameSnapshot> for GameState {
    type Error = InvalidSnapshot;

    fn try_from(snapshot: GameSnapshot) -> Result<Self, Self::Error> {
        let state = Self {
            history: snapshot.history,
            step: snapshot.step,
            next: snapshot.next,
            sort: snapshot.sort,
            track_coordinates: snapshot.track_coordinates,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            warn!(count = violations.len(), "Rejected game snapshot");
            InvalidSnapshot { violations }
        })?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a new game with coordinate tracking enabled.
    #[instrument]
    pub fn new() -> Self {
        Self::with_coordinates(true)
    }

    /// Creates a new game, choosing whether moves record their coordinate.
    #[instrument]
    pub fn with_coordinates(track_coordinates: bool) -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            step: 0,
            next: Player::X,
            sort: SortOrder::default(),
            track_coordinates,
        }
    }

    /// Returns the state with the given move-list order.
    pub fn with_sort_order(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the move history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the viewed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the player to move on the viewed board.
    pub fn next_player(&self) -> Player {
        self.next
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Returns true if moves record their coordinate.
    pub fn tracks_coordinates(&self) -> bool {
        self.track_coordinates
    }

    /// Returns the viewed snapshot.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// Returns the viewed board.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Checks whether a move at `cell` would be accepted.
    pub fn check_move(&self, cell: usize) -> Result<Position, MoveRejection> {
        LegalMove::check(cell, self.current_board())
    }

    /// Places the active player's mark at `cell`.
    ///
    /// Entries after the viewed step are discarded before the new snapshot is
    /// appended. If the move is illegal the state is returned unchanged.
    #[instrument(skip(self), fields(step = self.step, player = %self.next))]
    pub fn apply_move(self, cell: usize) -> Self {
        let pos = match self.check_move(cell) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                return self;
            }
        };

        let mut game = self;
        let discarded = game.history.len() - (game.step + 1);
        game.history.truncate(game.step + 1);

        let board = game.current_board().with_mark(pos, game.next);
        let coordinate = game.track_coordinates.then(|| pos.coordinate());
        game.history.push(HistoryEntry::new(board, coordinate));
        game.step = game.history.len() - 1;
        game.next = game.next.opponent();

        debug!(position = %pos, step = game.step, discarded, "Move applied");
        assert_invariants(&game);
        game
    }

    /// Moves the view to `step` without touching the history.
    ///
    /// X is to move on even steps. An out-of-range step leaves the state
    /// unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to_step(mut self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, "Jump target outside history, ignoring");
            return self;
        }
        self.step = step;
        self.next = Player::for_step(step);
        debug!(step, next = %self.next, "Jumped");
        self
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(sort = ?self.sort))]
    pub fn toggle_sort(mut self) -> Self {
        self.sort = self.sort.toggle();
        self
    }

    /// Winning line on the viewed board.
    pub fn winning_line(&self) -> WinLine {
        evaluate_winner(self.current_board())
    }

    /// Phase of the viewed board.
    pub fn phase(&self) -> Phase {
        let board = self.current_board();
        if let Some(player) = winner(board) {
            Phase::Won(player)
        } else if is_full(board) {
            Phase::Drawn
        } else {
            Phase::InProgress
        }
    }

    /// Status for the viewed board: winner, then draw, then next player.
    pub fn status(&self) -> Status {
        match self.phase() {
            Phase::Won(player) => Status::Winner(player),
            Phase::Drawn => Status::Draw,
            Phase::InProgress => Status::NextPlayer(self.next),
        }
    }

    /// Status line as displayed.
    pub fn status_text(&self) -> String {
        self.status().to_string()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

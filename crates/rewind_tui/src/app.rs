//! Application state and key handling.
//!
//! The app owns a single [`GameState`] cell. Each user action replaces it with
//! the result of a pure transition; nothing mutates the state in place.

use crate::config::TuiConfig;
use crate::input::{digit_cell, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, Position};
use tracing::{debug, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    History,
}

impl Focus {
    /// Toggles between the two panels.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Show or hide the clock.
    ToggleClock,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    fresh: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &TuiConfig) -> Self {
        let fresh = config.new_game();
        Self {
            game: fresh.clone(),
            fresh,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the history step selected in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Replaces the game state with the result of `transition`.
    fn update(&mut self, transition: impl FnOnce(GameState) -> GameState) {
        let game = std::mem::take(&mut self.game);
        self.game = transition(game);
        self.selected = self.game.step();
    }

    /// Places the active player's mark at `cell` (no-op if illegal).
    #[instrument(skip(self))]
    pub fn click_cell(&mut self, cell: usize) {
        if let Some(pos) = Position::from_index(cell) {
            self.cursor = pos;
        }
        self.update(|game| game.apply_move(cell));
    }

    /// Views history step `step`.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        self.update(|game| game.jump_to_step(step));
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        let selected = self.selected;
        self.update(GameState::toggle_sort);
        self.selected = selected;
    }

    /// Starts over with an empty board, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let sort = self.game.sort_order();
        let fresh = self.fresh.clone().with_sort_order(sort);
        self.update(|_| fresh);
        self.cursor = Position::Center;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        debug!(?key, focus = ?self.focus, "Handling key");

        if let Some(cell) = digit_cell(key) {
            self.click_cell(cell);
            return AppAction::Continue;
        }

        match (key, self.focus) {
            (KeyCode::Char('q') | KeyCode::Esc, _) => return AppAction::Quit,
            (KeyCode::Char('c'), _) => return AppAction::ToggleClock,
            (KeyCode::Char('s'), _) => self.toggle_sort(),
            (KeyCode::Char('r'), _) => self.restart(),
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.focus = self.focus.toggle();
                self.selected = self.game.step();
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => {
                self.click_cell(self.cursor.to_index());
            }
            (KeyCode::Enter | KeyCode::Char(' '), Focus::History) => self.jump(self.selected),
            (KeyCode::Up | KeyCode::Down, Focus::History) => {
                self.selected = move_selection(&self.game.display_moves(), self.selected, key);
            }
            (_, Focus::Board) => self.cursor = move_cursor(self.cursor, key),
            _ => {}
        }

        AppAction::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, SortOrder, Status};

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), AppAction::Continue);
        }
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.game().step(), 2);
        assert_eq!(app.game().status(), Status::NextPlayer(Player::X));
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_cursor_and_enter_place_mark() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.game().history().len(), 2);
        assert!(!app.game().current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_history_jump() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);

        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.game().step(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().next_player(), Player::O);
    }

    #[test]
    fn test_sort_toggle_keeps_selection() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Tab, KeyCode::Up]);
        assert_eq!(app.selected(), 0);

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.game().sort_order(), SortOrder::Descending);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_illegal_click_keeps_state() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('5')]);
        let before = app.game().clone();
        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('s'), KeyCode::Char('r')]);
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.game().sort_order(), SortOrder::Descending);

        assert_eq!(app.handle_key(KeyCode::Char('c')), AppAction::ToggleClock);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}

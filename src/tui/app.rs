//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_history::{GameSession, GameView, Gesture, Position, TuiConfig};
use tracing::debug;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    show_coordinates: bool,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            session: GameSession::with_order(*config.ascending()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_coordinates: *config.show_coordinates(),
            message: None,
            should_quit: false,
        }
    }

    /// Current view of the session.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether coordinates are shown in the move list.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Last rejection message, if the previous gesture failed.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
            }
            KeyCode::Char('s') => self.forward(Gesture::SortToggleClicked),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.forward(Gesture::CellClicked(cell));
            return;
        }
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.forward(Gesture::CellClicked(self.cursor.to_index()))
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let len = self.session.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(len - 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let view = self.session.view();
                if let Some(entry) = view.moves().get(self.selected) {
                    self.forward(Gesture::HistoryStepClicked(*entry.step()));
                }
            }
            _ => {}
        }
    }

    fn forward(&mut self, gesture: Gesture) {
        match self.session.dispatch(gesture) {
            Ok(()) => self.message = None,
            Err(e) => {
                debug!(%gesture, error = %e, "Gesture rejected");
                self.message = Some(e.to_string());
            }
        }
        self.selected = self.selected.min(self.session.history().len() - 1);
    }
}

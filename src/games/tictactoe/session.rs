//! Game session with navigable history.
//!
//! A [`GameSession`] owns an ordered list of [`Snapshot`]s and a pointer
//! to the one being displayed. Moves played from an earlier snapshot
//! discard everything after it before the new snapshot is appended.

use super::action::{Gesture, GestureError, JumpError, MoveError};
use super::invariants::{InvariantSet, SessionInvariants};
use super::position::Position;
use super::rules::{self, WinningLine};
use super::snapshot::Snapshot;
use super::types::Player;
use super::view::{Coordinates, GameView, MoveDescriptor, Status};
use tracing::{debug, info, instrument, warn};

/// History length at which the board is full: the empty snapshot plus nine moves.
pub const FULL_HISTORY_LEN: usize = 10;

/// State of one game, including every snapshot reachable by time travel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: Vec<Snapshot>,
    step: usize,
    to_move: Player,
    ascending: bool,
}

impl GameSession {
    /// Creates a session holding only the empty board, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(true)
    }

    /// Creates a session with the given initial move-list order.
    #[instrument]
    pub fn with_order(ascending: bool) -> Self {
        info!(ascending, "Creating new game session");
        Self {
            history: vec![Snapshot::genesis()],
            step: 0,
            to_move: Player::X,
            ascending,
        }
    }

    /// Every snapshot, oldest first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Index of the displayed snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Player whose mark the next move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Whether the move list is shown oldest first.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Winning line on the displayed board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(self.current().board())
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Snapshots after the displayed one are dropped first, so a move made
    /// after a jump starts a new branch of history.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    ///
    /// A rejected move leaves the session untouched.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        let current = *self.current();

        if let Some(line) = current.winning_line() {
            warn!(winner = %line.player(), "Move rejected: game already won");
            return Err(MoveError::GameOver);
        }

        if !current.board().is_empty(pos) {
            warn!(position = %pos, "Move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating history after time travel");
        }
        self.history.truncate(self.step + 1);
        self.history.push(current.successor(pos, self.to_move));
        self.step = self.history.len() - 1;

        info!(position = %pos, step = self.step, "Move applied");
        self.to_move = self.to_move.opponent();

        self.debug_check_invariants();
        Ok(())
    }

    /// Plays the cell with board index `index` (0-8).
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for indices past 8, otherwise as
    /// [`GameSession::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: index out of bounds");
            MoveError::OutOfBounds(index)
        })?;
        self.apply_move(pos)
    }

    /// Displays snapshot `step`.
    ///
    /// The player to move is derived from the parity of `step`. History is
    /// not modified.
    ///
    /// # Errors
    ///
    /// [`JumpError::OutOfRange`] if `step` is not an index into history; the
    /// session is left untouched.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.history.len();
        if step >= len {
            warn!(step, len, "Jump rejected: step out of range");
            return Err(JumpError::OutOfRange { step, len });
        }

        self.step = step;
        self.to_move = Player::for_step(step);
        info!(step, to_move = %self.to_move, "Jumped to history step");

        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.ascending = !self.ascending;
        debug!(ascending = self.ascending, "Move list order toggled");
    }

    /// Routes a presentation gesture to the matching operation.
    ///
    /// # Errors
    ///
    /// Whatever the routed operation rejects with.
    #[instrument(skip(self), fields(gesture = %gesture))]
    pub fn dispatch(&mut self, gesture: Gesture) -> Result<(), GestureError> {
        match gesture {
            Gesture::CellClicked(index) => self.apply_index(index)?,
            Gesture::HistoryStepClicked(step) => self.jump_to(step)?,
            Gesture::SortToggleClicked => self.toggle_order(),
        }
        Ok(())
    }

    /// Status line for the displayed snapshot.
    ///
    /// A board without a winner reads as a draw once history holds the
    /// empty board plus nine moves, wherever the displayed step is. This
    /// includes earlier steps of a game won on the ninth move.
    pub fn status(&self) -> Status {
        if let Some(line) = self.winning_line() {
            return Status::Winner(line.player());
        }

        if self.history.len() == FULL_HISTORY_LEN {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move)
        }
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveDescriptor> {
        let mut moves: Vec<_> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| {
                MoveDescriptor::new(
                    step,
                    MoveDescriptor::label_for(step),
                    snapshot.last_move().map(Coordinates::from),
                    step == self.step,
                )
            })
            .collect();

        if !self.ascending {
            moves.reverse();
        }
        moves
    }

    /// Derives the read-only view for the presentation layer.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn view(&self) -> GameView {
        let winning_line = self.winning_line();
        let status = self.status();
        debug!(%status, won = winning_line.is_some(), "View recomputed");

        GameView::new(
            *self.current().board(),
            winning_line,
            status,
            self.moves(),
            self.ascending,
        )
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = SessionInvariants::check_all(self)
        {
            panic!("session invariants violated: {:?}", violations);
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<Snapshot>, step: usize, to_move: Player) -> Self {
        Self {
            history,
            step,
            to_move,
            ascending: true,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

//! Immutable board states recorded in a session's history.

use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Cell played to reach this board; `None` for the opening snapshot.
    last_move: Option<Position>,
}

impl Snapshot {
    /// The opening snapshot: an empty board with no move.
    pub fn genesis() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds the snapshot that follows this one when `player` marks `pos`.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// Zero-based row of the move, if any.
    pub fn row(&self) -> Option<usize> {
        self.last_move.map(Position::row)
    }

    /// Zero-based column of the move, if any.
    pub fn column(&self) -> Option<usize> {
        self.last_move.map(Position::column)
    }

    /// Winning line on this snapshot's board.
    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::evaluate(&self.board)
    }
}

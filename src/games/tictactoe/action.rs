//! First-class gestures and their failure modes.
//!
//! The presentation layer turns clicks and key presses into [`Gesture`]s;
//! the session routes each one to the matching operation.

use super::position::Position;
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// A user gesture forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Gesture {
    /// A board cell was clicked (index 0-8).
    #[display("cell {}", _0)]
    CellClicked(usize),
    /// A move-list entry was clicked.
    #[display("history step {}", _0)]
    HistoryStepClicked(usize),
    /// The sort-order button was clicked.
    #[display("sort toggle")]
    SortToggleClicked,
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already holds a winning line.
    #[display("Game is already over")]
    GameOver,

    /// The cell index does not name a square.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}

/// Why a history jump was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum JumpError {
    /// The requested step is past the end of history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}

/// A rejected gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum GestureError {
    /// The cell click could not be played.
    #[display("{}", _0)]
    Move(MoveError),
    /// The history click named no snapshot.
    #[display("{}", _0)]
    Jump(JumpError),
}

impl std::error::Error for GestureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GestureError::Move(e) => Some(e),
            GestureError::Jump(e) => Some(e),
        }
    }
}

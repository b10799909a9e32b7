//! Tic-tac-toe with time travel.

mod action;
mod invariants;
mod position;
mod rules;
mod session;
mod snapshot;
mod types;
mod view;

pub use action::{Gesture, GestureError, JumpError, MoveError};
pub use invariants::{
    AlternatingHistoryInvariant, GenesisInvariant, Invariant, InvariantSet, InvariantViolation,
    NoMoveAfterWinInvariant, SessionInvariants, StepInBoundsInvariant,
};
pub use position::Position;
pub use rules::{LINES, WinningLine, evaluate, is_full};
pub use session::{FULL_HISTORY_LEN, GameSession};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
pub use view::{Coordinates, GameView, MoveDescriptor, Status};

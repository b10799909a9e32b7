//! Tic-tac-toe with time travel.
//!
//! The library holds the game-state engine: a pure rules engine that finds
//! winning lines, and a [`GameSession`] that keeps every board of the game
//! so play can resume from any earlier move.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] reports the first complete line on a [`Board`]
//! - **Session**: [`GameSession`] applies moves, jumps through history and
//!   toggles move-list order
//! - **View**: [`GameView`] is everything a renderer reads
//! - **Gestures**: [`Gesture`] is everything a renderer sends back
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{GameSession, Gesture, Status, TicTacToePlayer as Player};
//!
//! let mut session = GameSession::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     session.dispatch(Gesture::CellClicked(cell)).unwrap();
//! }
//!
//! let view = session.view();
//! assert_eq!(view.status(), &Status::Winner(Player::X));
//! assert_eq!(view.highlighted().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, TuiConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingHistoryInvariant, Board, Coordinates, FULL_HISTORY_LEN, GameSession, GameView,
    GenesisInvariant, Gesture, GestureError, Invariant, InvariantSet, InvariantViolation,
    JumpError, LINES, MoveDescriptor, MoveError, NoMoveAfterWinInvariant, Player as TicTacToePlayer,
    Position, SessionInvariants, Snapshot, Square, Status, StepInBoundsInvariant, WinningLine,
    evaluate, is_full,
};

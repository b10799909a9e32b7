//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from the
//! session so that every snapshot in history can be judged alike.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, evaluate};

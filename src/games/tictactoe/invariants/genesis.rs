//! Genesis invariant: history starts with the empty board.

use super::super::{GameSession, Snapshot};
use super::Invariant;

/// Invariant: history is non-empty and opens with the empty, moveless snapshot.
pub struct GenesisInvariant;

impl Invariant<GameSession> for GenesisInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().first() == Some(&Snapshot::genesis())
    }

    fn description() -> &'static str {
        "History opens with the empty board"
    }
}

//! Step bounds invariant: the displayed step names a snapshot.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameSession> for StepInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.step() < session.history().len()
    }

    fn description() -> &'static str {
        "Displayed step is an index into history"
    }
}

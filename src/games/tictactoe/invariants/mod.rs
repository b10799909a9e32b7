//! First-class invariants for game sessions.
//!
//! Invariants are logical properties that must hold after every session
//! operation. They are checked in debug builds and can be tested
//! independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_history;
pub mod genesis;
pub mod no_move_after_win;
pub mod step_in_bounds;

pub use alternating_history::AlternatingHistoryInvariant;
pub use genesis::GenesisInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    GenesisInvariant,
    StepInBoundsInvariant,
    AlternatingHistoryInvariant,
    NoMoveAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameSession, Player, Position, Snapshot};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut session = GameSession::new();
        for i in [0, 4, 8] {
            session.apply_index(i).unwrap();
        }
        session.jump_to(1).unwrap();
        session.apply_index(2).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        // Out-of-range step on a history whose second snapshot was played by O.
        let genesis = Snapshot::genesis();
        let history = vec![genesis, genesis.successor(Position::Center, Player::O)];
        let session = GameSession::from_parts(history, 7, Player::X);

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            StepInBoundsInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (GenesisInvariant, StepInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameSession::new()).is_ok());
    }
}

//! No snapshot follows a won board.

use super::super::GameSession;
use super::Invariant;

/// Invariant: only the last snapshot in history may hold a winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameSession> for NoMoveAfterWinInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|snapshot| snapshot.winning_line().is_none())
    }

    fn description() -> &'static str {
        "No move follows a winning board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Snapshot};

    #[test]
    fn test_winning_final_snapshot_holds() {
        let mut session = GameSession::new();
        for i in [0, 3, 1, 4, 2] {
            session.apply_index(i).unwrap();
        }
        assert!(session.winning_line().is_some());
        assert!(NoMoveAfterWinInvariant::holds(&session));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut history = vec![Snapshot::genesis()];
        for (i, pos) in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
            Position::BottomRight,
        ]
        .into_iter()
        .enumerate()
        {
            let next = history[i].successor(pos, Player::for_step(i));
            history.push(next);
        }
        let session = GameSession::from_parts(history, 6, Player::X);
        assert!(!NoMoveAfterWinInvariant::holds(&session));
    }
}

//! Alternating history invariant: each snapshot adds one mark, X then O,
//! and the stored player to move agrees with the displayed step.

use super::super::{GameSession, Player, Position, Square};
use super::Invariant;

/// Invariant: snapshot k (k > 0) equals snapshot k-1 plus one mark at its
/// recorded move, placed by X when k is odd and by O when k is even.
/// Snapshot k therefore holds exactly k marks, and the player to move at
/// step k is [`Player::for_step`]`(k)`.
pub struct AlternatingHistoryInvariant;

impl Invariant<GameSession> for AlternatingHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.to_move() != Player::for_step(session.step()) {
            return false;
        }

        session
            .history()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let [before, after] = pair else {
                    return false;
                };
                let Some(pos) = *after.last_move() else {
                    return false;
                };
                // Mover for snapshot i+1 is whoever was due at step i.
                let mover = Player::for_step(i);
                after.board().occupied() == i + 1
                    && before.board().is_empty(pos)
                    && Position::ALL.iter().all(|&cell| {
                        let expected = if cell == pos {
                            Square::Occupied(mover)
                        } else {
                            before.board().get(cell)
                        };
                        after.board().get(cell) == expected
                    })
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, alternating X and O, and the player to move matches the step"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Snapshot;

    #[test]
    fn test_played_game_holds() {
        let mut session = GameSession::new();
        for i in [4, 0, 8, 2] {
            session.apply_index(i).unwrap();
        }
        assert!(AlternatingHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let genesis = Snapshot::genesis();
        let first = genesis.successor(Position::Center, Player::X);
        let second = first.successor(Position::TopLeft, Player::X);
        let session = GameSession::from_parts(vec![genesis, first, second], 2, Player::X);
        assert!(!AlternatingHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_missing_move_violates() {
        let genesis = Snapshot::genesis();
        let session = GameSession::from_parts(vec![genesis, genesis], 1, Player::O);
        assert!(!AlternatingHistoryInvariant::holds(&session));
    }

    #[test]
    fn test_stale_turn_violates() {
        let genesis = Snapshot::genesis();
        let first = genesis.successor(Position::Center, Player::X);
        let session = GameSession::from_parts(vec![genesis, first], 1, Player::X);
        assert!(!AlternatingHistoryInvariant::holds(&session));

        let fixed = GameSession::from_parts(vec![genesis, first], 1, Player::O);
        assert!(AlternatingHistoryInvariant::holds(&fixed));
    }

    #[test]
    fn test_extra_mark_violates() {
        let genesis = Snapshot::genesis();
        // Two marks land in what history records as a single move.
        let first = genesis
            .successor(Position::Center, Player::X)
            .successor(Position::TopLeft, Player::X);
        assert_eq!(first.board().occupied(), 2);
        let session = GameSession::from_parts(vec![genesis, first], 1, Player::O);
        assert!(!AlternatingHistoryInvariant::holds(&session));
    }
}

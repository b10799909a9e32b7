//! Read-only view of a session for the presentation layer.

use super::position::Position;
use super::rules::WinningLine;
use super::types::{Board, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Status line shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board holds a winning line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// All nine moves were played without a winner.
    #[display("The game ended in a draw.")]
    Draw,
    /// Play continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One-based row and column of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", row, column)]
pub struct Coordinates {
    /// Row, counted from 1.
    pub row: usize,
    /// Column, counted from 1.
    pub column: usize,
}

impl From<Position> for Coordinates {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row() + 1,
            column: pos.column() + 1,
        }
    }
}

/// Entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Where the move was played; `None` for the game start.
    coordinates: Option<Coordinates>,
    /// Whether this entry is the displayed snapshot.
    is_current: bool,
}

impl MoveDescriptor {
    /// Button text for a history step.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board of the displayed snapshot.
    board: Board,
    /// Winning line on the displayed board, if any.
    winning_line: Option<WinningLine>,
    /// Cells of the winning line, empty when nobody has won.
    highlighted: Vec<Position>,
    /// Status line.
    status: Status,
    /// Move list, already in display order.
    moves: Vec<MoveDescriptor>,
    /// Whether the move list is in ascending order.
    ascending: bool,
}

impl GameView {
    pub(super) fn new(
        board: Board,
        winning_line: Option<WinningLine>,
        status: Status,
        moves: Vec<MoveDescriptor>,
        ascending: bool,
    ) -> Self {
        let highlighted = winning_line
            .map(|line| line.cells().to_vec())
            .unwrap_or_default();
        Self {
            board,
            winning_line,
            highlighted,
            status,
            moves,
            ascending,
        }
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// The move-list entry for the displayed snapshot.
    pub fn current_move(&self) -> Option<&MoveDescriptor> {
        self.moves.iter().find(|m| m.is_current)
    }

    /// Text of the sort-order button.
    pub fn sort_label(&self) -> &'static str {
        if self.ascending {
            "Sort in descending order"
        } else {
            "Sort in ascending order"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Draw.to_string(), "The game ended in a draw.");
        assert_eq!(Status::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_coordinates_are_one_based() {
        let coords = Coordinates::from(Position::BottomLeft);
        assert_eq!(coords.to_string(), "(3, 1)");
    }

    #[test]
    fn test_labels() {
        assert_eq!(MoveDescriptor::label_for(0), "Go to game start");
        assert_eq!(MoveDescriptor::label_for(7), "Go to move #7");
    }

    #[test]
    fn test_highlight_follows_winning_line() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        let line = crate::games::tictactoe::evaluate(&board);
        let view = GameView::new(board, line, Status::Winner(Player::O), Vec::new(), true);

        assert_eq!(
            view.highlighted(),
            &vec![Position::TopRight, Position::Center, Position::BottomLeft]
        );
        assert!(view.is_highlighted(Position::Center));
        assert!(!view.is_highlighted(Position::TopLeft));
    }

    #[test]
    fn test_nothing_highlighted_without_winner() {
        let status = Status::NextPlayer(Player::X);
        let view = GameView::new(Board::new(), None, status, Vec::new(), true);
        assert!(view.highlighted().is_empty());
        assert!(Position::ALL.iter().all(|&pos| !view.is_highlighted(pos)));
    }
}

//! Tests for the rules engine.

use tictactoe_history::{Board, LINES, Position, Square, TicTacToePlayer as Player, evaluate, is_full};

fn board_from(cells: &str) -> Board {
    let mut board = Board::new();
    for (pos, c) in Position::ALL.into_iter().zip(cells.chars()) {
        match c {
            'X' => board.set(pos, Square::Occupied(Player::X)),
            'O' => board.set(pos, Square::Occupied(Player::O)),
            _ => {}
        }
    }
    board
}

#[test]
fn test_each_line_for_each_player() {
    for player in [Player::X, Player::O] {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(player));
            }
            let found = evaluate(&board).expect("complete line");
            assert_eq!(found.cells(), line);
            assert_eq!(found.player(), player);
        }
    }
}

#[test]
fn test_no_line_boards() {
    for cells in [".........", "XO.......", "XOXOXOOXO", "XXOOOXXOX", "XX.OO...."] {
        assert_eq!(evaluate(&board_from(cells)), None, "board {}", cells);
    }
}

#[test]
fn test_priority_between_simultaneous_lines() {
    // Bottom row and right column both complete: the row is listed first.
    let board = board_from("OOXO.XXXX");
    assert_eq!(evaluate(&board).map(|l| l.indices()), Some([6, 7, 8]));

    // Both diagonals complete: the main diagonal is listed first.
    let board = board_from("XOXOXOXOX");
    assert_eq!(evaluate(&board).map(|l| l.indices()), Some([0, 4, 8]));
}

#[test]
fn test_full_board() {
    assert!(is_full(&board_from("XXOOOXXOX")));
    assert!(!is_full(&board_from("XXOOOXXO.")));
}

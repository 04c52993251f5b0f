//! Tests for terminal-condition evaluation.

use noughts_core::rules::{Line, is_draw, outcome, winning_line, winning_symbol};
use noughts_core::{Board, Coord, Outcome, Symbol};

#[test]
fn test_top_row_win() {
    let board = Board::from_rows([[1, 1, 1], [0, -1, 0], [-1, 0, 0]]).unwrap();
    assert_eq!(winning_symbol(&board), Some(Symbol::FIRST));
    assert_eq!(outcome(&board), Outcome::Win(Symbol::FIRST));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = Board::from_rows([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]).unwrap();
    assert_eq!(winning_symbol(&board), None);
    assert_eq!(outcome(&board), Outcome::Draw);
    assert!(is_draw(&board));
}

#[test]
fn test_main_diagonal_win() {
    let board = Board::from_rows([[1, -1, 0], [0, 1, 0], [0, -1, 1]]).unwrap();
    assert_eq!(winning_symbol(&board), Some(Symbol::FIRST));
}

#[test]
fn test_outcome_idempotent() {
    let boards = [
        Board::from_rows([[1, 1, 1], [0, -1, 0], [-1, 0, 0]]).unwrap(),
        Board::from_rows([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]).unwrap(),
        Board::new(3),
    ];
    for board in &boards {
        assert_eq!(outcome(board), outcome(board));
    }
}

#[test]
fn test_rows_scanned_before_columns() {
    // Impossible in play, but the scan order must still be stable.
    let board = Board::from_rows([[-1, -1, -1], [1, 0, 0], [1, 0, 0]]).unwrap();
    assert_eq!(winning_line(&board), Some((Line::Row(0), Symbol::SECOND)));

    let board = Board::from_rows([[1, -1, -1], [1, 0, 0], [1, -1, -1]]).unwrap();
    assert_eq!(winning_line(&board), Some((Line::Column(0), Symbol::FIRST)));
}

/// Every 3×3 board over {-1, 0, 1}: a winner exists exactly when some line
/// is uniformly one non-zero symbol, and full boards without one are draws.
#[test]
fn test_winner_iff_uniform_line_exhaustive() {
    let lines: Vec<Vec<Coord>> = Line::all(3).map(|line| line.coords(3).collect()).collect();

    for code in 0..3_u32.pow(9) {
        let mut board = Board::new(3);
        let mut rest = code;
        for i in 0..9 {
            let value = (rest % 3) as i8 - 1;
            rest /= 3;
            if value != 0 {
                board.place(Coord::new(i / 3, i % 3), Symbol::new(value).unwrap());
            }
        }

        let uniform = lines.iter().any(|line| {
            let first = board.get(line[0]).unwrap();
            first.symbol().is_some() && line.iter().all(|&c| board.get(c) == Some(first))
        });
        assert_eq!(winning_symbol(&board).is_some(), uniform, "board:\n{board}");

        if !uniform && board.count_empty() == 0 {
            assert_eq!(outcome(&board), Outcome::Draw);
        }
    }
}

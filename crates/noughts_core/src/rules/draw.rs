//! Draw detection logic for n-by-n tic-tac-toe.

use super::win::winning_symbol;
use crate::Board;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.count_empty() == 0
}

/// A full board with no winning line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winning_symbol(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Symbol};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.place(Coord::new(1, 1), Symbol::FIRST);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X O / O X O
        let board = Board::from_rows([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]).unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_rows([[1, 1, 1], [-1, -1, 1], [1, -1, -1]]).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}

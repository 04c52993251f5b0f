//! Win detection logic for n-by-n tic-tac-toe.

use crate::{Board, Cell, Coord, Symbol};
use serde::{Deserialize, Serialize};

/// One of the 2n + 2 lines that can win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Top-left to bottom-right, cells `(i, i)`.
    Diagonal,
    /// Top-right to bottom-left, cells `(i, n - 1 - i)`.
    AntiDiagonal,
}

impl Line {
    /// All lines of an n-by-n board in evaluation order: rows, columns,
    /// main diagonal, anti-diagonal.
    pub fn all(dimension: usize) -> impl Iterator<Item = Line> {
        (0..dimension)
            .map(Line::Row)
            .chain((0..dimension).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Coordinates on this line, in index order.
    pub fn coords(self, dimension: usize) -> impl Iterator<Item = Coord> {
        (0..dimension).map(move |i| match self {
            Line::Row(row) => Coord::new(row, i),
            Line::Column(col) => Coord::new(i, col),
            Line::Diagonal => Coord::new(i, i),
            Line::AntiDiagonal => Coord::new(i, dimension - 1 - i),
        })
    }

    /// Returns the symbol filling every cell of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Symbol> {
        let mut coords = self.coords(board.dimension());
        let first = board.get(coords.next()?)?.symbol()?;
        coords
            .all(|coord| board.get(coord) == Some(Cell::Occupied(first)))
            .then_some(first)
    }
}

/// Returns the first completed line and its owner.
///
/// Scan order is rows, columns, then diagonals. Normal play can never
/// complete lines for two different symbols, so the order only matters for
/// hand-built boards.
pub fn winning_line(board: &Board) -> Option<(Line, Symbol)> {
    Line::all(board.dimension()).find_map(|line| line.owner(board).map(|symbol| (line, symbol)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if some row, column, or diagonal is entirely
/// `symbol`, `None` otherwise.
pub fn winning_symbol(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(_, symbol)| symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_symbol(&Board::new(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[1, 1, 1], [0, -1, 0], [-1, 0, 0]]).unwrap();
        assert_eq!(winning_line(&board), Some((Line::Row(0), Symbol::FIRST)));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[1, -1, 0], [1, -1, 0], [0, -1, 1]]).unwrap();
        assert_eq!(winning_line(&board), Some((Line::Column(1), Symbol::SECOND)));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::from_rows([[1, -1, 0], [0, 1, 0], [0, -1, 1]]).unwrap();
        assert_eq!(winning_line(&board), Some((Line::Diagonal, Symbol::FIRST)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows([[1, 1, -1], [0, -1, 0], [-1, 0, 1]]).unwrap();
        assert_eq!(winning_line(&board), Some((Line::AntiDiagonal, Symbol::SECOND)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[1, 1, 0], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(winning_symbol(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows([[1, 1, -1], [0, 0, 0], [0, 0, 0]]).unwrap();
        assert_eq!(winning_symbol(&board), None);
    }

    #[test]
    fn test_line_count_and_anti_diagonal_cells() {
        assert_eq!(Line::all(4).count(), 10);
        let cells: Vec<_> = Line::AntiDiagonal.coords(3).collect();
        assert_eq!(cells, vec![Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)]);
    }

    #[test]
    fn test_four_by_four_row() {
        let board = Board::from_rows([
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [-1, -1, -1, -1],
            [1, 1, 1, 0],
        ])
        .unwrap();
        assert_eq!(winning_line(&board), Some((Line::Row(2), Symbol::SECOND)));
    }
}

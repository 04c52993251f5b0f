//! Exhaustive minimax search for a perfect computer opponent.
//!
//! The search walks the whole remaining game tree on a single board,
//! placing and undoing one mark per ply. There is no pruning and no cache:
//! every call starts from scratch. Cost grows with (n²)!, which is fine for
//! 3×3 (at most 9! leaves) and hopeless much beyond it.

use crate::{Board, Coord, Outcome, Symbol, rules};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score base for a win; a win found `d` plies deep scores `base - d`.
const WIN_BASE: i32 = 10;

/// Which side a ply belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The root player's ply: take the highest child score.
    Maximizing,
    /// The opponent's ply: take the lowest child score.
    Minimizing,
}

impl Role {
    /// The role of the next ply.
    pub fn flip(self) -> Self {
        match self {
            Role::Maximizing => Role::Minimizing,
            Role::Minimizing => Role::Maximizing,
        }
    }
}

/// Result of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Minimax value of the position for the root player.
    pub score: i32,
    /// Best move, `None` when the board has no empty cell.
    pub coord: Option<Coord>,
}

/// A mark placed for the lifetime of the guard.
///
/// Dropping the guard clears the cell again, so every exit path out of a
/// recursive call leaves the board as it found it.
struct Placement<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, coord: Coord, symbol: Symbol) -> Self {
        board.place(coord, symbol);
        Self { board, coord }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.clear(self.coord);
    }
}

/// Minimax searcher for one player against one opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    me: Symbol,
    opponent: Symbol,
}

impl Minimax {
    /// Creates a searcher that maximizes for `me` against `opponent`.
    pub fn new(me: Symbol, opponent: Symbol) -> Self {
        Self { me, opponent }
    }

    /// Returns the optimal move for `me`, or `None` on a full board.
    ///
    /// Ties go to the first candidate in row-major order.
    pub fn best_move(&self, board: &mut Board) -> Option<Coord> {
        self.evaluate(board).coord
    }

    /// Scores every move available to `me` and keeps the best.
    ///
    /// The board is borrowed mutably for the duration of the search and is
    /// identical cell-for-cell when this returns.
    #[instrument(skip(self, board), fields(me = %self.me, empty = board.count_empty()))]
    pub fn evaluate(&self, board: &mut Board) -> SearchResult {
        let base = win_base(board.dimension());
        let n = board.dimension();
        let mut best: Option<(Coord, i32)> = None;

        for row in 0..n {
            for col in 0..n {
                let coord = Coord::new(row, col);
                if !board.is_empty(coord) {
                    continue;
                }
                let score = {
                    let mut placed = Placement::new(board, coord, self.me);
                    self.score(&mut placed, 0, Role::Minimizing, base)
                };
                if best.is_none_or(|(_, top)| score > top) {
                    best = Some((coord, score));
                }
            }
        }

        let result = match best {
            Some((coord, score)) => SearchResult {
                score,
                coord: Some(coord),
            },
            None => SearchResult {
                score: self.score(board, 0, Role::Maximizing, base),
                coord: None,
            },
        };
        debug!(?result, "Search complete");
        result
    }

    fn score(&self, board: &mut Board, depth: i32, role: Role, base: i32) -> i32 {
        match rules::outcome(board) {
            Outcome::Win(symbol) if symbol == self.me => return base - depth,
            Outcome::Win(_) => return depth - base,
            Outcome::Draw => return 0,
            Outcome::Ongoing => {}
        }

        let mover = match role {
            Role::Maximizing => self.me,
            Role::Minimizing => self.opponent,
        };
        let mut best = match role {
            Role::Maximizing => i32::MIN,
            Role::Minimizing => i32::MAX,
        };

        let n = board.dimension();
        for row in 0..n {
            for col in 0..n {
                let coord = Coord::new(row, col);
                if !board.is_empty(coord) {
                    continue;
                }
                let mut placed = Placement::new(board, coord, mover);
                let child = self.score(&mut placed, depth + 1, role.flip(), base);
                best = match role {
                    Role::Maximizing => best.max(child),
                    Role::Minimizing => best.min(child),
                };
            }
        }
        best
    }
}

/// Win score base for a board: 10 on 3×3, and always more than the
/// deepest possible ply so a win never scores at or below a draw.
fn win_base(dimension: usize) -> i32 {
    let cells = i32::try_from(dimension * dimension).unwrap_or(i32::MAX - 1);
    WIN_BASE.max(cells + 1)
}

/// Returns the optimal move for `symbol`, treating `symbol.opponent()` as
/// the other side. `None` means the board is full.
///
/// Use [`Minimax::new`] directly for symbol pairs that are not negations
/// of each other.
pub fn best_move(board: &mut Board, symbol: Symbol) -> Option<Coord> {
    Minimax::new(symbol, symbol.opponent()).best_move(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_restores_on_drop() {
        let mut board = Board::new(3);
        {
            let placed = Placement::new(&mut board, Coord::new(1, 2), Symbol::FIRST);
            assert!(!placed.is_empty(Coord::new(1, 2)));
        }
        assert_eq!(board, Board::new(3));
    }

    #[test]
    fn test_role_flip() {
        assert_eq!(Role::Maximizing.flip(), Role::Minimizing);
        assert_eq!(Role::Minimizing.flip(), Role::Maximizing);
    }

    #[test]
    fn test_win_base() {
        assert_eq!(win_base(3), 10);
        assert_eq!(win_base(2), 10);
        assert_eq!(win_base(4), 17);
    }

    #[test]
    fn test_immediate_win_scores_full_base() {
        let mut board = Board::from_rows([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]).unwrap();
        let result = Minimax::new(Symbol::FIRST, Symbol::SECOND).evaluate(&mut board);
        assert_eq!(result.coord, Some(Coord::new(0, 2)));
        assert_eq!(result.score, 10);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // O to move; X threatens the top row.
        let mut board = Board::from_rows([[1, 1, 0], [0, -1, 0], [0, 0, 0]]).unwrap();
        assert_eq!(best_move(&mut board, Symbol::SECOND), Some(Coord::new(0, 2)));
    }

    #[test]
    fn test_full_board_scores_terminal_state() {
        let mut board = Board::from_rows([[1, -1, 1], [-1, 1, -1], [-1, 1, -1]]).unwrap();
        let result = Minimax::new(Symbol::FIRST, Symbol::SECOND).evaluate(&mut board);
        assert_eq!(result, SearchResult { score: 0, coord: None });
    }
}

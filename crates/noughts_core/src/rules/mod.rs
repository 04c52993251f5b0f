//! Game rules for n-by-n tic-tac-toe.
//!
//! Pure functions of a [`Board`] snapshot: no mutation, no stored state.
//! The search calls [`outcome`] at every node, so each call stays
//! allocation-free at O(n²).

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, winning_line, winning_symbol};

use crate::{Board, Outcome};

/// Classifies a board as won, drawn, or still in play.
///
/// A winning line takes precedence over a full board.
pub fn outcome(board: &Board) -> Outcome {
    match winning_symbol(board) {
        Some(symbol) => Outcome::Win(symbol),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}

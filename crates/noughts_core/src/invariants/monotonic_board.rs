//! Monotonic board invariant: the board is exactly what the move logs say.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: every occupied cell came from a logged move, and no logged
/// move was ever overwritten.
///
/// Verified by replaying each player's log onto an empty board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new(game.board().dimension());

        for player in game.players() {
            for &coord in player.moves() {
                // Cell must be empty before placing
                if !reconstructed.is_empty(coord) {
                    return false;
                }
                reconstructed.place(coord, player.symbol());
            }
        }

        &reconstructed == game.board()
    }

    fn description() -> &'static str {
        "Board matches the replayed move logs"
    }
}

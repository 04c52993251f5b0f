//! History consistency invariant: logged moves match occupied cells.

use super::Invariant;
use crate::Game;

/// Invariant: the total length of all move logs equals the number of
/// occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let occupied = board.cells().len() - board.count_empty();
        game.move_count() == occupied
    }

    fn description() -> &'static str {
        "Move log length matches number of occupied cells"
    }
}

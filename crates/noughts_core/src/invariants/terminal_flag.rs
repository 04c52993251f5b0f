//! Terminal flag invariant: `game_over` agrees with the board.

use super::Invariant;
use crate::Game;

/// Invariant: the game is marked over exactly when the board shows a win
/// or a draw.
pub struct TerminalFlagInvariant;

impl Invariant<Game> for TerminalFlagInvariant {
    fn holds(game: &Game) -> bool {
        game.is_over() == game.outcome().is_terminal()
    }

    fn description() -> &'static str {
        "Game-over flag matches the board's terminal status"
    }
}

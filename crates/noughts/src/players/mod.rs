//! Move sources for each seat.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::console::Terminal;
use anyhow::Result;
use noughts_core::{Coord, Game, Player};

/// Something that decides the next move for a seat.
pub trait Controller {
    /// Returns a legal move for the player at `seat`.
    fn next_move(&mut self, game: &mut Game, seat: usize, term: &mut dyn Terminal)
    -> Result<Coord>;
}

/// Picks the controller matching the player's `computer` flag.
pub fn controller_for(player: &Player) -> Box<dyn Controller> {
    if player.is_computer() {
        Box::new(ComputerPlayer)
    } else {
        Box::new(HumanPlayer)
    }
}

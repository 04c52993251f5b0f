//! Computer player backed by the minimax search.

use super::Controller;
use crate::console::Terminal;
use anyhow::{Context, Result};
use noughts_core::{Coord, Game};
use tracing::{info, instrument};

/// Computer player that never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerPlayer;

impl Controller for ComputerPlayer {
    #[instrument(skip(self, game, term))]
    fn next_move(
        &mut self,
        game: &mut Game,
        seat: usize,
        term: &mut dyn Terminal,
    ) -> Result<Coord> {
        let coord = game
            .best_move_for(seat)?
            .context("No moves available for the computer")?;

        let name = game.player(seat).map(|p| p.name()).unwrap_or("Computer");
        info!(%coord, "Computer chose move");
        term.say(&format!("{name} plays {coord}"))?;
        Ok(coord)
    }
}

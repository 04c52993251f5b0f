//! Human player reading row and column from the terminal.

use super::Controller;
use crate::console::Terminal;
use anyhow::{Result, bail};
use noughts_core::{Coord, Game};
use tracing::{debug, instrument};

/// Human player typing coordinates.
///
/// Non-numeric, off-board, or occupied answers print `No valid move` and
/// ask again, so the engine only ever sees legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    fn ask_index(term: &mut dyn Terminal, prompt: &str) -> Result<Option<usize>> {
        let Some(line) = term.ask(prompt)? else {
            bail!("Input closed while waiting for a move");
        };
        Ok(line.trim().parse::<usize>().ok())
    }
}

impl Controller for HumanPlayer {
    #[instrument(skip(self, game, term))]
    fn next_move(
        &mut self,
        game: &mut Game,
        seat: usize,
        term: &mut dyn Terminal,
    ) -> Result<Coord> {
        loop {
            let row = Self::ask_index(term, "Choose row: ")?;
            let col = Self::ask_index(term, "Choose col: ")?;

            if let (Some(row), Some(col)) = (row, col) {
                let coord = Coord::new(row, col);
                if game.is_valid_move(coord) {
                    debug!(%coord, "Human chose move");
                    return Ok(coord);
                }
            }
            term.say("No valid move")?;
        }
    }
}

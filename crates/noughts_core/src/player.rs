//! Player identity records.

use crate::{Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A seat in the game: who they are, how they are drawn, and what they played.
///
/// Everything except the move log is fixed at creation. The log is
/// append-only and only the engine writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    glyph: char,
    symbol: Symbol,
    moves: Vec<Coord>,
    computer: bool,
}

impl Player {
    /// Creates a human-controlled player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn human(name: impl AsRef<str>, glyph: char, symbol: Symbol) -> Self {
        Self::with_control(name.as_ref(), glyph, symbol, false)
    }

    /// Creates a computer-controlled player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn computer(name: impl AsRef<str>, glyph: char, symbol: Symbol) -> Self {
        Self::with_control(name.as_ref(), glyph, symbol, true)
    }

    fn with_control(name: &str, glyph: char, symbol: Symbol, computer: bool) -> Self {
        Self {
            name: name.to_string(),
            glyph,
            symbol,
            moves: Vec::new(),
            computer,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character drawn in this player's cells.
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Value written to the board for this player.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    /// Returns true if the search chooses this player's moves.
    pub fn is_computer(&self) -> bool {
        self.computer
    }

    pub(crate) fn record_move(&mut self, coord: Coord) {
        self.moves.push(coord);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.glyph)
    }
}

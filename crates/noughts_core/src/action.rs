//! First-class move and turn types.
//!
//! Moves are domain events, not side effects. A [`Move`] can be checked
//! against the game's contracts before it is applied.

use crate::{Coord, Symbol};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player (by seat index) placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Seat index of the player making the move.
    pub player: usize,
    /// Target cell.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: usize, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player {} -> {}", self.player, self.coord)
    }
}

/// What happened after a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnResult {
    /// Nobody has won and cells remain; hand the turn on.
    Continue,
    /// The player at this seat completed a line.
    Win(usize),
    /// The board filled up with no winner.
    Draw,
}

impl TurnResult {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, TurnResult::Continue)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside the board.
    #[display("Coordinate {_0} is off the board")]
    InvalidCoordinate(#[error(not(source))] Coord),

    /// The target cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Coord),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No player sits at this index.
    #[display("No player at seat {_0}")]
    UnknownPlayer(#[error(not(source))] usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

/// Error building a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Board dimension must be at least 1.
    #[display("Board dimension must be at least 1, got {_0}")]
    InvalidDimension(#[error(not(source))] usize),

    /// A game needs at least one player.
    #[display("A game needs at least one player")]
    NoPlayers,

    /// Two players share a symbol.
    #[display("Symbol {_0} is used by more than one player")]
    DuplicateSymbol(#[error(not(source))] Symbol),

    /// Two players share a glyph.
    #[display("Glyph '{_0}' is used by more than one player")]
    DuplicateGlyph(#[error(not(source))] char),

    /// A player arrived with moves already logged.
    #[display("Player {_0} already has moves recorded")]
    PlayerHasHistory(#[error(not(source))] String),
}

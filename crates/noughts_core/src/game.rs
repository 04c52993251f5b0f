//! Game engine for n-by-n tic-tac-toe.
//!
//! The engine applies one validated move at a time and reports the result.
//! Turn order belongs to the caller: the engine only checks that a move is
//! legal on the current board.

use crate::action::{GameError, Move, MoveError, TurnResult};
use crate::contracts::{Contract, MoveContract};
use crate::search::Minimax;
use crate::{Board, Cell, Coord, Outcome, Player, Symbol, rules};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Board plus the terminal flag.
///
/// `game_over` flips to true once, on the move that ends the game, and
/// never flips back.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Set when a win or draw has been reached.
    game_over: bool,
}

impl GameState {
    fn new(dimension: usize) -> Self {
        Self {
            board: Board::new(dimension),
            game_over: false,
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    players: Vec<Player>,
    glyphs: HashMap<Symbol, char>,
}

impl Game {
    /// Creates a game on an empty `dimension` × `dimension` board.
    ///
    /// # Errors
    ///
    /// Rejects a zero dimension, an empty roster, shared symbols or glyphs,
    /// and players that already carry moves.
    #[instrument(skip(players), fields(roster = players.len()))]
    pub fn new(players: Vec<Player>, dimension: usize) -> Result<Self, GameError> {
        if dimension == 0 {
            return Err(GameError::InvalidDimension(dimension));
        }
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }

        let mut glyphs = HashMap::with_capacity(players.len());
        for player in &players {
            if !player.moves().is_empty() {
                return Err(GameError::PlayerHasHistory(player.name().to_string()));
            }
            if glyphs.values().any(|g| *g == player.glyph()) {
                return Err(GameError::DuplicateGlyph(player.glyph()));
            }
            if glyphs.insert(player.symbol(), player.glyph()).is_some() {
                return Err(GameError::DuplicateSymbol(player.symbol()));
            }
        }

        info!(dimension, "New game");
        Ok(Self {
            state: GameState::new(dimension),
            players,
            glyphs,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Returns the roster in seat order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player at `seat`.
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns true once a win or draw has been reached.
    pub fn is_over(&self) -> bool {
        self.state.game_over
    }

    /// Current terminal status of the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.state.board)
    }

    /// Seat of the winning player, if the game was won.
    pub fn winner(&self) -> Option<usize> {
        self.outcome()
            .winner()
            .and_then(|symbol| self.seat_of(symbol))
    }

    fn seat_of(&self, symbol: Symbol) -> Option<usize> {
        self.players.iter().position(|p| p.symbol() == symbol)
    }

    /// Returns true if a mark may be placed at `coord`.
    pub fn is_valid_move(&self, coord: Coord) -> bool {
        !self.state.game_over && self.state.board.is_empty(coord)
    }

    /// Places the player's mark, logs the move, and evaluates the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the seat is unknown, or
    /// the coordinate is off the board or occupied. The board is untouched
    /// in those cases.
    #[instrument(skip(self), fields(move_number = self.move_count() + 1))]
    pub fn apply_move(&mut self, coord: Coord, seat: usize) -> Result<TurnResult, MoveError> {
        let action = Move::new(seat, coord);
        MoveContract::pre(self, &action)?;

        let symbol = self.players[action.player].symbol();
        self.state.board.place(action.coord, symbol);

        // The move is only logged once the board evaluates cleanly.
        let result = match rules::outcome(&self.state.board) {
            Outcome::Ongoing => TurnResult::Continue,
            Outcome::Draw => TurnResult::Draw,
            Outcome::Win(winner) => match self.seat_of(winner) {
                Some(seat) => TurnResult::Win(seat),
                None => {
                    self.state.board.clear(action.coord);
                    return Err(MoveError::InvariantViolation(format!(
                        "Winning symbol {winner} belongs to no player"
                    )));
                }
            },
        };
        self.players[action.player].record_move(action.coord);

        if result.is_terminal() {
            self.state.game_over = true;
            info!(?result, "Game finished");
        } else {
            debug!(%action, "Move applied");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        Ok(result)
    }

    /// Asks the search for the best move for the player at `seat`.
    ///
    /// The opponent is the next seat in the roster, or the negated symbol
    /// for a single-seat game. Returns `Ok(None)` only on a full board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] on a finished game and
    /// [`MoveError::UnknownPlayer`] for a bad seat.
    #[instrument(skip(self))]
    pub fn best_move_for(&mut self, seat: usize) -> Result<Option<Coord>, MoveError> {
        if self.state.game_over {
            return Err(MoveError::GameOver);
        }
        let me = self
            .players
            .get(seat)
            .ok_or(MoveError::UnknownPlayer(seat))?
            .symbol();
        let opponent = match self.players.len() {
            1 => me.opponent(),
            n => self.players[(seat + 1) % n].symbol(),
        };
        Ok(Minimax::new(me, opponent).best_move(&mut self.state.board))
    }

    /// Total moves applied so far.
    pub fn move_count(&self) -> usize {
        self.players.iter().map(|p| p.moves().len()).sum()
    }

    /// Read-only view of the board drawn with player glyphs.
    pub fn snapshot(&self) -> BoardView {
        let dimension = self.state.board.dimension();
        let cells = self
            .state
            .board
            .cells()
            .iter()
            .map(|cell| match cell {
                Cell::Empty => None,
                Cell::Occupied(symbol) => self.glyphs.get(symbol).copied(),
            })
            .collect();
        BoardView { dimension, cells }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.state.board
    }
}

/// Board rendered with glyphs instead of symbols, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    dimension: usize,
    cells: Vec<Option<char>>,
}

impl BoardView {
    /// Side length of the board.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Glyph at the coordinate, `None` for empty or off-board cells.
    pub fn glyph(&self, coord: Coord) -> Option<char> {
        if coord.row >= self.dimension || coord.col >= self.dimension {
            return None;
        }
        self.cells
            .get(coord.row * self.dimension + coord.col)
            .copied()
            .flatten()
    }

    /// Rows of glyphs, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        self.cells.chunks(self.dimension.max(1))
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = "-".repeat((self.dimension * 4).saturating_sub(1));
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let line = row
                .iter()
                .map(|glyph| glyph.unwrap_or(' ').to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

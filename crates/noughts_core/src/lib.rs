//! Noughts core - n-by-n tic-tac-toe game logic
//!
//! Pure game logic with no I/O: a driver supplies validated moves and
//! decides whose turn it is.
//!
//! # Architecture
//!
//! - **Board**: n×n grid of [`Cell`]s holding player [`Symbol`]s
//! - **Rules**: pure win/draw evaluation ([`rules::outcome`])
//! - **Game**: applies moves, keeps move logs, detects the end of the game
//! - **Search**: exhaustive minimax for a computer player that never loses
//!
//! # Example
//!
//! ```
//! use noughts_core::{Coord, Game, Player, Symbol, TurnResult};
//!
//! let players = vec![
//!     Player::human("Player 1", 'X', Symbol::FIRST),
//!     Player::computer("Terminator", 'T', Symbol::SECOND),
//! ];
//! let mut game = Game::new(players, 3)?;
//!
//! assert_eq!(game.apply_move(Coord::new(1, 1), 0)?, TurnResult::Continue);
//! let reply = game.best_move_for(1)?.expect("board has empty cells");
//! assert!(game.is_valid_move(reply));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod player;
pub mod rules;
mod search;
mod types;

pub use action::{GameError, Move, MoveError, TurnResult};
pub use contracts::{
    CellIsEmpty, Contract, GameNotOver, InBounds, KnownPlayer, LegalMove, MoveContract,
};
pub use game::{BoardView, Game, GameState};
pub use player::Player;
pub use search::{Minimax, Role, SearchResult, best_move};
pub use types::{Board, BoardError, Cell, Coord, Outcome, Symbol, SymbolError};

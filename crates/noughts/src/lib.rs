//! Noughts - terminal front end for the noughts game engine
//!
//! Everything here is I/O glue: the [`Terminal`] abstraction, interactive
//! setup, per-seat move controllers, and the turn loop. Game rules and the
//! search live in `noughts_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod banner;
pub mod cli;
pub mod config;
pub mod console;
pub mod orchestrator;
pub mod players;
pub mod setup;
pub mod solve;

pub use config::{ConfigError, GameConfig};
pub use console::{Console, Terminal};
pub use orchestrator::{Orchestrator, pick_first};
pub use players::{ComputerPlayer, Controller, HumanPlayer};
pub use setup::Mode;
pub use solve::{SolveReport, self_play};

//! Game orchestration between players.

use crate::console::Terminal;
use crate::players::{Controller, controller_for};
use anyhow::{Context, Result};
use noughts_core::{Game, TurnResult};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Runs turns until the game ends.
///
/// The orchestrator owns turn order: it asks the current seat's controller
/// for a move, applies it, prints the board, and hands the turn on.
pub struct Orchestrator {
    game: Game,
    controllers: Vec<Box<dyn Controller>>,
    current: usize,
}

impl Orchestrator {
    /// Creates an orchestrator with `first` to move.
    pub fn new(game: Game, first: usize) -> Self {
        let controllers = game.players().iter().map(controller_for).collect();
        let current = first % game.players().len();
        Self {
            game,
            controllers,
            current,
        }
    }

    /// Replaces the controller at `seat`.
    pub fn with_controller(mut self, seat: usize, controller: Box<dyn Controller>) -> Self {
        if let Some(slot) = self.controllers.get_mut(seat) {
            *slot = controller;
        }
        self
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn name(&self, seat: usize) -> &str {
        self.game.player(seat).map(|p| p.name()).unwrap_or("?")
    }

    /// Runs the game loop and returns the final result.
    #[instrument(skip(self, term))]
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<TurnResult> {
        info!(first = self.current, "Starting game orchestration");
        term.say(&self.game.snapshot().to_string())?;
        term.say(&format!("Starting with {}", self.name(self.current)))?;

        loop {
            let seat = self.current;
            debug!(player = %self.name(seat), "Waiting for move");
            let coord = self.controllers[seat].next_move(&mut self.game, seat, term)?;
            let result = self
                .game
                .apply_move(coord, seat)
                .with_context(|| format!("Move {coord} by {} was rejected", self.name(seat)))?;

            term.say(&self.game.snapshot().to_string())?;

            match result {
                TurnResult::Continue => {
                    self.current = (seat + 1) % self.controllers.len();
                    term.say(&format!("{}'s turn!", self.name(self.current)))?;
                }
                TurnResult::Win(winner) => {
                    term.say(&format!("{} is the winner!", self.name(winner)))?;
                    return Ok(result);
                }
                TurnResult::Draw => {
                    term.say("Draw")?;
                    return Ok(result);
                }
            }
        }
    }
}

/// Resolves the starting seat: `requested` is one-based, a coin flip when
/// absent.
pub fn pick_first(requested: Option<u8>, seats: usize) -> usize {
    match requested {
        Some(n) => usize::from(n.saturating_sub(1)) % seats.max(1),
        None => rand::rng().random_range(0..seats.max(1)),
    }
}

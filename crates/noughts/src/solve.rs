//! Computer self-play.

use anyhow::{Context, Result};
use derive_getters::Getters;
use derive_new::new;
use noughts_core::{Coord, Game, Player, TurnResult};
use tracing::{info, instrument};

use crate::config::GameConfig;
use crate::setup::seat_symbol;

/// Result of a game the computer plays against itself.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
pub struct SolveReport {
    /// Board side length.
    size: usize,
    /// First move chosen on the empty board.
    opening: Option<Coord>,
    /// Every move in play order.
    moves: Vec<Coord>,
    /// How the game ended.
    result: TurnResult,
}

impl std::fmt::Display for SolveReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.opening {
            Some(coord) => writeln!(f, "Opening move on {0}x{0}: {coord}", self.size)?,
            None => writeln!(f, "No opening move on {0}x{0}", self.size)?,
        }
        let outcome = match self.result {
            TurnResult::Win(seat) => format!("Seat {} wins", seat + 1),
            TurnResult::Draw => "Draw".to_string(),
            TurnResult::Continue => "Unfinished".to_string(),
        };
        write!(f, "Perfect play: {outcome} after {} moves", self.moves.len())
    }
}

/// Plays both seats with the search until the game ends.
#[instrument(skip(config), fields(size = config.size()))]
pub fn self_play(config: &GameConfig) -> Result<SolveReport> {
    let [first, second] = *config.default_glyphs();
    let players = vec![
        Player::computer("Computer 1", first, seat_symbol(0)),
        Player::computer("Computer 2", second, seat_symbol(1)),
    ];
    let mut game = Game::new(players, *config.size())?;

    let mut moves = Vec::new();
    let mut seat = 0;
    let result = loop {
        let coord = game
            .best_move_for(seat)?
            .context("Search found no move on an unfinished board")?;
        moves.push(coord);
        let result = game.apply_move(coord, seat)?;
        if result.is_terminal() {
            break result;
        }
        seat = (seat + 1) % game.players().len();
    };

    info!(?result, moves = moves.len(), "Self-play finished");
    Ok(SolveReport::new(
        *config.size(),
        moves.first().copied(),
        moves,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_play_draws_on_three_by_three() {
        let report = self_play(&GameConfig::default()).unwrap();
        assert_eq!(*report.result(), TurnResult::Draw);
        assert_eq!(report.moves().len(), 9);
        assert_eq!(*report.opening(), Some(Coord::new(0, 0)));
    }

    #[test]
    fn test_self_play_first_seat_wins_two_by_two() {
        let config = GameConfig::default().with_size(2).unwrap();
        let report = self_play(&config).unwrap();
        assert_eq!(*report.result(), TurnResult::Win(0));
        assert_eq!(
            report.to_string(),
            "Opening move on 2x2: (0, 0)\nPerfect play: Seat 1 wins after 3 moves"
        );
    }
}

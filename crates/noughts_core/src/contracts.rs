//! Contract-based validation for moves.
//!
//! Preconditions run on every move and reject it before the board is
//! touched. Postconditions re-check the game invariants in debug builds.

use crate::Game;
use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions on the state after applying the action.
    fn post(state: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not finished.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once `game_over` is set.
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the seat exists.
pub struct KnownPlayer;

impl KnownPlayer {
    /// Rejects seats past the end of the roster.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        match game.player(mov.player) {
            Some(_) => Ok(()),
            None => Err(MoveError::UnknownPlayer(mov.player)),
        }
    }
}

/// Precondition: the coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects rows or columns outside `0..n`.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().in_bounds(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::InvalidCoordinate(mov.coord))
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Composite precondition, checked in order: game running, seat known,
/// coordinate on the board, cell empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        KnownPlayer::check(mov, game)?;
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for [`Game::apply_move`].
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game).inspect_err(|e| warn!(%e, %action, "Move rejected"))
    }

    fn post(game: &Game) -> Result<(), MoveError> {
        GameInvariants::check_all(game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player, Symbol};

    fn game() -> Game {
        Game::new(
            vec![
                Player::human("Ada", 'X', Symbol::FIRST),
                Player::human("Bob", 'O', Symbol::SECOND),
            ],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = game();
        assert!(MoveContract::pre(&game, &Move::new(0, Coord::new(1, 1))).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut game = game();
        game.apply_move(Coord::new(1, 1), 0).unwrap();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(1, Coord::new(1, 1))),
            Err(MoveError::CellOccupied(Coord::new(1, 1)))
        );
    }

    #[test]
    fn test_precondition_out_of_bounds() {
        let game = game();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(0, Coord::new(0, 3))),
            Err(MoveError::InvalidCoordinate(Coord::new(0, 3)))
        );
    }

    #[test]
    fn test_precondition_unknown_seat_checked_before_bounds() {
        let game = game();
        assert_eq!(
            MoveContract::pre(&game, &Move::new(2, Coord::new(9, 9))),
            Err(MoveError::UnknownPlayer(2))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let mut game = game();
        game.apply_move(Coord::new(0, 0), 0).unwrap();
        assert!(MoveContract::post(&game).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let mut game = game();
        game.apply_move(Coord::new(0, 0), 0).unwrap();
        game.board_mut().place(Coord::new(2, 2), Symbol::SECOND);
        assert!(matches!(
            MoveContract::post(&game),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}

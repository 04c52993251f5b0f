//! Tests for the game engine.

use noughts_core::{Coord, Game, MoveError, Outcome, Player, Symbol, TurnResult};

fn versus_human() -> Game {
    Game::new(
        vec![
            Player::human("Player 1", 'X', Symbol::FIRST),
            Player::human("Player 2", 'O', Symbol::SECOND),
        ],
        3,
    )
    .expect("valid roster")
}

fn versus_computer() -> Game {
    Game::new(
        vec![
            Player::human("Player 1", 'X', Symbol::FIRST),
            Player::computer("Terminator", 'T', Symbol::SECOND),
        ],
        3,
    )
    .expect("valid roster")
}

fn play(game: &mut Game, moves: &[(usize, usize, usize)]) -> TurnResult {
    let mut last = TurnResult::Continue;
    for &(row, col, seat) in moves {
        last = game.apply_move(Coord::new(row, col), seat).expect("legal move");
    }
    last
}

#[test]
fn test_new_game_in_progress() {
    let game = versus_human();
    assert!(!game.is_over());
    assert!(!game.state().game_over());
    assert_eq!(game.board().count_empty(), 9);
    assert_eq!(game.outcome(), Outcome::Ongoing);
}

#[test]
fn test_apply_move_logs_and_continues() {
    let mut game = versus_human();
    let result = game.apply_move(Coord::new(1, 1), 0).unwrap();
    assert_eq!(result, TurnResult::Continue);
    assert_eq!(game.player(0).unwrap().moves(), &[Coord::new(1, 1)]);
    assert!(!game.is_valid_move(Coord::new(1, 1)));
    assert!(game.is_valid_move(Coord::new(0, 0)));
}

#[test]
fn test_move_log_keeps_play_order() {
    let mut game = versus_human();
    play(&mut game, &[(2, 2, 0), (0, 1, 1), (0, 0, 0), (1, 1, 1)]);
    assert_eq!(
        game.player(0).unwrap().moves(),
        &[Coord::new(2, 2), Coord::new(0, 0)]
    );
    assert_eq!(
        game.player(1).unwrap().moves(),
        &[Coord::new(0, 1), Coord::new(1, 1)]
    );
}

#[test]
fn test_win_finishes_game() {
    let mut game = versus_human();
    let result = play(
        &mut game,
        &[(0, 0, 0), (1, 1, 1), (0, 1, 0), (2, 0, 1), (0, 2, 0)],
    );
    assert_eq!(result, TurnResult::Win(0));
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(0));
}

#[test]
fn test_second_seat_can_win() {
    let mut game = versus_human();
    let result = play(
        &mut game,
        &[(0, 0, 0), (0, 2, 1), (0, 1, 0), (1, 1, 1), (2, 2, 0), (2, 0, 1)],
    );
    assert_eq!(result, TurnResult::Win(1));
    assert_eq!(game.winner(), Some(1));
}

#[test]
fn test_draw_finishes_game() {
    let mut game = versus_human();
    // X O X / X O O / O X X
    let result = play(
        &mut game,
        &[
            (0, 0, 0),
            (0, 1, 1),
            (0, 2, 0),
            (1, 1, 1),
            (1, 0, 0),
            (1, 2, 1),
            (2, 1, 0),
            (2, 0, 1),
            (2, 2, 0),
        ],
    );
    assert_eq!(result, TurnResult::Draw);
    assert!(game.is_over());
    assert_eq!(game.winner(), None);
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut game = versus_human();
    play(
        &mut game,
        &[(0, 0, 0), (1, 1, 1), (0, 1, 0), (2, 0, 1), (0, 2, 0)],
    );
    assert_eq!(
        game.apply_move(Coord::new(2, 2), 1),
        Err(MoveError::GameOver)
    );
    assert!(game.is_over());
    assert!(!game.is_valid_move(Coord::new(2, 2)));
    assert_eq!(game.best_move_for(1), Err(MoveError::GameOver));
}

#[test]
fn test_rejects_occupied_and_out_of_range() {
    let mut game = versus_human();
    game.apply_move(Coord::new(0, 0), 0).unwrap();
    assert_eq!(
        game.apply_move(Coord::new(0, 0), 1),
        Err(MoveError::CellOccupied(Coord::new(0, 0)))
    );
    assert_eq!(
        game.apply_move(Coord::new(3, 1), 1),
        Err(MoveError::InvalidCoordinate(Coord::new(3, 1)))
    );
    assert!(!game.is_valid_move(Coord::new(3, 1)));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        MoveError::CellOccupied(Coord::new(1, 2)).to_string(),
        "Cell (1, 2) is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
}

#[test]
fn test_computer_takes_winning_cell() {
    let mut game = versus_computer();
    play(&mut game, &[(0, 0, 0), (1, 1, 1), (0, 1, 0), (1, 0, 1), (2, 2, 0)]);
    let before = game.board().clone();
    let reply = game.best_move_for(1).unwrap();
    assert_eq!(game.board(), &before);
    assert_eq!(reply, Some(Coord::new(1, 2)));
    assert_eq!(game.apply_move(reply.unwrap(), 1).unwrap(), TurnResult::Win(1));
}

#[test]
fn test_best_move_for_unknown_seat() {
    let mut game = versus_computer();
    assert_eq!(game.best_move_for(4), Err(MoveError::UnknownPlayer(4)));
}

#[test]
fn test_snapshot_serializes() {
    let mut game = versus_computer();
    game.apply_move(Coord::new(0, 0), 0).unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["dimension"], 3);
    assert_eq!(json["cells"][0], "X");
    assert!(json["cells"][1].is_null());
}

/// Plays every possible sequence of replies against the computer and
/// checks that it never loses.
fn computer_never_loses(game: &mut Game, computer: usize, to_move: usize) {
    if game.is_over() {
        assert_ne!(
            game.winner(),
            Some(1 - computer),
            "computer lost:\n{}",
            game.snapshot()
        );
        return;
    }

    if to_move == computer {
        let coord = game
            .best_move_for(computer)
            .unwrap()
            .expect("ongoing board has a move");
        game.apply_move(coord, computer).unwrap();
        computer_never_loses(game, computer, 1 - to_move);
    } else {
        let replies: Vec<Coord> = game.board().empty_cells().collect();
        for coord in replies {
            let mut branch = game.clone();
            branch.apply_move(coord, to_move).unwrap();
            computer_never_loses(&mut branch, computer, 1 - to_move);
        }
    }
}

#[test]
fn test_computer_never_loses_moving_first() {
    let mut game = Game::new(
        vec![
            Player::computer("Terminator", 'T', Symbol::FIRST),
            Player::human("Player 1", 'X', Symbol::SECOND),
        ],
        3,
    )
    .unwrap();
    computer_never_loses(&mut game, 0, 0);
}

#[test]
fn test_computer_never_loses_moving_second() {
    let mut game = versus_computer();
    computer_never_loses(&mut game, 1, 0);
}

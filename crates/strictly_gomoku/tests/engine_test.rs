//! Tests for the history/cursor game engine.

use strictly_gomoku::invariants::{EngineInvariants, InvariantSet};
use strictly_gomoku::{Engine, GameError, GameStatus, Player, Square, WinRule};

fn new_game(size: usize, run_length: usize) -> Engine {
    Engine::new(WinRule::new(size, run_length).expect("valid rule"))
}

fn play(game: &mut Engine, cells: &[usize]) {
    for &cell in cells {
        game.commit_move(cell).expect("cell on board");
    }
}

#[test]
fn test_top_row_win() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 3, 1, 4, 2]);

    let view = game.current_view();
    assert_eq!(view.win_result.status, GameStatus::Won(Player::X));
    assert_eq!(view.win_result.winning_cells, vec![0, 1, 2]);
    assert_eq!(view.step_number, 5);
    assert_eq!(view.history_length, 6);
}

#[test]
fn test_draw_game() {
    let mut game = new_game(3, 3);
    // Ends as X O X / X O O / O X X.
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let view = game.current_view();
    assert_eq!(view.win_result.status, GameStatus::Draw);
    assert!(view.win_result.winning_cells.is_empty());
    assert!(strictly_gomoku::is_full(view.board));
}

#[test]
fn test_unreachable_draw_board_is_still_a_draw() {
    use Player::{O, X};
    let mut board = strictly_gomoku::Board::new(3);
    for (i, p) in [X, O, X, O, X, O, O, X, O].into_iter().enumerate() {
        board.set(i, Square::Occupied(p)).unwrap();
    }
    let result = strictly_gomoku::detect(&board, 3);
    assert_eq!(result.status, GameStatus::Draw);
    assert!(result.winning_cells.is_empty());
}

#[test]
fn test_jump_then_view_returns_stored_snapshot() {
    let mut game = new_game(4, 3);
    play(&mut game, &[5, 6, 9, 10]);
    let snapshots = game.history().snapshots().to_vec();

    for (step, snapshot) in snapshots.iter().enumerate() {
        game.jump_to(step).unwrap();
        let view = game.current_view();
        assert_eq!(view.board, snapshot.board());
        assert_eq!(&view.last_move, snapshot.last_move());
        assert_eq!(view.step_number, step);
        assert_eq!(view.history_length, snapshots.len());
        assert_eq!(view.next_player, Player::for_step(step));
    }
}

#[test]
fn test_rejected_moves_are_idempotent() {
    let mut game = new_game(3, 3);
    play(&mut game, &[4, 0]);
    let before = game.history().clone();

    for _ in 0..3 {
        game.commit_move(4).unwrap();
        game.commit_move(0).unwrap();
    }
    assert_eq!(game.history(), &before);
    assert_eq!(game.step_number(), 2);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.history().clone();

    game.commit_move(8).unwrap();
    assert_eq!(game.history(), &before);
    assert_eq!(game.step_number(), 5);
}

#[test]
fn test_moves_allowed_again_after_rewinding_a_win() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 3, 1, 4, 2]);
    game.jump_to(4).unwrap();
    assert_eq!(game.current_view().win_result.status, GameStatus::InProgress);

    game.commit_move(8).unwrap();
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.current_view().last_move.map(|m| m.cell_index()), Some(8));
}

#[test]
fn test_commit_grows_history_by_one() {
    let mut game = new_game(5, 4);
    for (i, cell) in [0, 24, 12, 7].into_iter().enumerate() {
        game.commit_move(cell).unwrap();
        assert_eq!(game.history().len(), i + 2);
        assert_eq!(game.step_number(), i + 1);
    }
}

#[test]
fn test_jump_then_commit_discards_future() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 4, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    assert_eq!(game.history().len(), 5);

    game.commit_move(6).unwrap();
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step_number(), 3);
    assert_eq!(game.current_view().board.get(8), Some(Square::Empty));
    assert_eq!(game.current_view().board.get(6), Some(Square::Occupied(Player::X)));
}

#[test]
fn test_jump_to_step_two_then_commit_gives_length_three() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 4]);
    game.jump_to(2).unwrap();
    game.commit_move(8).unwrap();
    assert_eq!(game.history().len(), 4);

    game.jump_to(1).unwrap();
    game.commit_move(5).unwrap();
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_occupied_cell_after_rewind_is_judged_at_cursor() {
    let mut game = new_game(3, 3);
    play(&mut game, &[0, 4]);
    game.jump_to(1).unwrap();
    // Cell 4 is filled at step 2 but empty at the cursor.
    game.commit_move(4).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_view().board.get(4), Some(Square::Occupied(Player::O)));
}

#[test]
fn test_contract_errors() {
    let mut game = new_game(3, 3);
    assert!(matches!(game.commit_move(9), Err(GameError::CellOutOfRange { .. })));
    assert!(matches!(game.jump_to(1), Err(GameError::StepOutOfRange { .. })));
    assert!(matches!(WinRule::new(3, 4), Err(GameError::InvalidRunLength { .. })));
}

#[test]
fn test_gomoku_diagonal_on_large_board() {
    let mut game = new_game(15, 5);
    // X on the "/" diagonal through (4, 10); O answers along row 14.
    let x_cells = [4 * 15 + 10, 5 * 15 + 9, 6 * 15 + 8, 7 * 15 + 7, 8 * 15 + 6];
    let o_cells = [14 * 15, 14 * 15 + 1, 14 * 15 + 2, 14 * 15 + 3];
    for i in 0..4 {
        game.commit_move(x_cells[i]).unwrap();
        game.commit_move(o_cells[i]).unwrap();
    }
    game.commit_move(x_cells[4]).unwrap();

    let view = game.current_view();
    assert_eq!(view.win_result.status, GameStatus::Won(Player::X));
    assert_eq!(view.win_result.winning_cells, x_cells.to_vec());
    assert!(EngineInvariants::check_all(&game).is_ok());
}

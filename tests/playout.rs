//! Whole-game checks driven through the public API.

use othello::{BOARD_SIZE, Board, Cell, Game, GameError, Grid, Player, Position};
use proptest::prelude::*;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn total_discs(board: &Board) -> u8 {
    let (black, white) = board.count_discs();
    black + white
}

/// Plays until the game ends or `picks` runs out, choosing among legal moves with `picks`.
fn play_out(game: &mut Game, picks: &[usize]) {
    for &pick in picks {
        if game.is_game_over() {
            break;
        }
        let moves = game.legal_moves();
        if moves.is_empty() {
            game.pass().unwrap();
            continue;
        }
        let mv = moves[pick % moves.len()];
        assert_eq!(game.play(mv.row as i32, mv.col as i32), Ok(true));
    }
}

#[test]
fn reset_after_play_restores_start() {
    init_tracing();
    let mut game = Game::new();
    play_out(&mut game, &[3, 1, 4, 1, 5, 9, 2, 6]);

    game.reset();

    let board = game.board();
    assert_eq!(*board, Board::new());
    assert_eq!(board.current_player(), Player::Black);
    assert_eq!(board.count_discs(), (2, 2));
    assert_eq!(
        board.get_valid_moves(Player::Black),
        vec![
            Position::new(2, 3),
            Position::new(3, 2),
            Position::new(4, 5),
            Position::new(5, 4)
        ]
    );
}

#[test]
fn first_move_game_plays_to_completion() {
    init_tracing();
    let mut game = Game::new();

    play_out(&mut game, &[0; 200]);

    assert!(game.is_game_over());
    assert!(game.board().is_game_over());
    assert_eq!(game.play(0, 0), Err(GameError::GameOver));
    let result = game.to_game_result();
    let expected = match game.winner() {
        Some(player) => player.code(),
        None => 0,
    };
    assert_eq!(result.winner, expected);
}

#[test]
fn black_wipeout_ends_game_early() {
    init_tracing();
    // e6 f4 e3 f6 g5 d6 e7 f5 c5: black captures every white disc.
    let moves = [(5, 4), (3, 5), (2, 4), (5, 5), (4, 6), (5, 3), (6, 4), (4, 5), (4, 2)];
    let mut game = Game::new();

    for (row, col) in moves {
        assert!(!game.is_game_over());
        assert_eq!(game.play(row, col), Ok(true), "move ({row}, {col})");
    }

    assert!(game.is_game_over());
    assert_eq!(game.board().count_discs(), (13, 0));
    assert_eq!(game.winner(), Some(Player::Black));
    assert!(game.board().empty_count() > 0);
}

#[test]
fn independent_games_do_not_share_state() {
    let mut first = Game::new();
    let second = Game::new();

    assert_eq!(first.play(2, 3), Ok(true));

    assert_eq!(first.board().count_discs(), (4, 1));
    assert_eq!(second.board().count_discs(), (2, 2));
}

#[test]
fn custom_position_supports_pass_then_move() {
    let mut grid: Grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    grid[0][0] = Cell::White;
    grid[0][1] = Cell::Black;
    let mut game = Game::from_board(Board::from_cells(grid, Player::Black));

    assert!(game.can_pass());
    game.pass().unwrap();
    assert_eq!(game.legal_moves(), vec![Position::new(0, 2)]);
    assert_eq!(game.play(0, 2), Ok(true));

    assert!(game.is_game_over());
    assert_eq!(game.board().count_discs(), (0, 3));
}

proptest! {
    #[test]
    fn random_playouts_keep_board_consistent(picks in prop::collection::vec(0usize..64, 0..80)) {
        let mut game = Game::new();
        let mut previous_total = total_discs(game.board());

        for pick in picks {
            if game.is_game_over() {
                prop_assert!(game.board().is_game_over());
                break;
            }

            let player = game.current_player();
            let moves = game.board().get_valid_moves(player);
            for mv in &moves {
                let flips = game.board().get_flippable_discs(mv.row as usize, mv.col as usize, player);
                prop_assert!(!flips.is_empty());
                let mut unique = flips.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), flips.len());
                for flip in flips {
                    prop_assert_eq!(game.board().cell(flip.row as usize, flip.col as usize), Cell::from(!player));
                }
            }

            if moves.is_empty() {
                prop_assert!(game.can_pass());
                game.pass().unwrap();
                prop_assert_eq!(game.current_player(), !player);
                prop_assert_eq!(total_discs(game.board()), previous_total);
                continue;
            }

            let mv = moves[pick % moves.len()];
            let (before_black, before_white) = game.board().count_discs();
            prop_assert_eq!(game.play(mv.row as i32, mv.col as i32), Ok(true));

            let flipped = game.flipped().len() as u8;
            prop_assert!(flipped >= 1);
            let (black, white) = game.board().count_discs();
            match player {
                Player::Black => {
                    prop_assert_eq!(black, before_black + flipped + 1);
                    prop_assert_eq!(white, before_white - flipped);
                }
                Player::White => {
                    prop_assert_eq!(white, before_white + flipped + 1);
                    prop_assert_eq!(black, before_black - flipped);
                }
            }

            let total = total_discs(game.board());
            prop_assert_eq!(total, previous_total + 1);
            previous_total = total;
        }
    }

    #[test]
    fn illegal_squares_never_change_the_board(row in 0i32..8, col in 0i32..8) {
        let mut game = Game::new();
        let legal = game.legal_moves().contains(&Position::new(row as u8, col as u8));
        let before = game.clone();

        let placed = game.play(row, col).unwrap();

        prop_assert_eq!(placed, legal);
        if !placed {
            prop_assert_eq!(game, before);
        }
    }
}

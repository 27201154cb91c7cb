//! Tetris scenarios: dropping, locking, clearing and topping out.

use arcade::arcade::Arcade;
use arcade::core::Position;
use arcade::games::tetris::{
    process_input, soft_drop, spawn_piece, start_game, tick_tetris, ActivePiece, DropOutcome,
    PieceColor, TetrisGame, TetrominoKind,
};
use arcade::games::{CellView, GameKind, Lifecycle, MinigameInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const GREY: PieceColor = PieceColor::rgb(128, 128, 128);

fn started(rng: &mut ChaCha8Rng, kind: TetrominoKind) -> TetrisGame {
    let mut game = TetrisGame::new();
    start_game(&mut game, rng);
    game.piece = Some(ActivePiece::spawn(kind, game.width()));
    game
}

fn fill_row_except(game: &mut TetrisGame, y: i16, gaps: &[i16]) {
    for x in 0..game.width() as i16 {
        if !gaps.contains(&x) {
            if let Some(cell) = game.board.get_mut(Position::new(x, y)) {
                *cell = Some(GREY);
            }
        }
    }
}

#[test]
fn test_o_piece_falls_to_the_floor_and_locks() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut game = started(&mut rng, TetrominoKind::O);
    assert_eq!(game.piece.as_ref().map(|p| p.x), Some(4));

    for _ in 0..18 {
        assert_eq!(soft_drop(&mut game, &mut rng), Some(DropOutcome::Moved));
    }
    assert_eq!(
        soft_drop(&mut game, &mut rng),
        Some(DropOutcome::Locked { lines: 0 })
    );

    let yellow = TetrominoKind::O.color();
    for (x, y) in [(4, 18), (5, 18), (4, 19), (5, 19)] {
        assert_eq!(game.board.get(Position::new(x, y)), Some(&Some(yellow)));
    }
    assert_eq!(game.score, 0);
    assert_eq!(game.pieces_locked, 1);
    assert!(game.piece.is_some(), "next piece spawned");
}

#[test]
fn test_two_rows_cleared_by_one_piece() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut game = started(&mut rng, TetrominoKind::O);
    fill_row_except(&mut game, 18, &[4, 5]);
    fill_row_except(&mut game, 19, &[4, 5]);
    fill_row_except(&mut game, 17, &[0, 4, 5]);

    let outcome = (0..25)
        .filter_map(|_| soft_drop(&mut game, &mut rng))
        .find(|o| *o != DropOutcome::Moved);
    assert_eq!(outcome, Some(DropOutcome::Locked { lines: 2 }));
    assert_eq!(game.score, 200);
    assert_eq!(game.lines_cleared, 2);

    // the partial row dropped to the floor
    assert_eq!(game.board.get(Position::new(0, 19)), Some(&None));
    assert_eq!(game.board.get(Position::new(4, 19)), Some(&None));
    assert_eq!(game.board.get(Position::new(1, 19)), Some(&Some(GREY)));
    assert!(game.board.row(18).iter().all(Option::is_none));
}

#[test]
fn test_walls_stop_sideways_moves() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = started(&mut rng, TetrominoKind::I);
    let mut moves = 0;
    while process_input(&mut game, MinigameInput::Left, &mut rng) {
        moves += 1;
    }
    assert_eq!(moves, 3);
    assert_eq!(game.piece.as_ref().map(|p| p.x), Some(0));

    while process_input(&mut game, MinigameInput::Right, &mut rng) {}
    assert_eq!(game.piece.as_ref().map(|p| p.x), Some(6));
}

#[test]
fn test_rotation_blocked_at_the_wall() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut game = started(&mut rng, TetrominoKind::I);

    // vertical I fits at the spawn row
    assert!(process_input(&mut game, MinigameInput::Up, &mut rng));
    let piece = game.piece.as_ref().map(|p| (p.shape.width(), p.shape.height()));
    assert_eq!(piece, Some((1, 4)));

    // pushed to the right wall, turning flat would stick out
    while process_input(&mut game, MinigameInput::Right, &mut rng) {}
    assert!(!process_input(&mut game, MinigameInput::Up, &mut rng));
}

#[test]
fn test_blocked_spawn_tops_out() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut game = started(&mut rng, TetrominoKind::O);
    fill_row_except(&mut game, 0, &[]);

    assert!(!spawn_piece(&mut game, TetrominoKind::T));
    let snap = game.snapshot();
    assert_eq!(snap.lifecycle, Lifecycle::GameOver);
    assert!(game.piece.is_none());
    assert_eq!(soft_drop(&mut game, &mut rng), None);
}

#[test]
fn test_gravity_drops_once_per_second() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    let mut game = started(&mut rng, TetrominoKind::T);
    assert!(!tick_tetris(&mut game, 500, &mut rng));
    assert!(tick_tetris(&mut game, 500, &mut rng));
    assert_eq!(game.piece.as_ref().map(|p| p.y), Some(1));

    let snap = game.snapshot();
    assert_eq!(
        snap.cell(Position::new(5, 1)),
        Some(CellView::Falling(TetrominoKind::T.color()))
    );
}

#[test]
fn test_arcade_plays_until_top_out() {
    let mut arcade = Arcade::new(80, "Tester", StdRng::seed_from_u64(9));
    arcade.open(GameKind::Tetris);
    assert!(arcade.handle_game_input(MinigameInput::Primary));
    assert_eq!(arcade.balance(), 5);

    // hard-drop everything straight down the middle
    for _ in 0..2_000 {
        if !arcade.is_playing(GameKind::Tetris) {
            break;
        }
        arcade.handle_game_input(MinigameInput::Down);
    }
    assert_eq!(
        arcade.snapshot(GameKind::Tetris).lifecycle,
        Lifecycle::GameOver
    );
    assert!(arcade.tetris.pieces_locked > 0);

    assert!(arcade.handle_game_input(MinigameInput::Primary));
    assert_eq!(arcade.balance(), 0);
    assert!(!arcade.tetris.board.rows().flatten().any(|c| c.is_some()));
}

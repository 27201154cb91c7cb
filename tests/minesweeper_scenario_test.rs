//! Minesweeper scenarios on the standard 16x16 board with 40 mines.

use arcade::core::Position;
use arcade::games::minesweeper::{
    process_input, reveal, start_game, tick_minesweeper, toggle_flag, BoardSpec, Cell,
    MinesweeperGame,
};
use arcade::games::{CellView, Lifecycle, MinigameInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn started(seed: u64) -> MinesweeperGame {
    let mut game = MinesweeperGame::new(BoardSpec::default());
    start_game(&mut game, &mut ChaCha8Rng::seed_from_u64(seed));
    game
}

fn find(game: &MinesweeperGame, wanted: impl Fn(&Cell) -> bool) -> Position {
    game.board
        .iter()
        .find(|&(_, cell)| wanted(cell))
        .map(|(pos, _)| pos)
        .expect("seeded board has such a cell")
}

fn revealed_count(game: &MinesweeperGame) -> usize {
    game.board.iter().filter(|(_, c)| c.is_revealed).count()
}

#[test]
fn test_standard_board_layout() {
    let game = started(11);
    assert_eq!(game.board.width(), 16);
    assert_eq!(game.board.height(), 16);
    assert_eq!(game.board.iter().filter(|(_, c)| c.is_mine).count(), 40);
    assert_eq!(game.hidden_safe_cells(), 216);

    // every count matches its neighbourhood
    for (pos, cell) in game.board.iter().filter(|(_, c)| !c.is_mine) {
        let mines = game
            .board
            .neighbors(pos)
            .into_iter()
            .filter(|&n| game.board.get(n).is_some_and(|c| c.is_mine))
            .count();
        assert_eq!(usize::from(cell.neighbor_mines), mines);
    }
}

#[test]
fn test_zero_cell_cascades_without_touching_mines() {
    let mut game = started(12);
    let zero = find(&game, |c| !c.is_mine && c.neighbor_mines == 0);

    assert!(reveal(&mut game, zero));
    assert!(revealed_count(&game) > 1);
    assert!(game.board.iter().all(|(_, c)| !(c.is_mine && c.is_revealed)));

    // every revealed zero has all its neighbours revealed
    for (pos, cell) in game.board.iter() {
        if cell.is_revealed && cell.neighbor_mines == 0 {
            for n in game.board.neighbors(pos) {
                assert!(game.board.get(n).is_some_and(|c| c.is_revealed));
            }
        }
    }
}

#[test]
fn test_numbered_cell_reveals_only_itself() {
    let mut game = started(13);
    let numbered = find(&game, |c| !c.is_mine && c.neighbor_mines > 0);

    assert!(reveal(&mut game, numbered));
    assert_eq!(revealed_count(&game), 1);
    assert!(!reveal(&mut game, numbered), "already revealed");
}

#[test]
fn test_flag_blocks_reveal() {
    let mut game = started(14);
    let mine = find(&game, |c| c.is_mine);

    assert!(toggle_flag(&mut game, mine));
    assert_eq!(game.flags_placed, 1);
    assert!(!reveal(&mut game, mine));
    assert_eq!(game.snapshot().lifecycle, Lifecycle::Playing);

    assert!(toggle_flag(&mut game, mine));
    assert_eq!(game.flags_placed, 0);
}

#[test]
fn test_mine_hit_loses_and_exposes_mines() {
    let mut game = started(15);
    let mine = find(&game, |c| c.is_mine);

    assert!(reveal(&mut game, mine));
    let snap = game.snapshot();
    assert_eq!(snap.lifecycle, Lifecycle::GameOver);
    assert_eq!(snap.cell(mine), Some(CellView::Mine));
    assert_eq!(
        snap.cells
            .iter()
            .flatten()
            .filter(|&&v| v == CellView::Mine)
            .count(),
        40
    );

    // frozen once over
    let other = find(&game, |c| !c.is_mine && !c.is_revealed);
    assert!(!reveal(&mut game, other));
    assert!(!tick_minesweeper(&mut game, 5_000));
}

#[test]
fn test_revealing_every_safe_cell_wins() {
    let mut game = started(16);
    let safe: Vec<Position> = game
        .board
        .iter()
        .filter(|(_, c)| !c.is_mine)
        .map(|(pos, _)| pos)
        .collect();
    assert_eq!(safe.len(), 216);

    for pos in safe {
        reveal(&mut game, pos);
    }
    assert_eq!(game.hidden_safe_cells(), 0);
    assert_eq!(game.snapshot().lifecycle, Lifecycle::Won);
}

#[test]
fn test_clock_counts_whole_seconds() {
    let mut game = started(17);
    assert!(!tick_minesweeper(&mut game, 500));
    assert!(!tick_minesweeper(&mut game, 499));
    assert!(tick_minesweeper(&mut game, 1));
    assert_eq!(game.elapsed_secs, 1);

    // a stalled frame still counts every second that passed
    assert!(tick_minesweeper(&mut game, 61_000));
    assert_eq!(game.elapsed_secs, 62);
    assert_eq!(game.clock_display(), "1:02");
}

#[test]
fn test_cursor_keys_and_reveal_at_cursor() {
    let mut game = started(18);
    assert_eq!(game.cursor, Position::new(8, 8));
    game.cursor = Position::new(0, 0);
    process_input(&mut game, MinigameInput::Up);
    process_input(&mut game, MinigameInput::Left);
    assert_eq!(game.cursor, Position::new(0, 0), "cursor stays on the board");

    process_input(&mut game, MinigameInput::Right);
    process_input(&mut game, MinigameInput::Down);
    assert_eq!(game.cursor, Position::new(1, 1));

    process_input(&mut game, MinigameInput::Secondary);
    assert_eq!(game.snapshot().cell(Position::new(1, 1)), Some(CellView::Flagged));
}

//! Minesweeper logic: board generation, reveal/flood fill, flags and clock.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{BoardSpec, Cell, MinesweeperGame};
use crate::core::{Grid, Position};
use crate::games::{MinigameInput, Outcome, Phase};

/// Build a fresh board: mines placed uniformly without replacement, then
/// neighbour counts precomputed.
pub fn generate_board<R: Rng>(spec: BoardSpec, rng: &mut R) -> Grid<Cell> {
    let mut board = Grid::new(spec.width, spec.height, Cell::default());
    place_mines(&mut board, spec.effective_mines(), rng);
    calculate_neighbor_counts(&mut board);
    board
}

/// Mark `count` distinct random cells as mines.
pub fn place_mines<R: Rng>(board: &mut Grid<Cell>, count: usize, rng: &mut R) {
    let mut positions: Vec<Position> = board.positions().collect();
    positions.shuffle(rng);
    for pos in positions.into_iter().take(count) {
        if let Some(cell) = board.get_mut(pos) {
            cell.is_mine = true;
        }
    }
}

/// For each non-mine cell, count the mines among its Moore neighbours.
pub fn calculate_neighbor_counts(board: &mut Grid<Cell>) {
    let positions: Vec<Position> = board.positions().collect();
    for pos in positions {
        if board.get(pos).is_some_and(|c| c.is_mine) {
            continue;
        }
        let count = board
            .neighbors(pos)
            .into_iter()
            .filter(|&n| board.get(n).is_some_and(|c| c.is_mine))
            .count() as u8;
        if let Some(cell) = board.get_mut(pos) {
            cell.neighbor_mines = count;
        }
    }
}

/// Build a new board and begin a run. The entry fee is charged by the caller.
pub fn start_game<R: Rng>(game: &mut MinesweeperGame, rng: &mut R) {
    game.board = generate_board(game.spec, rng);
    game.flags_placed = 0;
    game.elapsed_secs = 0;
    game.detonated = None;
    game.phase = Phase::playing_wall_clock(game.clock_ms());
    log::info!(
        "minesweeper: run started ({}x{}, {} mines)",
        game.spec.width,
        game.spec.height,
        game.total_mines()
    );
}

/// Reveal the cell at `pos`. Returns true if anything changed.
///
/// - No-op unless playing, or if the cell is off-board, revealed or flagged.
/// - A mine is exposed and ends the game; nothing else is revealed.
/// - A zero cell flood-fills its connected zero region plus its numbered border.
/// - Clearing the last safe cell wins.
pub fn reveal(game: &mut MinesweeperGame, pos: Position) -> bool {
    if !game.phase.is_playing() {
        return false;
    }
    let Some(cell) = game.board.get(pos).copied() else {
        return false;
    };
    if cell.is_revealed || cell.is_flagged {
        return false;
    }

    if cell.is_mine {
        if let Some(c) = game.board.get_mut(pos) {
            c.is_revealed = true;
        }
        game.detonated = Some(pos);
        game.phase = Phase::Over(Outcome::GameOver);
        log::info!(
            "minesweeper: mine hit at ({}, {}) after {}s",
            pos.x,
            pos.y,
            game.elapsed_secs
        );
        return true;
    }

    flood_fill_reveal(&mut game.board, pos);
    check_win_condition(game);
    true
}

/// Reveal `start` and, while the revealed cells have no neighbouring mines,
/// keep revealing outward.
///
/// Uses an explicit stack; `is_revealed` doubles as the visited set, so every
/// cell is pushed at most once. Mines and flagged cells are never revealed.
pub fn flood_fill_reveal(board: &mut Grid<Cell>, start: Position) {
    let mut stack = Vec::new();
    if let Some(cell) = board.get_mut(start) {
        if cell.is_revealed || cell.is_flagged || cell.is_mine {
            return;
        }
        cell.is_revealed = true;
        if cell.neighbor_mines == 0 {
            stack.push(start);
        }
    }

    while let Some(pos) = stack.pop() {
        for n in board.neighbors(pos) {
            let Some(neighbor) = board.get_mut(n) else {
                continue;
            };
            if neighbor.is_revealed || neighbor.is_flagged || neighbor.is_mine {
                continue;
            }
            neighbor.is_revealed = true;
            if neighbor.neighbor_mines == 0 {
                stack.push(n);
            }
        }
    }
}

/// Toggle the flag at `pos`. Returns true if the flag changed.
///
/// Revealed cells cannot be flagged; the counter may exceed the mine count.
pub fn toggle_flag(game: &mut MinesweeperGame, pos: Position) -> bool {
    if !game.phase.is_playing() {
        return false;
    }
    let Some(cell) = game.board.get_mut(pos) else {
        return false;
    };
    if cell.is_revealed {
        return false;
    }

    cell.is_flagged = !cell.is_flagged;
    if cell.is_flagged {
        game.flags_placed += 1;
    } else {
        game.flags_placed = game.flags_placed.saturating_sub(1);
    }
    true
}

/// Win condition: every non-mine cell is revealed.
pub fn check_win_condition(game: &mut MinesweeperGame) {
    if game.phase.is_playing() && game.hidden_safe_cells() == 0 {
        game.phase = Phase::Over(Outcome::Won);
        log::info!("minesweeper: board cleared in {}", game.clock_display());
    }
}

/// Advance the clock. Returns true if a second elapsed.
pub fn tick_minesweeper(game: &mut MinesweeperGame, dt_ms: u64) -> bool {
    let secs = game.phase.advance(dt_ms);
    game.elapsed_secs += secs;
    secs > 0
}

/// Process a key input during an active game. Returns true if state changed.
pub fn process_input(game: &mut MinesweeperGame, input: MinigameInput) -> bool {
    if !game.phase.is_playing() {
        return false;
    }
    let cursor = game.cursor;
    match input {
        MinigameInput::Up => game.move_cursor(0, -1),
        MinigameInput::Down => game.move_cursor(0, 1),
        MinigameInput::Left => game.move_cursor(-1, 0),
        MinigameInput::Right => game.move_cursor(1, 0),
        MinigameInput::Primary => return reveal(game, cursor),
        MinigameInput::Secondary => return toggle_flag(game, cursor),
        MinigameInput::Cancel | MinigameInput::Other => return false,
    }
    true
}

/// Abandon the current run (leaving the screen).
pub fn abandon(game: &mut MinesweeperGame) {
    if game.phase.is_playing() {
        log::info!("minesweeper: run abandoned after {}s", game.elapsed_secs);
        game.phase = Phase::Idle;
    }
}

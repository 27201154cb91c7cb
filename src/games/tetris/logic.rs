//! Tetris logic: collision checks, movement, locking and line clears.

use rand::Rng;

use super::types::*;
use crate::core::{Position, POINTS_PER_LINE};
use crate::games::{MinigameInput, Outcome, Phase};

/// What a single downward step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row.
    Moved,
    /// The piece locked, `lines` rows were cleared and a new piece spawned.
    Locked { lines: u32 },
    /// The piece locked but the next piece had no room: game over.
    ToppedOut { lines: u32 },
}

/// Whether `shape` at `(x, y)` lies inside the board and over empty cells only.
pub fn is_valid_position(board: &Board, shape: &Shape, x: i16, y: i16) -> bool {
    shape.filled().all(|(dx, dy)| {
        matches!(board.get(Position::new(x + dx, y + dy)), Some(None))
    })
}

/// Clear the board and begin a run. The entry fee is charged by the caller.
pub fn start_game<R: Rng>(game: &mut TetrisGame, rng: &mut R) {
    game.board = empty_board();
    game.score = 0;
    game.lines_cleared = 0;
    game.pieces_locked = 0;
    game.piece = None;
    game.phase = Phase::playing(game.gravity_ms);
    log::info!("tetris: run started");
    spawn_piece(game, TetrominoKind::random(rng));
}

/// Put a new piece of `kind` at the top. Ends the run if it overlaps the stack.
///
/// Returns true if the piece fit.
pub fn spawn_piece(game: &mut TetrisGame, kind: TetrominoKind) -> bool {
    let piece = ActivePiece::spawn(kind, game.width());
    if !is_valid_position(&game.board, &piece.shape, piece.x, piece.y) {
        end_run(game);
        return false;
    }
    game.piece = Some(piece);
    true
}

/// Shift the falling piece sideways by `dx` columns. Returns true if it moved.
pub fn move_horizontal(game: &mut TetrisGame, dx: i16) -> bool {
    if !game.phase.is_playing() {
        return false;
    }
    let Some(piece) = game.piece.as_mut() else {
        return false;
    };
    if !is_valid_position(&game.board, &piece.shape, piece.x + dx, piece.y) {
        return false;
    }
    piece.x += dx;
    true
}

/// Rotate the falling piece clockwise in place. No wall kicks.
pub fn rotate(game: &mut TetrisGame) -> bool {
    if !game.phase.is_playing() {
        return false;
    }
    let Some(piece) = game.piece.as_mut() else {
        return false;
    };
    let rotated = piece.shape.rotate_clockwise();
    if !is_valid_position(&game.board, &rotated, piece.x, piece.y) {
        return false;
    }
    piece.shape = rotated;
    true
}

/// Move the falling piece down one row, locking it if it cannot move.
///
/// Gravity and the down key both go through here. Returns `None` unless playing.
pub fn soft_drop<R: Rng>(game: &mut TetrisGame, rng: &mut R) -> Option<DropOutcome> {
    if !game.phase.is_playing() {
        return None;
    }
    let piece = game.piece.as_mut()?;
    if is_valid_position(&game.board, &piece.shape, piece.x, piece.y + 1) {
        piece.y += 1;
        return Some(DropOutcome::Moved);
    }

    let lines = lock_piece(game);
    if spawn_piece(game, TetrominoKind::random(rng)) {
        Some(DropOutcome::Locked { lines })
    } else {
        Some(DropOutcome::ToppedOut { lines })
    }
}

/// Write the falling piece into the board, clear full rows and score them.
///
/// Returns the number of rows cleared.
pub fn lock_piece(game: &mut TetrisGame) -> u32 {
    let Some(piece) = game.piece.take() else {
        return 0;
    };
    for pos in piece.cells() {
        if let Some(cell) = game.board.get_mut(pos) {
            *cell = Some(piece.color);
        }
    }
    game.pieces_locked += 1;

    let lines = clear_lines(&mut game.board);
    if lines > 0 {
        game.score += POINTS_PER_LINE * lines;
        game.lines_cleared += lines;
        log::debug!("tetris: cleared {} line(s), score {}", lines, game.score);
    }
    lines
}

/// Remove every full row, dropping the rows above. Returns the count removed.
///
/// Scans bottom to top; after a removal the same index holds the row that was
/// above it, so the index is checked again before moving up.
pub fn clear_lines(board: &mut Board) -> u32 {
    let mut cleared = 0;
    let mut y = board.height();
    while y > 0 {
        let row = y - 1;
        if board.row(row).iter().all(Option::is_some) {
            board.collapse_row(row, None);
            cleared += 1;
        } else {
            y -= 1;
        }
    }
    cleared
}

/// Apply gravity for `dt_ms` of wall-clock time. Returns true if anything changed.
pub fn tick_tetris<R: Rng>(game: &mut TetrisGame, dt_ms: u64, rng: &mut R) -> bool {
    let steps = game.phase.advance(dt_ms);
    let mut changed = false;
    for _ in 0..steps {
        if soft_drop(game, rng).is_none() {
            break;
        }
        changed = true;
    }
    changed
}

/// Process a key input during an active game. Returns true if state changed.
pub fn process_input<R: Rng>(game: &mut TetrisGame, input: MinigameInput, rng: &mut R) -> bool {
    match input {
        MinigameInput::Left => move_horizontal(game, -1),
        MinigameInput::Right => move_horizontal(game, 1),
        MinigameInput::Up => rotate(game),
        MinigameInput::Down => soft_drop(game, rng).is_some(),
        _ => false,
    }
}

/// Abandon the current run (leaving the screen).
pub fn abandon(game: &mut TetrisGame) {
    if game.phase.is_playing() {
        log::info!("tetris: run abandoned at score {}", game.score);
        game.phase = Phase::Idle;
        game.piece = None;
    }
}

fn end_run(game: &mut TetrisGame) {
    game.phase = Phase::Over(Outcome::GameOver);
    game.piece = None;
    log::info!(
        "tetris: game over, score {} ({} lines, {} pieces)",
        game.score,
        game.lines_cleared,
        game.pieces_locked
    );
}

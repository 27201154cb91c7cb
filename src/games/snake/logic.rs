//! Snake game logic: movement, input processing, collision detection.

use super::types::*;
use crate::games::{MinigameInput, Outcome, Phase};
use rand::Rng;

/// What a single movement step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    Moved,
    Ate,
    Crashed,
}

/// Reset the board and begin a run. The entry fee is charged by the caller.
pub fn start_game<R: Rng>(game: &mut SnakeGame, rng: &mut R) {
    game.reset_board(rng);
    game.phase = Phase::playing(game.step_ms);
    log::info!("snake: run started");
}

/// Change heading. Ignored unless playing or if `direction` reverses the snake.
pub fn set_direction(game: &mut SnakeGame, direction: Direction) -> bool {
    if !game.phase.is_playing() || direction == game.direction.opposite() {
        return false;
    }
    game.direction = direction;
    true
}

/// Process player input. Returns true if the heading changed.
pub fn process_input(game: &mut SnakeGame, input: MinigameInput) -> bool {
    let direction = match input {
        MinigameInput::Up => Direction::Up,
        MinigameInput::Down => Direction::Down,
        MinigameInput::Left => Direction::Left,
        MinigameInput::Right => Direction::Right,
        _ => return false,
    };
    set_direction(game, direction)
}

/// Advance Snake by `dt_ms` of wall-clock time. Returns true if the game state changed.
pub fn tick_snake<R: Rng>(game: &mut SnakeGame, dt_ms: u64, rng: &mut R) -> bool {
    let steps = game.phase.advance(dt_ms);
    let mut changed = false;
    for _ in 0..steps {
        if !game.phase.is_playing() {
            break;
        }
        step_snake(game, rng);
        changed = true;
    }
    changed
}

/// Single movement step. No-op unless playing.
pub fn step_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> Option<StepEvent> {
    if !game.phase.is_playing() {
        return None;
    }
    game.steps += 1;

    let (dx, dy) = game.direction.delta();
    let new_head = game.head().offset(dx, dy);

    // Walls, then any body segment (the tail included; it has not moved yet)
    if !new_head.in_bounds(game.grid_width, game.grid_height) || game.snake.contains(&new_head) {
        end_run(game);
        return Some(StepEvent::Crashed);
    }

    game.snake.push_front(new_head);

    if new_head == game.food {
        game.score += 1;
        game.food = spawn_food(game, rng);
        Some(StepEvent::Ate)
    } else {
        game.snake.pop_back();
        Some(StepEvent::Moved)
    }
}

/// Abandon the current run (leaving the screen). The fee is not refunded.
pub fn abandon(game: &mut SnakeGame) {
    if game.phase.is_playing() {
        log::info!("snake: run abandoned at score {}", game.score);
        game.phase = Phase::Idle;
    }
}

fn end_run(game: &mut SnakeGame) {
    game.phase = Phase::Over(Outcome::GameOver);
    let name = game.player_name.clone();
    game.new_high_score = game.leaderboard.submit(&name, game.score);
    log::info!(
        "snake: game over, score {} after {} steps{}",
        game.score,
        game.steps,
        if game.new_high_score {
            " (leaderboard)"
        } else {
            ""
        }
    );
}

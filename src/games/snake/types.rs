//! Snake game data structures.

use crate::core::{
    Leaderboard, Position, ScoreEntry, DEFAULT_PLAYER_NAME, LEADERBOARD_SIZE, SNAKE_GRID_SIZE,
    SNAKE_ORIGIN, SNAKE_STEP_MS,
};
use crate::games::Phase;
use rand::Rng;
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub phase: Phase,

    pub grid_width: usize,
    pub grid_height: usize,

    /// Body segments, head first.
    pub snake: VecDeque<Position>,
    /// Direction applied on the next step.
    pub direction: Direction,
    pub food: Position,

    pub score: u32,
    /// Movement steps taken this run.
    pub steps: u64,
    /// Movement interval in milliseconds.
    pub step_ms: u64,

    pub leaderboard: Leaderboard,
    /// Name recorded on the leaderboard.
    pub player_name: String,
    /// Set when the last finished run made the leaderboard.
    pub new_high_score: bool,
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeGame {
    /// An idle game showing the starting snake, waiting for a paid start.
    pub fn new() -> Self {
        let mut snake = VecDeque::new();
        snake.push_back(origin());
        Self {
            phase: Phase::Idle,
            grid_width: SNAKE_GRID_SIZE,
            grid_height: SNAKE_GRID_SIZE,
            snake,
            direction: Direction::Right,
            food: Position::new(15, 15),
            score: 0,
            steps: 0,
            step_ms: SNAKE_STEP_MS,
            leaderboard: default_leaderboard(),
            player_name: DEFAULT_PLAYER_NAME.to_string(),
            new_high_score: false,
        }
    }

    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    /// Put the snake back at the origin with fresh food and a zero score.
    pub fn reset_board<R: Rng>(&mut self, rng: &mut R) {
        self.snake.clear();
        self.snake.push_back(origin());
        self.direction = Direction::Right;
        self.food = spawn_food(self, rng);
        self.score = 0;
        self.steps = 0;
        self.new_high_score = false;
    }
}

fn origin() -> Position {
    Position::new(SNAKE_ORIGIN.0, SNAKE_ORIGIN.1)
}

/// The table every session starts with.
pub fn default_leaderboard() -> Leaderboard {
    Leaderboard::new(
        LEADERBOARD_SIZE,
        vec![
            ScoreEntry::new("Player 1", 25),
            ScoreEntry::new("Player 2", 18),
            ScoreEntry::new("Player 3", 15),
        ],
    )
}

/// Pick a uniformly random cell for food.
///
/// The snake's own cells are not excluded, so food can appear under the body.
pub fn spawn_food<R: Rng>(game: &SnakeGame, rng: &mut R) -> Position {
    let x = rng.gen_range(0..game.grid_width) as i16;
    let y = rng.gen_range(0..game.grid_height) as i16;
    Position::new(x, y)
}

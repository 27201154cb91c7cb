// Frame loop
pub const FRAME_POLL_MS: u64 = 50;

// Economy
pub const STARTING_BALANCE: i64 = 85;
pub const PLAY_COST: u32 = 5;
pub const MINESWEEPER_UNLOCK_COST: u32 = 50;
pub const TETRIS_UNLOCK_COST: u32 = 75;

// Snake
pub const SNAKE_GRID_SIZE: usize = 20;
pub const SNAKE_ORIGIN: (i16, i16) = (10, 10);
pub const SNAKE_STEP_MS: u64 = 100;
pub const LEADERBOARD_SIZE: usize = 5;

// Minesweeper
pub const MINESWEEPER_GRID_SIZE: usize = 16;
pub const MINES_COUNT: usize = 40;
pub const MINESWEEPER_CLOCK_MS: u64 = 1000;

// Tetris
pub const TETRIS_WIDTH: usize = 10;
pub const TETRIS_HEIGHT: usize = 20;
pub const TETRIS_GRAVITY_MS: u64 = 1000;
pub const POINTS_PER_LINE: u32 = 100;

// Default player label for leaderboard entries
pub const DEFAULT_PLAYER_NAME: &str = "You";

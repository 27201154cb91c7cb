//! The three arcade minigames: Snake, Minesweeper and Tetris.
//!
//! Each engine is a small deterministic state machine driven by two sources:
//! discrete player input applied immediately, and a fixed-cadence tick fed by
//! the main loop. Neither source can fail; illegal moves are silently ignored
//! and "failure" is a terminal [`Phase::Over`].

pub mod minesweeper;
pub mod projection;
pub mod snake;
pub mod tetris;

pub use minesweeper::MinesweeperGame;
pub use projection::{CellView, Lifecycle, Snapshot};
pub use snake::SnakeGame;
pub use tetris::TetrisGame;

use crate::core::Ticker;
use serde::{Deserialize, Serialize};

/// Which minigame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Snake,
    Minesweeper,
    Tetris,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::Minesweeper, GameKind::Tetris];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Snake)
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Minesweeper => "Minesweeper",
            Self::Tetris => "Tetris",
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Won,
}

/// Engine lifecycle. The tick clock lives inside `Playing` and nowhere else,
/// so leaving `Playing` stops the clock by dropping it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing(Ticker),
    Over(Outcome),
}

impl Phase {
    pub fn playing(interval_ms: u64) -> Self {
        Phase::Playing(Ticker::new(interval_ms))
    }

    /// Playing with an unclamped clock, for games that count real time.
    pub fn playing_wall_clock(interval_ms: u64) -> Self {
        Phase::Playing(Ticker::wall_clock(interval_ms))
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing(_))
    }

    pub fn ticker_mut(&mut self) -> Option<&mut Ticker> {
        match self {
            Phase::Playing(ticker) => Some(ticker),
            _ => None,
        }
    }

    /// Advance the clock by `dt_ms`; zero steps unless playing.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        self.ticker_mut().map_or(0, |t| t.advance(dt_ms))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            Phase::Idle => Lifecycle::Idle,
            Phase::Playing(_) => Lifecycle::Playing,
            Phase::Over(Outcome::GameOver) => Lifecycle::GameOver,
            Phase::Over(Outcome::Won) => Lifecycle::Won,
        }
    }
}

/// UI-agnostic input actions shared by all minigames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinigameInput {
    Up,
    Down,
    Left,
    Right,
    Primary,   // Space/Enter
    Secondary, // F/X
    Cancel,    // Esc
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_only_ticks_while_playing() {
        let mut phase = Phase::Idle;
        assert_eq!(phase.advance(1000), 0);

        phase = Phase::playing(100);
        assert_eq!(phase.advance(300), 3);

        phase = Phase::Over(Outcome::GameOver);
        assert_eq!(phase.advance(300), 0);
        assert!(phase.ticker_mut().is_none());
    }

    #[test]
    fn test_lifecycle_mapping() {
        assert_eq!(Phase::Idle.lifecycle(), Lifecycle::Idle);
        assert_eq!(Phase::playing(10).lifecycle(), Lifecycle::Playing);
        assert_eq!(Phase::Over(Outcome::GameOver).lifecycle(), Lifecycle::GameOver);
        assert_eq!(Phase::Over(Outcome::Won).lifecycle(), Lifecycle::Won);
    }

    #[test]
    fn test_game_kind_index_roundtrip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_index(kind.index()), kind);
        }
        assert_eq!(GameKind::from_index(99), GameKind::Snake);
    }
}

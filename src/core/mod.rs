//! Building blocks shared by every minigame: board model, economy, clock, scores.

pub mod constants;
pub mod economy;
pub mod grid;
pub mod leaderboard;
pub mod ticker;

pub use constants::*;
pub use economy::{Charge, EntryFee, Unlock, Wallet};
pub use grid::{Grid, Position};
pub use leaderboard::{Leaderboard, ScoreEntry};
pub use ticker::Ticker;

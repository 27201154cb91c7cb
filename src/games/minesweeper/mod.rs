//! Minesweeper: clear a mined board using the neighbour counts.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

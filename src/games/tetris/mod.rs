//! Tetris: stack falling tetrominoes and clear full rows.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

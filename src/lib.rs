//! Binbucks Arcade - Snake, Minesweeper and Tetris in the terminal.
//!
//! Every game is gated behind a shared virtual-currency wallet. The engines
//! are exposed here for testing; the binary only wires them to a terminal.

pub mod arcade;
pub mod build_info;
pub mod core;
pub mod error;
pub mod games;
pub mod input;
pub mod ui;
pub mod utils;

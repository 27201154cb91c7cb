//! Snake: steer a growing snake around a walled board to eat food.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

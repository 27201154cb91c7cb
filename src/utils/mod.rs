//! Ambient plumbing: config, logging and the ~/.binbucks/ directory.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::{config_path, ArcadeConfig, ConfigOverrides};

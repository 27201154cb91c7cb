//! Errors for the parts of the arcade that touch the outside world.
//!
//! The game engines never fail; illegal moves are ignored and losing is a
//! state. Only configuration, the filesystem, logger setup and the terminal
//! can produce an [`ArcadeError`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArcadeError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("logger already initialized: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, ArcadeError>;

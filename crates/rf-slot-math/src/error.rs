//! Error types for slot math loading

use thiserror::Error;

/// Errors raised while building a game definition
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Unknown symbol token: {0:?}")]
    UnknownSymbol(String),

    #[error("Expected {expected} reels, found {found}")]
    ReelCount { expected: usize, found: usize },

    #[error("Reel {0} has no symbols")]
    EmptyReel(usize),

    #[error("Invalid free game rules: {0}")]
    InvalidFreeGame(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias
pub type SlotResult<T> = Result<T, SlotError>;

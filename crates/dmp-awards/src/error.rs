//! Error types for the batch runner and CLI.

use award_match_core::MatchError;
use thiserror::Error;

/// Runner error type.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Matching or collaborator error
    #[error(transparent)]
    Match(#[from] MatchError),
}

/// Result type alias using the runner Error.
pub type Result<T> = std::result::Result<T, Error>;

//! Matching error types

use thiserror::Error;

/// Errors surfaced by the matching core and its collaborators.
///
/// Scoring itself never fails: missing text collapses to a fallback score or
/// the candidate is skipped. These variants exist for the fallible entry points
/// and for collaborator implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// A required text field was absent
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A collaborator (award search, registrar, processed set) failed
    #[error("collaborator error: {0}")]
    Collaborator(String),
}

/// Result type for matching operations
pub type MatchResult<T> = Result<T, MatchError>;

//! Error types for the caltask ecosystem.

use thiserror::Error;

/// Errors that can occur in caltask core operations.
///
/// Transport-level failures stay in the CLI layer; the core only ever
/// fails on malformed feed documents or payload serialization.
#[derive(Error, Debug)]
pub enum CalTaskError {
    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for caltask operations.
pub type CalTaskResult<T> = Result<T, CalTaskError>;

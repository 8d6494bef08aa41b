//! Error types for targeting lookups.

use thiserror::Error;

/// Result type for targeting operations.
pub type TargetingResult<T> = Result<T, TargetingError>;

/// Errors raised when resolving catalog ids.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetingError {
    /// The id names no area-of-effect shape.
    #[error("unknown shape: {0}")]
    UnknownShape(String),

    /// The id names no targeting type.
    #[error("unknown targeting type: {0}")]
    UnknownTargetingType(String),
}

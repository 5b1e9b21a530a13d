//! Error types for policy template handling
//!
//! Rule evaluation errors are [`aegis_match::MatchError`] values and pass
//! through this crate unchanged; the errors defined here cover the wire
//! format only.

use thiserror::Error;

/// Policy template error types.
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The serialized template violated the wire format
    #[error("malformed policy template: {0}")]
    Parse(#[source] serde_json::Error),

    /// The template could not be serialized
    #[error("failed to serialize policy template: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for policy template operations.
pub type PolicyResult<T> = Result<T, PolicyError>;

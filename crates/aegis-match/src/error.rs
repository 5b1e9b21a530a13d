//! Error types for matcher evaluation
//!
//! Matchers are constructed infallibly; everything that can go wrong
//! surfaces when a subject is actually tested.

use thiserror::Error;

/// Matcher evaluation error types.
///
/// Glob and exact matchers never fail. Regex matchers defer pattern
/// compilation to evaluation time, so a bad pattern is reported here
/// rather than at construction.
#[derive(Debug, Error)]
pub enum MatchError {
    /// The regular expression failed to compile or execute
    #[error("invalid regular expression: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type for matcher evaluation.
pub type MatchResult<T> = Result<T, MatchError>;

//! # Matcher
//!
//! The core matching capability: a predicate over a single string.
//! Everything else in this crate is either an implementation of this
//! trait or a combinator over it.

use crate::error::MatchResult;

/// A predicate over a single subject string.
///
/// Implementors are immutable values: once constructed, a matcher may be
/// shared and invoked from any number of threads without locking.
///
/// # Example
///
/// ```
/// use aegis_match::{GlobMatcher, Matcher};
///
/// let matcher = GlobMatcher::new("/docs/*");
/// assert!(matcher.matches("/docs/report.pdf").unwrap());
/// assert!(!matcher.matches("/audit/report.pdf").unwrap());
/// ```
pub trait Matcher: Send + Sync {
    /// Test a subject against this matcher's pattern.
    ///
    /// # Arguments
    ///
    /// * `subject` - The string to test
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the subject matches, `Ok(false)` if it doesn't, or an
    /// error if the underlying pattern could not be evaluated.
    fn matches(&self, subject: &str) -> MatchResult<bool>;
}

/// A boxed matcher trait object, usable wherever a concrete matcher is.
pub type BoxedMatcher = Box<dyn Matcher>;

/// Any plain function or closure over a subject string is a matcher.
///
/// This keeps custom one-off rules lightweight:
///
/// ```
/// use aegis_match::{MatchResult, Matcher};
///
/// let starts_upper = |subject: &str| -> MatchResult<bool> {
///     Ok(subject.starts_with(char::is_uppercase))
/// };
/// assert!(starts_upper.matches("Admin").unwrap());
/// ```
impl<F> Matcher for F
where
    F: Fn(&str) -> MatchResult<bool> + Send + Sync,
{
    fn matches(&self, subject: &str) -> MatchResult<bool> {
        self(subject)
    }
}

/// A matcher that matches every subject.
///
/// Used as the catch-all half of wide-open permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

impl Matcher for Anything {
    fn matches(&self, _subject: &str) -> MatchResult<bool> {
        Ok(true)
    }
}

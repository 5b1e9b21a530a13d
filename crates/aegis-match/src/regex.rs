//! Regex-backed matching
//!
//! For rules that outgrow glob patterns. Construction never fails; a bad
//! pattern is reported when the matcher is first evaluated, which keeps
//! rule constructors infallible.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::MatchResult;
use crate::matcher::Matcher;

/// A [`Matcher`] that tests subjects against a regular expression.
///
/// The expression is searched unanchored, following the `regex` crate's
/// `is_match` semantics. Compilation happens lazily on the first call and
/// the compiled program is cached for subsequent calls; an invalid pattern
/// re-surfaces its error on every call.
///
/// # Example
///
/// ```
/// use aegis_match::{Matcher, RegexMatcher};
///
/// let matcher = RegexMatcher::new(r"^doc-\d+$");
/// assert!(matcher.matches("doc-123").unwrap());
/// assert!(!matcher.matches("doc-abc").unwrap());
///
/// // Errors surface at evaluation time, not construction.
/// let broken = RegexMatcher::new("(unclosed");
/// assert!(broken.matches("anything").is_err());
/// ```
#[derive(Debug)]
pub struct RegexMatcher {
    pattern: String,
    compiled: OnceLock<Regex>,
}

impl RegexMatcher {
    /// Create a matcher for the given regular expression pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            compiled: OnceLock::new(),
        }
    }

    /// The pattern this matcher was built from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for RegexMatcher {
    fn matches(&self, subject: &str) -> MatchResult<bool> {
        if let Some(re) = self.compiled.get() {
            return Ok(re.is_match(subject));
        }

        let re = Regex::new(&self.pattern)?;
        Ok(self.compiled.get_or_init(|| re).is_match(subject))
    }
}

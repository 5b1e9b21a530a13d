//! # Matcher combinators
//!
//! Boolean composition over matchers. Both combinators evaluate their
//! members in order and stop at the first decisive result; an error from
//! a member aborts evaluation and propagates unchanged.

use crate::error::MatchResult;
use crate::matcher::{BoxedMatcher, Matcher};

/// A [`Matcher`] that succeeds when at least one member matches.
///
/// Members are evaluated in order. The first `Ok(true)` wins without
/// evaluating the rest; the first error aborts the scan. An empty `AnyOf`
/// matches nothing.
///
/// # Example
///
/// ```
/// use aegis_match::{AnyOf, ExactMatcher, Matcher};
///
/// let matcher = AnyOf::new(vec![
///     Box::new(ExactMatcher::new("read")),
///     Box::new(ExactMatcher::new("list")),
/// ]);
/// assert!(matcher.matches("list").unwrap());
/// assert!(!matcher.matches("delete").unwrap());
/// ```
pub struct AnyOf {
    matchers: Vec<BoxedMatcher>,
}

impl AnyOf {
    /// Combine the given matchers into a single one-of-them matcher.
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AnyOf {
    fn matches(&self, subject: &str) -> MatchResult<bool> {
        for matcher in &self.matchers {
            if matcher.as_ref().matches(subject)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl FromIterator<BoxedMatcher> for AnyOf {
    fn from_iter<T: IntoIterator<Item = BoxedMatcher>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A [`Matcher`] that succeeds only when every member matches.
///
/// Members are evaluated in order. The first `Ok(false)` rejects without
/// evaluating the rest; the first error aborts the scan. An empty `AllOf`
/// matches everything (vacuous truth).
pub struct AllOf {
    matchers: Vec<BoxedMatcher>,
}

impl AllOf {
    /// Combine the given matchers into a single all-of-them matcher.
    pub fn new(matchers: Vec<BoxedMatcher>) -> Self {
        Self { matchers }
    }
}

impl Matcher for AllOf {
    fn matches(&self, subject: &str) -> MatchResult<bool> {
        for matcher in &self.matchers {
            if !matcher.as_ref().matches(subject)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl FromIterator<BoxedMatcher> for AllOf {
    fn from_iter<T: IntoIterator<Item = BoxedMatcher>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchResult;
    use crate::exact::ExactMatcher;
    use crate::glob::GlobMatcher;
    use crate::regex::RegexMatcher;

    /// A matcher that fails the test if it is ever evaluated.
    fn tripwire() -> BoxedMatcher {
        Box::new(|_: &str| -> MatchResult<bool> {
            panic!("matcher evaluated past a decisive result");
        })
    }

    #[test]
    fn test_any_of_empty_is_false() {
        assert!(!AnyOf::new(Vec::new()).matches("x").unwrap());
    }

    #[test]
    fn test_all_of_empty_is_true() {
        assert!(AllOf::new(Vec::new()).matches("x").unwrap());
    }

    #[test]
    fn test_any_of_first_match_wins() {
        let matcher = AnyOf::new(vec![
            Box::new(GlobMatcher::new("read*")),
            tripwire(),
        ]);
        assert!(matcher.matches("read-file").unwrap());
    }

    #[test]
    fn test_any_of_exhausts_without_match() {
        let matcher = AnyOf::new(vec![
            Box::new(ExactMatcher::new("read")),
            Box::new(ExactMatcher::new("list")),
        ]);
        assert!(!matcher.matches("delete").unwrap());
    }

    #[test]
    fn test_all_of_first_reject_wins() {
        let matcher = AllOf::new(vec![
            Box::new(ExactMatcher::new("read")),
            tripwire(),
        ]);
        assert!(!matcher.matches("delete").unwrap());
    }

    #[test]
    fn test_all_of_requires_every_member() {
        let matcher = AllOf::new(vec![
            Box::new(GlobMatcher::new("read*")),
            Box::new(GlobMatcher::new("*file")),
        ]);
        assert!(matcher.matches("read-file").unwrap());
        assert!(!matcher.matches("read-dir").unwrap());
    }

    #[test]
    fn test_any_of_error_aborts_scan() {
        let matcher = AnyOf::new(vec![
            Box::new(ExactMatcher::new("no-match")),
            Box::new(RegexMatcher::new("(unclosed")),
            tripwire(),
        ]);
        assert!(matcher.matches("x").is_err());
    }

    #[test]
    fn test_all_of_error_aborts_scan() {
        let matcher = AllOf::new(vec![
            Box::new(GlobMatcher::new("*")),
            Box::new(RegexMatcher::new("(unclosed")),
            tripwire(),
        ]);
        assert!(matcher.matches("x").is_err());
    }

    #[test]
    fn test_collect_into_combinator() {
        let members: Vec<BoxedMatcher> = vec![
            Box::new(ExactMatcher::new("read")),
            Box::new(ExactMatcher::new("write")),
        ];
        let matcher: AnyOf = members.into_iter().collect();
        assert!(matcher.matches("write").unwrap());
    }
}

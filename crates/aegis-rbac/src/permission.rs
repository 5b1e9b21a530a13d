//! # Permissions
//!
//! A permission is a predicate over an `(action, target)` pair. The
//! canonical form pairs one matcher for the action with one for the
//! target; anything implementing the [`Permission`] trait can stand in.

use aegis_match::{
    BoxedMatcher, ExactMatcher, GlobMatcher, MatchResult, Matcher, RegexMatcher,
};

/// A predicate over an `(action, target)` pair.
///
/// Implementors are immutable after construction and safe to query from
/// multiple threads concurrently.
pub trait Permission: Send + Sync {
    /// Test whether this permission allows the action on the target.
    ///
    /// # Arguments
    ///
    /// * `action` - The operation being attempted
    /// * `target` - The resource the operation is aimed at
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the pair is allowed, `Ok(false)` if it isn't, or an
    /// error if a rule pattern could not be evaluated.
    fn permits(&self, action: &str, target: &str) -> MatchResult<bool>;
}

/// A boxed permission trait object.
pub type BoxedPermission = Box<dyn Permission>;

/// Any plain function or closure over an `(action, target)` pair is a
/// permission. Useful for custom rules and test doubles.
impl<F> Permission for F
where
    F: Fn(&str, &str) -> MatchResult<bool> + Send + Sync,
{
    fn permits(&self, action: &str, target: &str) -> MatchResult<bool> {
        self(action, target)
    }
}

/// The canonical permission: an action matcher ANDed with a target matcher.
///
/// The action matcher is evaluated first. If it errors, the error
/// propagates; if it rejects, the target matcher is never evaluated; if it
/// accepts, the target matcher's result is returned verbatim.
///
/// # Example
///
/// ```
/// use aegis_rbac::{MatcherPermission, Permission};
///
/// let permission = MatcherPermission::glob("read*", "/docs/*");
/// assert!(permission.permits("read-file", "/docs/report.pdf").unwrap());
/// assert!(!permission.permits("write", "/docs/report.pdf").unwrap());
/// ```
pub struct MatcherPermission {
    action: BoxedMatcher,
    target: BoxedMatcher,
}

impl MatcherPermission {
    /// Pair an action matcher with a target matcher.
    pub fn new(action: BoxedMatcher, target: BoxedMatcher) -> Self {
        Self { action, target }
    }

    /// Build a permission from two glob patterns.
    pub fn glob(action_pattern: impl Into<String>, target_pattern: impl Into<String>) -> Self {
        Self::new(
            Box::new(GlobMatcher::new(action_pattern)),
            Box::new(GlobMatcher::new(target_pattern)),
        )
    }

    /// Build a permission from two regular expression patterns.
    pub fn regex(action_pattern: impl Into<String>, target_pattern: impl Into<String>) -> Self {
        Self::new(
            Box::new(RegexMatcher::new(action_pattern)),
            Box::new(RegexMatcher::new(target_pattern)),
        )
    }

    /// Build a permission from two literal strings.
    pub fn exact(action: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(
            Box::new(ExactMatcher::new(action)),
            Box::new(ExactMatcher::new(target)),
        )
    }
}

impl Permission for MatcherPermission {
    fn permits(&self, action: &str, target: &str) -> MatchResult<bool> {
        if !self.action.as_ref().matches(action)? {
            return Ok(false);
        }
        self.target.as_ref().matches(target)
    }
}

/// A permission that allows every `(action, target)` pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl Permission for AllowAll {
    fn permits(&self, _action: &str, _target: &str) -> MatchResult<bool> {
        Ok(true)
    }
}

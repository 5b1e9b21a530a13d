//! # Constructor registry
//!
//! Maps rule-kind names (`"glob"`, `"regex"`, `"string"`, plus anything an
//! embedder registers) to the functions that turn a pair of pattern
//! strings into a permission. Every policy template owns its own registry;
//! there is deliberately no shared global one, so templates cannot
//! interfere with each other's rule vocabulary.

use std::collections::HashMap;
use std::fmt;

use crate::permission::{BoxedPermission, MatcherPermission};

/// Builds a permission from an action pattern and a target pattern.
///
/// Construction is infallible by contract: a constructor must always
/// return a permission, deferring pattern problems (such as an invalid
/// regex) to evaluation time.
pub trait PermissionConstructor: Send + Sync {
    /// Build a permission for the given pattern pair.
    fn construct(&self, action: &str, target: &str) -> BoxedPermission;
}

/// Any plain function or closure over a pattern pair is a constructor.
///
/// ```
/// use aegis_rbac::{BoxedPermission, MatcherPermission, PermissionConstructor};
///
/// let flipped = |action: &str, target: &str| -> BoxedPermission {
///     Box::new(MatcherPermission::glob(target, action))
/// };
/// let permission = flipped.construct("/docs/*", "read*");
/// ```
impl<F> PermissionConstructor for F
where
    F: Fn(&str, &str) -> BoxedPermission + Send + Sync,
{
    fn construct(&self, action: &str, target: &str) -> BoxedPermission {
        self(action, target)
    }
}

/// The `"glob"` built-in: both patterns are glob patterns.
///
/// Also the fallback for permission templates whose constructor name is
/// missing or not registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobConstructor;

impl PermissionConstructor for GlobConstructor {
    fn construct(&self, action: &str, target: &str) -> BoxedPermission {
        Box::new(MatcherPermission::glob(action, target))
    }
}

/// The `"regex"` built-in: both patterns are regular expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexConstructor;

impl PermissionConstructor for RegexConstructor {
    fn construct(&self, action: &str, target: &str) -> BoxedPermission {
        Box::new(MatcherPermission::regex(action, target))
    }
}

/// The `"string"` built-in: both patterns are exact literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactConstructor;

impl PermissionConstructor for ExactConstructor {
    fn construct(&self, action: &str, target: &str) -> BoxedPermission {
        Box::new(MatcherPermission::exact(action, target))
    }
}

/// A name-to-constructor mapping owned by a single policy template.
///
/// `Default` seeds the three built-ins, and is what deserialization uses
/// to reseed a freshly loaded template (the registry is never part of the
/// wire format):
///
/// | name     | constructor        |
/// |----------|--------------------|
/// | `glob`   | [`GlobConstructor`]  |
/// | `regex`  | [`RegexConstructor`] |
/// | `string` | [`ExactConstructor`] |
pub struct ConstructorRegistry {
    constructors: HashMap<String, Box<dyn PermissionConstructor>>,
}

impl ConstructorRegistry {
    /// Create a registry with no constructors at all.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Create a registry seeded with the built-in constructors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.set("glob", GlobConstructor);
        registry.set("regex", RegexConstructor);
        registry.set("string", ExactConstructor);
        registry
    }

    /// Register a constructor under a name, replacing any existing entry.
    pub fn set(&mut self, name: impl Into<String>, constructor: impl PermissionConstructor + 'static) {
        self.constructors.insert(name.into(), Box::new(constructor));
    }

    /// Remove the constructor registered under a name.
    ///
    /// # Returns
    ///
    /// `true` if an entry was present, `false` otherwise.
    pub fn delete(&mut self, name: &str) -> bool {
        self.constructors.remove(name).is_some()
    }

    /// Look up the constructor registered under a name.
    pub fn get(&self, name: &str) -> Option<&dyn PermissionConstructor> {
        self.constructors.get(name).map(|c| c.as_ref())
    }

    /// Check whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// The registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the count of registered constructors.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl Default for ConstructorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for ConstructorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorRegistry")
            .field("names", &self.names())
            .finish()
    }
}

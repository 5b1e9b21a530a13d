//! # Permission sets and roles
//!
//! A permission set is an ordered collection of permissions combined with
//! any-grants-access semantics; a role is a named, immutable permission
//! set, usually produced by materializing a policy template.

use aegis_match::MatchResult;

use crate::permission::{BoxedPermission, Permission};

/// An ordered collection of permissions, any one of which grants access.
///
/// Permissions are evaluated in insertion order. The first grant wins and
/// later permissions are not evaluated; an error from a permission before
/// any grant aborts the scan and propagates to the caller (fail-closed).
///
/// # Example
///
/// ```
/// use aegis_rbac::{MatcherPermission, PermissionSet};
///
/// let mut set = PermissionSet::new();
/// set.add(Box::new(MatcherPermission::glob("read*", "*")));
/// set.add(Box::new(MatcherPermission::exact("delete", "/tmp/scratch")));
///
/// assert!(set.can("read-file", "/docs/report.pdf").unwrap());
/// assert!(set.can("delete", "/tmp/scratch").unwrap());
/// assert!(!set.can("delete", "/docs/report.pdf").unwrap());
/// ```
#[derive(Default)]
pub struct PermissionSet {
    permissions: Vec<BoxedPermission>,
}

impl PermissionSet {
    /// Create a new empty permission set.
    pub fn new() -> Self {
        Self {
            permissions: Vec::new(),
        }
    }

    /// Append a permission to the set.
    ///
    /// Order matters for evaluation cost and for which error surfaces
    /// first, not for the boolean outcome.
    pub fn add(&mut self, permission: BoxedPermission) {
        self.permissions.push(permission);
    }

    /// Check whether any permission in the set allows the pair.
    ///
    /// # Arguments
    ///
    /// * `action` - The operation being attempted
    /// * `target` - The resource the operation is aimed at
    ///
    /// # Returns
    ///
    /// `Ok(true)` on the first granting permission, `Ok(false)` if the set
    /// is exhausted without a grant, or the first evaluation error.
    pub fn can(&self, action: &str, target: &str) -> MatchResult<bool> {
        for permission in &self.permissions {
            if permission.as_ref().permits(action, target)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Get the count of permissions.
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

impl FromIterator<BoxedPermission> for PermissionSet {
    fn from_iter<T: IntoIterator<Item = BoxedPermission>>(iter: T) -> Self {
        Self {
            permissions: iter.into_iter().collect(),
        }
    }
}

/// A named, immutable set of permissions.
///
/// Roles are built, never patched: materialize a new role from a policy
/// template when its rules change. An existing role is unaffected by
/// later changes to the template it came from.
pub struct Role {
    role_id: String,
    permissions: PermissionSet,
}

impl Role {
    /// Create a role from an identifier and a permission set.
    pub fn new(role_id: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            role_id: role_id.into(),
            permissions,
        }
    }

    /// The identifier this role was created with.
    pub fn role_id(&self) -> &str {
        &self.role_id
    }

    /// The role's permission set.
    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Check whether this role allows the action on the target.
    ///
    /// Delegates to [`PermissionSet::can`]; the outcome is logged at debug
    /// level for audit-style tracing.
    pub fn can(&self, action: &str, target: &str) -> MatchResult<bool> {
        let granted = self.permissions.can(action, target)?;
        tracing::debug!(
            role_id = %self.role_id,
            action = %action,
            target = %target,
            granted,
            "authorization check"
        );
        Ok(granted)
    }
}

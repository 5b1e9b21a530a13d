//! # Policy templates
//!
//! The serializable description of a role: an identifier plus a list of
//! permission templates, each naming the constructor that should build it.
//! Templates are the wire format; materializing one through its
//! constructor registry produces an immutable [`Role`].

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};
use crate::registry::{ConstructorRegistry, GlobConstructor, PermissionConstructor};
use crate::role::{PermissionSet, Role};
use crate::substitution::Substitutions;

/// A single permission rule in templated form.
///
/// Declarative and serde round-trippable; it has no behavior of its own
/// until a constructor turns its patterns into a permission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionTemplate {
    /// Name of the registered constructor that should build this rule.
    ///
    /// An omitted or unregistered name resolves to the glob constructor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constructor: Option<String>,

    /// Pattern for the action half of the rule.
    pub action: String,

    /// Pattern for the target half of the rule.
    pub target: String,
}

/// A serializable description of a role.
///
/// # Wire format
///
/// ```json
/// {
///   "role_id": "admin",
///   "permissions": [
///     { "constructor": "glob", "action": "read*", "target": "/docs/*" },
///     { "action": "list", "target": "*" }
///   ]
/// }
/// ```
///
/// The constructor registry is never serialized. Deserializing a template
/// reseeds the registry with the built-in constructors (`glob`, `regex`,
/// `string`), so a freshly loaded template materializes correctly; custom
/// constructors must be re-registered by the embedder after loading.
///
/// # Lifecycle
///
/// A template is mutable owner state: add permission rules, register or
/// remove constructors, then call [`build_role`](Self::build_role) as many
/// times as needed. Roles are snapshots; mutating the template afterwards
/// never affects roles already built.
///
/// # Concurrency
///
/// A template is a single-writer resource. Mutating it concurrently with
/// `build_role` or other mutators on the same instance must be serialized
/// by the caller; the roles it produces are freely shareable.
///
/// # Example
///
/// ```
/// use aegis_rbac::PolicyTemplate;
///
/// let mut template = PolicyTemplate::new("admin");
/// template.add_permission(Some("glob"), "read*", "/docs/*");
///
/// let role = template.build_role(None);
/// assert!(role.can("read-file", "/docs/report.pdf").unwrap());
/// assert!(!role.can("write", "/docs/report.pdf").unwrap());
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct PolicyTemplate {
    /// Identifier for roles materialized from this template.
    pub role_id: String,

    /// The permission rules, in evaluation order.
    pub permissions: Vec<PermissionTemplate>,

    /// The constructor registry, owned by this template alone.
    ///
    /// Not part of the wire format; reseeded with the built-ins whenever a
    /// template is created or deserialized.
    #[serde(skip)]
    constructors: ConstructorRegistry,
}

impl PolicyTemplate {
    /// Create an empty template with the default constructor registry.
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            permissions: Vec::new(),
            constructors: ConstructorRegistry::default(),
        }
    }

    /// Parse a template from its JSON wire format.
    ///
    /// Two-phase load: serde fills the data fields, then the constructor
    /// registry is seeded with the built-ins. Malformed input is a
    /// [`PolicyError::Parse`] and yields no template.
    pub fn from_json(json: &str) -> PolicyResult<Self> {
        serde_json::from_str(json).map_err(PolicyError::Parse)
    }

    /// Serialize this template to its JSON wire format.
    ///
    /// The constructor registry is not included.
    pub fn to_json(&self) -> PolicyResult<String> {
        serde_json::to_string(self).map_err(PolicyError::Serialize)
    }

    /// Append a permission rule to the template.
    ///
    /// # Arguments
    ///
    /// * `constructor` - Registered constructor name, or `None` for glob
    /// * `action` - Pattern for the action half of the rule
    /// * `target` - Pattern for the target half of the rule
    pub fn add_permission(&mut self, constructor: Option<&str>, action: &str, target: &str) {
        self.permissions.push(PermissionTemplate {
            constructor: constructor.map(String::from),
            action: action.to_string(),
            target: target.to_string(),
        });
    }

    /// Register a constructor under a name, replacing any existing entry.
    pub fn set_constructor(
        &mut self,
        name: impl Into<String>,
        constructor: impl PermissionConstructor + 'static,
    ) {
        self.constructors.set(name, constructor);
    }

    /// Remove the constructor registered under a name.
    ///
    /// # Returns
    ///
    /// `true` if an entry was present, `false` otherwise.
    pub fn delete_constructor(&mut self, name: &str) -> bool {
        self.constructors.delete(name)
    }

    /// The template's constructor registry.
    pub fn constructors(&self) -> &ConstructorRegistry {
        &self.constructors
    }

    /// Materialize this template into a [`Role`].
    ///
    /// For each permission template, in declared order: resolve its
    /// constructor name against the registry (missing or unknown names
    /// fall back to the glob constructor - a deliberate default, not an
    /// error), apply `substitutions` to both pattern strings if given, and
    /// construct the permission. This never fails; a rule with a bad
    /// pattern surfaces its error when the role is queried.
    ///
    /// # Arguments
    ///
    /// * `substitutions` - Optional token replacements applied to the
    ///   action and target pattern text before construction
    pub fn build_role(&self, substitutions: Option<&Substitutions>) -> Role {
        let mut permissions = PermissionSet::new();

        for template in &self.permissions {
            let constructor = template
                .constructor
                .as_deref()
                .and_then(|name| self.constructors.get(name));

            if constructor.is_none() {
                if let Some(name) = template.constructor.as_deref() {
                    tracing::debug!(
                        role_id = %self.role_id,
                        constructor = %name,
                        "unregistered constructor, falling back to glob"
                    );
                }
            }

            let (action, target) = match substitutions {
                Some(subs) => (subs.apply(&template.action), subs.apply(&template.target)),
                None => (template.action.clone(), template.target.clone()),
            };

            let permission = match constructor {
                Some(constructor) => constructor.construct(&action, &target),
                None => GlobConstructor.construct(&action, &target),
            };
            permissions.add(permission);
        }

        Role::new(self.role_id.clone(), permissions)
    }
}

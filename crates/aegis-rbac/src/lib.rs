//! # Aegis RBAC
//!
//! This crate provides role-based access control matching for the Aegis
//! authorization toolkit: it answers whether a named role authorizes an
//! `(action, target)` pair.
//!
//! ## Overview
//!
//! The aegis-rbac crate handles:
//! - **Permissions**: Action matcher + target matcher predicates
//! - **Permission Sets**: Ordered any-grants-access collections
//! - **Roles**: Named, immutable permission sets
//! - **Policy Templates**: The serializable role description and its
//!   constructor registry
//! - **Substitutions**: Token replacement for parameterized roles
//!
//! ## Architecture
//!
//! ```text
//! PolicyTemplate --(registry + substitutions)--> Role --can(action, target)--> bool
//!
//! Examples:
//!   { "constructor": "glob",   "action": "read*", "target": "/docs/*" }
//!   { "constructor": "string", "action": "purge", "target": "/tmp/scratch" }
//!   { "action": "list*", "target": "*" }            <- constructor defaults to glob
//! ```
//!
//! ## Usage
//!
//! ```
//! use aegis_rbac::PolicyTemplate;
//!
//! let template = PolicyTemplate::from_json(
//!     r#"{
//!         "role_id": "admin",
//!         "permissions": [
//!             { "constructor": "glob", "action": "read*", "target": "/docs/*" }
//!         ]
//!     }"#,
//! )
//! .unwrap();
//!
//! let role = template.build_role(None);
//! assert!(role.can("read-file", "/docs/report.pdf").unwrap());
//! assert!(!role.can("write", "/docs/report.pdf").unwrap());
//! ```
//!
//! ### Parameterized roles
//!
//! ```
//! use aegis_rbac::{PolicyTemplate, Substitutions};
//!
//! let mut template = PolicyTemplate::new("tenant-reader");
//! template.add_permission(None, "read*", "/{tenant}/*");
//!
//! let subs: Substitutions = [("{tenant}", "acme")].into_iter().collect();
//! let role = template.build_role(Some(&subs));
//! assert!(role.can("read", "/acme/report").unwrap());
//! ```
//!
//! ## Decision Semantics
//!
//! A role grants access iff any of its permissions grants it; permissions
//! are scanned in template order and the first grant short-circuits. An
//! evaluation error (for example an invalid regex rule) aborts the scan
//! and propagates to the caller - it is never interpreted as a silent
//! grant or denial (fail-closed).
//!
//! ## Integration with aegis-match
//!
//! Rule patterns are evaluated by `aegis-match` matchers; custom
//! constructors can combine them freely with `AnyOf` / `AllOf`.

pub mod error;
pub mod permission;
pub mod registry;
pub mod role;
pub mod substitution;
pub mod template;

// Re-export main types for convenience
pub use error::{PolicyError, PolicyResult};
pub use permission::{AllowAll, BoxedPermission, MatcherPermission, Permission};
pub use registry::{
    ConstructorRegistry, ExactConstructor, GlobConstructor, PermissionConstructor,
    RegexConstructor,
};
pub use role::{PermissionSet, Role};
pub use substitution::Substitutions;
pub use template::{PermissionTemplate, PolicyTemplate};

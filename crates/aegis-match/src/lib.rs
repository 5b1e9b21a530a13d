//! # Aegis Match
//!
//! This crate provides the pattern matching primitives for the Aegis
//! authorization toolkit. Permission rules in `aegis-rbac` are built from
//! the matchers defined here.
//!
//! ## Overview
//!
//! The aegis-match crate handles:
//! - **Matcher**: The single-method capability trait every rule reduces to
//! - **Glob**: Wildcard matching, the default pattern language
//! - **Regex**: Full regular expressions for rules that outgrow globs
//! - **Exact**: Literal string equality
//! - **Combinators**: `AnyOf` / `AllOf` boolean composition
//!
//! ## Matching Model
//!
//! ```text
//! Matcher = subject -> Ok(bool) | Err(MatchError)
//!
//! Examples:
//!   glob  "read*"      matches "read-file", "read"
//!   glob  "/docs/*"    matches "/docs/report.pdf"
//!   regex "^doc-\d+$"  matches "doc-123"
//!   exact "delete"     matches only "delete"
//! ```
//!
//! Matchers never fail at construction. Regex compilation errors surface
//! as `Err` values when the matcher is evaluated, so composite rules stay
//! cheap to build and fail closed when queried.
//!
//! ## Usage
//!
//! ```
//! use aegis_match::{glob, AnyOf, GlobMatcher, Matcher};
//!
//! // Plain function form
//! assert!(glob("read*", "read-file"));
//!
//! // Matcher form, composable
//! let readable = AnyOf::new(vec![
//!     Box::new(GlobMatcher::new("read*")),
//!     Box::new(GlobMatcher::new("list*")),
//! ]);
//! assert!(readable.matches("list-folder").unwrap());
//! assert!(!readable.matches("delete").unwrap());
//! ```
//!
//! ## Concurrency
//!
//! Every matcher is immutable after construction and `Send + Sync`;
//! concurrent evaluation needs no locking.

pub mod combinators;
pub mod error;
pub mod exact;
pub mod glob;
pub mod matcher;
pub mod regex;

// Re-export main types for convenience
pub use combinators::{AllOf, AnyOf};
pub use error::{MatchError, MatchResult};
pub use exact::ExactMatcher;
pub use glob::{glob, GlobMatcher, GLOB};
pub use matcher::{Anything, BoxedMatcher, Matcher};
pub use crate::regex::RegexMatcher;

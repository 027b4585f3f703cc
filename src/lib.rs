//! Verdict: lazy, composable validation rules
//!
//! Verdict builds validation out of small, deferred checks. A rule is
//! described up front and only evaluated when an engine runs it, so a
//! batch can mix cheap field checks with expensive lookups and still stop
//! before the lookup when an earlier check fails.
//!
//! # Core Concepts
//!
//! - **Violation**: An immutable record of one failed rule (field path,
//!   message key, human-readable details, optional attributes)
//! - **LazyRule**: A deferred check producing at most one violation
//! - **Rules**: A library of eager checks (`rules::string`, `rules::numeric`, ...)
//!   with a lazy twin for each in `rules::lazy`
//! - **Engine**: Runs a batch with collect-all or find-first aggregation and
//!   optionally stops with a [`ValidationError`]
//!
//! # Example
//!
//! ```rust
//! use verdict::engine::validate_all_and_stop_if_violations;
//! use verdict::rules::lazy;
//!
//! fn check(id: Option<u64>, name: Option<&str>) -> Result<(), verdict::ValidationError> {
//!     validate_all_and_stop_if_violations(vec![
//!         lazy::not_null("id", id),
//!         lazy::not_blank("name", name),
//!         lazy::length_between("name", name, 1, 10),
//!     ])
//! }
//!
//! assert!(check(Some(7), Some("Ada")).is_ok());
//!
//! let err = check(None, Some("")).unwrap_err();
//! let paths: Vec<&str> = err.violations().iter().map(|v| v.field_path()).collect();
//! assert_eq!(paths, vec!["id", "name", "name"]);
//! ```

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use core::{AttributeValue, Attributes, LazyRule, Violation};
pub use engine::{
    stop_if_violation, stop_if_violations, validate_all, validate_all_and_stop_if_violations,
    validate_find_first, validate_find_first_and_stop_if_violation, EvaluationStrategy,
    ValidationError,
};
pub use rules::RuleError;

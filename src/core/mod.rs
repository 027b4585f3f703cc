//! Core validation types.
//!
//! This module contains the data the rest of the crate is built from:
//! - `Violation`, the immutable record of one failure
//! - `AttributeValue` / `Attributes`, the structured parameters a violation carries
//! - `LazyRule`, the deferred check the engine evaluates
//!
//! Nothing in here performs I/O or holds shared state.

mod attribute;
mod rule;
mod violation;

pub use attribute::{AttributeValue, Attributes};
pub use rule::LazyRule;
pub use violation::Violation;

//! Rule library.
//!
//! Each rule exists in two forms:
//!
//! - an **eager** form in its family module, which checks immediately and
//!   returns `Option<Violation>`
//! - a **lazy** form of the same name in [`lazy`], which captures its
//!   arguments and returns a [`LazyRule`](crate::core::LazyRule) for the engine
//!
//! Rules never fail for invalid data; they return a violation. They only
//! panic when the call itself is malformed (see [`RuleError`]).
//!
//! # Example
//!
//! ```rust
//! use verdict::rules::{lazy, string};
//!
//! assert!(string::not_blank("user.name", Some("  ")).is_some());
//!
//! let rule = lazy::not_blank("user.name", Some("Ada"));
//! assert!(rule.evaluate().is_none());
//! ```

pub mod collection;
pub mod compare;
pub mod error;
pub mod lazy;
pub mod numeric;
pub mod predicate;
pub mod presence;
pub mod string;

pub use error::RuleError;

use crate::core::{AttributeValue, Attributes, Violation};

/// Message key shared by every rule that rejects an absent value.
pub const VALUE_IS_REQUIRED: &str = "value.is.required";

pub(crate) fn required(field: &str) -> Violation {
    Violation::of(field, VALUE_IS_REQUIRED, "The value is required.")
}

pub(crate) fn other_attribute(other: impl Into<AttributeValue>) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("other".to_string(), other.into());
    attributes
}

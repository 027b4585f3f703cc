//! Presence checks.

use super::predicate::is_true_with;
use super::required;
use crate::core::Violation;

pub const VALUE_IS_NOT_NULL: &str = "value.is.not.null";

/// Fails when a value is present.
pub fn is_null<T>(field: &str, value: Option<T>) -> Option<Violation> {
    is_true_with(
        || value.is_none(),
        || Violation::of(field, VALUE_IS_NOT_NULL, "The value is not null."),
    )
}

/// Fails with `value.is.required` when the value is absent.
pub fn not_null<T>(field: &str, value: Option<T>) -> Option<Violation> {
    is_true_with(|| value.is_some(), || required(field))
}

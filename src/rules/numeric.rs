//! Numeric magnitude and sign rules.
//!
//! These rules only check a value that is present: an absent value is
//! never a violation. Combine with [`not_null`](super::presence::not_null)
//! when the value is mandatory.
//!
//! The rules are generic over the numeric representation, so the same
//! check covers primitives as well as arbitrary-precision types such as
//! `num_bigint::BigInt` or `rust_decimal::Decimal`.

use super::error::ensure_ordered;
use super::predicate::is_true_with;
use crate::core::{AttributeValue, Attributes, Violation};
use num_traits::Zero;

pub const VALUE_NOT_IN_RANGE: &str = "value.not.in.range";
pub const VALUE_SMALLER_THAN_MIN: &str = "value.smaller.than.min";
pub const VALUE_GREATER_THAN_MAX: &str = "value.greater.than.max";
pub const NEGATIVE_OR_ZERO_VALUE: &str = "negative.or.zero.value";
pub const NEGATIVE_VALUE: &str = "negative.value";
pub const POSITIVE_OR_ZERO_VALUE: &str = "positive.or.zero.value";
pub const POSITIVE_VALUE: &str = "positive.value";

/// Fails when a present value falls outside `min..=max`.
///
/// # Panics
///
/// Panics with `min is greater than max` when `min > max`.
///
/// # Example
///
/// ```rust
/// use verdict::rules::numeric::in_range;
///
/// assert!(in_range("age", Some(5), 6, 7).is_some());
/// assert!(in_range("age", Some(6), 6, 7).is_none());
/// assert!(in_range("age", None, 6, 7).is_none());
/// ```
#[track_caller]
pub fn in_range<T>(field: &str, value: Option<T>, min: T, max: T) -> Option<Violation>
where
    T: PartialOrd + Into<AttributeValue>,
{
    ensure_ordered(&min, &max);
    let value = value?;
    let within = value >= min && value <= max;

    is_true_with(
        || within,
        || {
            let mut attributes = Attributes::new();
            attributes.insert("min".to_string(), min.into());
            attributes.insert("max".to_string(), max.into());
            Violation::with_attributes(
                field,
                VALUE_NOT_IN_RANGE,
                "Value is not in range.",
                Some(attributes),
            )
        },
    )
}

/// Fails when a present value is smaller than `min`.
pub fn min<T>(field: &str, value: Option<T>, min: T) -> Option<Violation>
where
    T: PartialOrd + Into<AttributeValue>,
{
    let value = value?;
    let holds = value >= min;

    is_true_with(
        || holds,
        || bound_violation(field, VALUE_SMALLER_THAN_MIN, "Value is smaller than min.", "min", min),
    )
}

/// Fails when a present value is greater than `max`.
pub fn max<T>(field: &str, value: Option<T>, max: T) -> Option<Violation>
where
    T: PartialOrd + Into<AttributeValue>,
{
    let value = value?;
    let holds = value <= max;

    is_true_with(
        || holds,
        || bound_violation(field, VALUE_GREATER_THAN_MAX, "Value is greater than max.", "max", max),
    )
}

fn bound_violation(
    field: &str,
    message: &str,
    details: &str,
    name: &str,
    bound: impl Into<AttributeValue>,
) -> Violation {
    let mut attributes = Attributes::new();
    attributes.insert(name.to_string(), bound.into());
    Violation::with_attributes(field, message, details, Some(attributes))
}

/// Compare a present value against zero; absent values pass.
fn sign_check<T, C>(
    value: Option<T>,
    holds: C,
    violation: impl FnOnce() -> Violation,
) -> Option<Violation>
where
    T: PartialOrd + Zero,
    C: FnOnce(&T, &T) -> bool,
{
    let value = value?;
    is_true_with(|| holds(&value, &T::zero()), violation)
}

/// Fails when a present value is zero or negative.
pub fn positive<T: PartialOrd + Zero>(field: &str, value: Option<T>) -> Option<Violation> {
    sign_check(value, |v, zero| v > zero, || {
        Violation::of(
            field,
            NEGATIVE_OR_ZERO_VALUE,
            "The value must be a positive number (zero not allowed).",
        )
    })
}

/// Fails when a present value is negative.
pub fn positive_or_zero<T: PartialOrd + Zero>(field: &str, value: Option<T>) -> Option<Violation> {
    sign_check(value, |v, zero| v >= zero, || {
        Violation::of(
            field,
            NEGATIVE_VALUE,
            "The value must be a positive number (zero allowed).",
        )
    })
}

/// Fails when a present value is zero or positive.
pub fn negative<T: PartialOrd + Zero>(field: &str, value: Option<T>) -> Option<Violation> {
    sign_check(value, |v, zero| v < zero, || {
        Violation::of(
            field,
            POSITIVE_OR_ZERO_VALUE,
            "The value must be a negative number (zero not allowed).",
        )
    })
}

/// Fails when a present value is positive.
pub fn negative_or_zero<T: PartialOrd + Zero>(field: &str, value: Option<T>) -> Option<Violation> {
    sign_check(value, |v, zero| v <= zero, || {
        Violation::of(
            field,
            POSITIVE_VALUE,
            "The value must be a negative number (zero allowed).",
        )
    })
}

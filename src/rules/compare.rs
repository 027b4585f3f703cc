//! Ordering rules over any `PartialOrd` type (numbers, dates, versions...).
//!
//! An absent value is never a violation. A present value compared against
//! an absent bound fails every assertion except [`not_equals_to`], and the
//! violation then carries `other: null`. Each failure is reported with the
//! negation of the assertion, e.g. `after` fails with `value.is.before.or.equal`.

use super::other_attribute;
use super::predicate::{is_false_with, is_true_with};
use crate::core::Violation;
use std::cmp::Ordering;
use std::fmt::Display;

pub const VALUE_IS_BEFORE_OR_EQUAL: &str = "value.is.before.or.equal";
pub const VALUE_IS_BEFORE: &str = "value.is.before";
pub const VALUE_IS_AFTER_OR_EQUAL: &str = "value.is.after.or.equal";
pub const VALUE_IS_AFTER: &str = "value.is.after";
pub const VALUE_IS_NOT_EQUAL: &str = "value.is.not.equal";
pub const VALUE_IS_EQUAL: &str = "value.is.equal";

struct Assertion {
    message: &'static str,
    details: &'static str,
    holds_without_other: bool,
}

fn compare<T, H>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
    holds: H,
    assertion: Assertion,
) -> Option<Violation>
where
    T: PartialOrd + Display,
    H: FnOnce(&T, &T) -> bool,
{
    let value = value?;
    let satisfied = match &other {
        Some(other) => holds(&value, other),
        None => assertion.holds_without_other,
    };

    is_true_with(
        || satisfied,
        || {
            Violation::with_attributes(
                field,
                assertion.message,
                assertion.details,
                Some(other_attribute(other.as_ref().map(ToString::to_string))),
            )
        },
    )
}

/// Fails unless `value > other`.
///
/// # Example
///
/// ```rust
/// use verdict::rules::compare::after;
///
/// assert!(after("end", Some(10), Some(5)).is_none());
/// assert_eq!(
///     after("end", Some(5), Some(5)).unwrap().message(),
///     "value.is.before.or.equal"
/// );
/// ```
pub fn after<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v > o,
        Assertion {
            message: VALUE_IS_BEFORE_OR_EQUAL,
            details: "The value is before or equal the other value.",
            holds_without_other: false,
        },
    )
}

/// Fails unless `value >= other`.
pub fn after_or_equal<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v >= o,
        Assertion {
            message: VALUE_IS_BEFORE,
            details: "The value is before the other value.",
            holds_without_other: false,
        },
    )
}

/// Fails unless `value < other`.
pub fn before<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v < o,
        Assertion {
            message: VALUE_IS_AFTER_OR_EQUAL,
            details: "The value is after or equal the other value.",
            holds_without_other: false,
        },
    )
}

/// Fails unless `value <= other`.
pub fn before_or_equal<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v <= o,
        Assertion {
            message: VALUE_IS_AFTER,
            details: "The value is after the other value.",
            holds_without_other: false,
        },
    )
}

/// Fails unless `value` and `other` compare equal.
pub fn equals_to<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v.partial_cmp(o) == Some(Ordering::Equal),
        Assertion {
            message: VALUE_IS_NOT_EQUAL,
            details: "The value is not equal to the other value.",
            holds_without_other: false,
        },
    )
}

/// Fails when `value` and `other` compare equal.
pub fn not_equals_to<T: PartialOrd + Display>(
    field: &str,
    value: Option<T>,
    other: Option<T>,
) -> Option<Violation> {
    compare(
        field,
        value,
        other,
        |v, o| v.partial_cmp(o) != Some(Ordering::Equal),
        Assertion {
            message: VALUE_IS_EQUAL,
            details: "The value is equal to the other value.",
            holds_without_other: true,
        },
    )
}

/// Custom comparison with the family's null handling.
///
/// Returns the violation built by `violation` when `fails(value, other)`
/// holds. An absent value is skipped without calling either closure; an
/// absent `other` is handed to `fails` as `None`.
///
/// # Example
///
/// ```rust
/// use verdict::core::Violation;
/// use verdict::rules::compare::compare_with;
///
/// let same_ignoring_case = |v: &&str, o: Option<&&str>| {
///     o.is_some_and(|o| v.eq_ignore_ascii_case(o))
/// };
/// let taken = || Violation::of("user.name", "user.name.taken", "The name is taken.");
///
/// assert!(compare_with(Some("Ada"), Some("ada"), same_ignoring_case, taken).is_some());
/// assert!(compare_with(Some("Ada"), Some("bob"), same_ignoring_case, taken).is_none());
/// assert!(compare_with(None, Some("ada"), same_ignoring_case, taken).is_none());
/// ```
pub fn compare_with<T, F, V>(
    value: Option<T>,
    other: Option<T>,
    fails: F,
    violation: V,
) -> Option<Violation>
where
    F: FnOnce(&T, Option<&T>) -> bool,
    V: FnOnce() -> Violation,
{
    let value = value?;
    is_false_with(|| fails(&value, other.as_ref()), violation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeValue;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn other_of(violation: &Violation) -> &AttributeValue {
        &violation.attributes().unwrap()["other"]
    }

    #[test]
    fn absent_value_is_skipped() {
        assert!(after::<i32>("f", None, Some(1)).is_none());
        assert!(after_or_equal::<NaiveDate>("date", None, None).is_none());
        assert!(before::<i32>("f", None, None).is_none());
        assert!(before_or_equal::<i32>("f", None, Some(1)).is_none());
        assert!(equals_to::<i32>("f", None, Some(1)).is_none());
        assert!(not_equals_to::<i32>("f", None, Some(1)).is_none());
    }

    #[test]
    fn absent_other_fails_ordering_assertions() {
        for violation in [
            after("f", Some(1), None),
            after_or_equal("f", Some(1), None),
            before("f", Some(1), None),
            before_or_equal("f", Some(1), None),
            equals_to("f", Some(1), None),
        ] {
            let violation = violation.expect("absent bound must fail");
            assert!(other_of(&violation).is_null());
            assert_eq!(violation.attributes().unwrap().len(), 1);
        }
    }

    #[test]
    fn absent_other_never_equals() {
        assert!(not_equals_to("f", Some(1), None).is_none());
    }

    #[test]
    fn after_over_dates() {
        let start = date(2024, 1, 1);
        let end = date(2024, 6, 1);

        assert!(after("end", Some(end), Some(start)).is_none());

        let violation = after("end", Some(start), Some(start)).unwrap();
        assert_eq!(violation.message(), VALUE_IS_BEFORE_OR_EQUAL);
        assert_eq!(violation.details(), "The value is before or equal the other value.");
        assert_eq!(
            other_of(&violation),
            &AttributeValue::Str("2024-01-01".to_string())
        );
    }

    #[test]
    fn after_or_equal_accepts_equal() {
        assert!(after_or_equal("f", Some(5), Some(5)).is_none());
        assert_eq!(
            after_or_equal("f", Some(4), Some(5)).unwrap().message(),
            VALUE_IS_BEFORE
        );
    }

    #[test]
    fn before_rejects_equal() {
        assert!(before("f", Some(4), Some(5)).is_none());
        assert_eq!(
            before("f", Some(5), Some(5)).unwrap().message(),
            VALUE_IS_AFTER_OR_EQUAL
        );
    }

    #[test]
    fn before_or_equal_accepts_equal() {
        assert!(before_or_equal("f", Some(5), Some(5)).is_none());
        assert_eq!(
            before_or_equal("f", Some(6), Some(5)).unwrap().message(),
            VALUE_IS_AFTER
        );
    }

    #[test]
    fn equals_to_reports_other() {
        assert!(equals_to("f", Some(2.5), Some(2.5)).is_none());

        let violation = equals_to("f", Some(1), Some(2)).unwrap();
        assert_eq!(violation.message(), VALUE_IS_NOT_EQUAL);
        assert_eq!(other_of(&violation), &AttributeValue::Str("2".to_string()));
    }

    #[test]
    fn not_equals_to_rejects_equal() {
        assert!(not_equals_to("f", Some("a"), Some("b")).is_none());

        let violation = not_equals_to("f", Some("a"), Some("a")).unwrap();
        assert_eq!(violation.message(), VALUE_IS_EQUAL);
        assert_eq!(violation.details(), "The value is equal to the other value.");
    }

    #[test]
    fn unordered_values_fail_ordering_assertions() {
        assert!(after("f", Some(f64::NAN), Some(1.0)).is_some());
        assert!(before_or_equal("f", Some(f64::NAN), Some(1.0)).is_some());
        assert!(equals_to("f", Some(f64::NAN), Some(f64::NAN)).is_some());
        assert!(not_equals_to("f", Some(f64::NAN), Some(f64::NAN)).is_none());
    }

    #[test]
    fn compare_with_skips_absent_value() {
        let called = std::cell::Cell::new(false);
        let result = compare_with(
            None::<i32>,
            Some(1),
            |_, _| {
                called.set(true);
                true
            },
            || Violation::of("f", "m", "d"),
        );

        assert!(result.is_none());
        assert!(!called.get());
    }

    #[test]
    fn compare_with_reports_when_comparator_fails() {
        let start = date(2024, 3, 1);
        let too_far = |v: &NaiveDate, o: Option<&NaiveDate>| {
            o.map_or(true, |o| (*v - *o).num_days() > 30)
        };
        let violation =
            || Violation::of("period.end", "period.too.long", "The period is too long.");

        assert!(compare_with(Some(date(2024, 3, 20)), Some(start), too_far, violation).is_none());
        assert_eq!(
            compare_with(Some(date(2024, 5, 1)), Some(start), too_far, violation),
            Some(violation())
        );
    }

    #[test]
    fn compare_with_passes_absent_other() {
        let seen = compare_with(
            Some("x"),
            None,
            |_, other| other.is_none(),
            || Violation::of("f", "m", "d"),
        );

        assert_eq!(seen.unwrap().field_path(), "f");
    }
}

//! Lazy forms of every rule.
//!
//! Each function captures its arguments and returns a [`LazyRule`] that
//! runs the eager rule of the same name when evaluated. Guards on the
//! arguments themselves (`min > max`, an invalid pattern) run immediately,
//! so a malformed rule panics where it is written rather than inside the
//! engine.

use super::error::ensure_ordered;
use super::{compare, numeric, predicate, presence, string};
use crate::core::{AttributeValue, LazyRule, Violation};
use num_traits::Zero;
use std::fmt::Display;

/// Lazy [`predicate::is_true`].
///
/// # Example
///
/// ```rust
/// use verdict::core::Violation;
/// use verdict::rules::lazy;
///
/// let existing = vec!["ada"];
/// let rule = lazy::is_false(
///     || existing.contains(&"ada"),
///     Violation::of("general", "user.duplicate.name", "The provided name is already used."),
/// );
///
/// assert!(rule.evaluate().is_some());
/// ```
pub fn is_true<'a, C>(condition: C, violation: Violation) -> LazyRule<'a>
where
    C: Fn() -> bool + Send + Sync + 'a,
{
    LazyRule::new(move || predicate::is_true_with(&condition, || violation.clone()))
}

/// Lazy [`predicate::is_false`].
pub fn is_false<'a, C>(condition: C, violation: Violation) -> LazyRule<'a>
where
    C: Fn() -> bool + Send + Sync + 'a,
{
    LazyRule::new(move || predicate::is_false_with(&condition, || violation.clone()))
}

/// Lazy [`predicate::is_true_with`].
pub fn is_true_with<'a, C, V>(condition: C, violation: V) -> LazyRule<'a>
where
    C: Fn() -> bool + Send + Sync + 'a,
    V: Fn() -> Violation + Send + Sync + 'a,
{
    LazyRule::new(move || predicate::is_true_with(&condition, &violation))
}

/// Lazy [`predicate::is_false_with`].
pub fn is_false_with<'a, C, V>(condition: C, violation: V) -> LazyRule<'a>
where
    C: Fn() -> bool + Send + Sync + 'a,
    V: Fn() -> Violation + Send + Sync + 'a,
{
    LazyRule::new(move || predicate::is_false_with(&condition, &violation))
}

/// Lazy [`presence::is_null`].
pub fn is_null<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || presence::is_null(&field, value.as_ref()))
}

/// Lazy [`presence::not_null`].
pub fn not_null<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || presence::not_null(&field, value.as_ref()))
}

/// Lazy [`string::empty`].
pub fn empty<'a>(field: impl Into<String>, value: Option<&'a str>) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::empty(&field, value))
}

/// Lazy [`string::not_empty`].
pub fn not_empty<'a>(field: impl Into<String>, value: Option<&'a str>) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::not_empty(&field, value))
}

/// Lazy [`string::blank`].
pub fn blank<'a>(field: impl Into<String>, value: Option<&'a str>) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::blank(&field, value))
}

/// Lazy [`string::not_blank`].
pub fn not_blank<'a>(field: impl Into<String>, value: Option<&'a str>) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::not_blank(&field, value))
}

/// Lazy [`string::length_between`].
///
/// # Panics
///
/// Panics with `min is greater than max` at construction when `min > max`.
#[track_caller]
pub fn length_between<'a>(
    field: impl Into<String>,
    value: Option<&'a str>,
    min: usize,
    max: usize,
) -> LazyRule<'a> {
    ensure_ordered(&min, &max);
    let field = field.into();
    LazyRule::new(move || string::length_between(&field, value, min, max))
}

/// Lazy [`string::match_regex`]. The pattern is compiled once, here.
///
/// # Panics
///
/// Panics at construction when `pattern` is not a valid regular expression.
#[track_caller]
pub fn match_regex<'a>(
    field: impl Into<String>,
    value: Option<&'a str>,
    pattern: impl Into<String>,
) -> LazyRule<'a> {
    let field = field.into();
    let pattern = pattern.into();
    let regex = string::compile_anchored(&pattern);
    LazyRule::new(move || string::match_compiled(&field, value, &regex, &pattern))
}

/// Lazy [`string::equals_to_str`].
pub fn equals_to_str<'a>(
    field: impl Into<String>,
    value: Option<&'a str>,
    other: Option<&'a str>,
) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::equals_to_str(&field, value, other))
}

/// Lazy [`string::not_equals_to_str`].
pub fn not_equals_to_str<'a>(
    field: impl Into<String>,
    value: Option<&'a str>,
    other: Option<&'a str>,
) -> LazyRule<'a> {
    let field = field.into();
    LazyRule::new(move || string::not_equals_to_str(&field, value, other))
}

/// Lazy [`numeric::in_range`].
///
/// # Panics
///
/// Panics with `min is greater than max` at construction when `min > max`.
#[track_caller]
pub fn in_range<'a, T>(field: impl Into<String>, value: Option<T>, min: T, max: T) -> LazyRule<'a>
where
    T: PartialOrd + Into<AttributeValue> + Clone + Send + Sync + 'a,
{
    ensure_ordered(&min, &max);
    let field = field.into();
    LazyRule::new(move || numeric::in_range(&field, value.clone(), min.clone(), max.clone()))
}

/// Lazy [`numeric::min`].
pub fn min<'a, T>(field: impl Into<String>, value: Option<T>, min: T) -> LazyRule<'a>
where
    T: PartialOrd + Into<AttributeValue> + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::min(&field, value.clone(), min.clone()))
}

/// Lazy [`numeric::max`].
pub fn max<'a, T>(field: impl Into<String>, value: Option<T>, max: T) -> LazyRule<'a>
where
    T: PartialOrd + Into<AttributeValue> + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::max(&field, value.clone(), max.clone()))
}

/// Lazy [`numeric::positive`].
pub fn positive<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Zero + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::positive(&field, value.clone()))
}

/// Lazy [`numeric::positive_or_zero`].
pub fn positive_or_zero<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Zero + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::positive_or_zero(&field, value.clone()))
}

/// Lazy [`numeric::negative`].
pub fn negative<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Zero + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::negative(&field, value.clone()))
}

/// Lazy [`numeric::negative_or_zero`].
pub fn negative_or_zero<'a, T>(field: impl Into<String>, value: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Zero + Clone + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || numeric::negative_or_zero(&field, value.clone()))
}

/// Lazy [`compare::after`].
pub fn after<'a, T>(field: impl Into<String>, value: Option<T>, other: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::after(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::after_or_equal`].
pub fn after_or_equal<'a, T>(
    field: impl Into<String>,
    value: Option<T>,
    other: Option<T>,
) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::after_or_equal(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::before`].
pub fn before<'a, T>(field: impl Into<String>, value: Option<T>, other: Option<T>) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::before(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::before_or_equal`].
pub fn before_or_equal<'a, T>(
    field: impl Into<String>,
    value: Option<T>,
    other: Option<T>,
) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::before_or_equal(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::equals_to`].
pub fn equals_to<'a, T>(
    field: impl Into<String>,
    value: Option<T>,
    other: Option<T>,
) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::equals_to(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::not_equals_to`].
pub fn not_equals_to<'a, T>(
    field: impl Into<String>,
    value: Option<T>,
    other: Option<T>,
) -> LazyRule<'a>
where
    T: PartialOrd + Display + Send + Sync + 'a,
{
    let field = field.into();
    LazyRule::new(move || compare::not_equals_to(&field, value.as_ref(), other.as_ref()))
}

/// Lazy [`compare::compare_with`]. Neither closure runs before evaluation.
pub fn compare_with<'a, T, F, V>(
    value: Option<T>,
    other: Option<T>,
    fails: F,
    violation: V,
) -> LazyRule<'a>
where
    T: Send + Sync + 'a,
    F: Fn(&T, Option<&T>) -> bool + Send + Sync + 'a,
    V: Fn() -> Violation + Send + Sync + 'a,
{
    LazyRule::new(move || {
        compare::compare_with(
            value.as_ref(),
            other.as_ref(),
            |v, o| fails(*v, o.copied()),
            &violation,
        )
    })
}

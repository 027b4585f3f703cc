//! String rules.
//!
//! Except for [`empty`] and [`blank`], an absent string is reported as
//! `value.is.required`.

use super::error::{ensure_ordered, raise, RuleError};
use super::predicate::{is_false_with, is_true_with};
use super::{other_attribute, required};
use crate::core::{Attributes, Violation};
use regex::Regex;

pub const VALUE_IS_NOT_EMPTY: &str = "value.is.not.empty";
pub const VALUE_IS_NOT_BLANK: &str = "value.is.not.blank";
pub const STRING_VALUE_NOT_BETWEEN: &str = "string.value.not.between";
pub const STRING_VALUE_REGEX_NO_MATCH: &str = "string.value.regex.no.match";
pub const VALUE_IS_NOT_EQUAL: &str = "value.is.not.equal";
pub const VALUE_IS_EQUAL: &str = "value.is.equal";

fn is_empty(value: Option<&str>) -> bool {
    value.map_or(true, str::is_empty)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.chars().all(char::is_whitespace))
}

/// Fails when the string has at least one character. Absent counts as empty.
pub fn empty(field: &str, value: Option<&str>) -> Option<Violation> {
    is_true_with(
        || is_empty(value),
        || Violation::of(field, VALUE_IS_NOT_EMPTY, "The value is not empty."),
    )
}

/// Fails when the string is absent or has zero length.
pub fn not_empty(field: &str, value: Option<&str>) -> Option<Violation> {
    is_false_with(|| is_empty(value), || required(field))
}

/// Fails unless the string is absent, empty or whitespace only.
pub fn blank(field: &str, value: Option<&str>) -> Option<Violation> {
    is_true_with(
        || is_blank(value),
        || Violation::of(field, VALUE_IS_NOT_BLANK, "The value is not blank."),
    )
}

/// Fails when the string is absent, empty or whitespace only.
pub fn not_blank(field: &str, value: Option<&str>) -> Option<Violation> {
    is_false_with(|| is_blank(value), || required(field))
}

/// Fails when the character count falls outside `min..=max`.
///
/// # Panics
///
/// Panics with `min is greater than max` when `min > max`, whatever the value.
#[track_caller]
pub fn length_between(
    field: &str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Option<Violation> {
    ensure_ordered(&min, &max);
    let Some(value) = value else {
        return Some(required(field));
    };

    let length = value.chars().count();
    is_true_with(
        || (min..=max).contains(&length),
        || {
            let mut attributes = Attributes::new();
            attributes.insert("min".to_string(), min.into());
            attributes.insert("max".to_string(), max.into());
            Violation::with_attributes(
                field,
                STRING_VALUE_NOT_BETWEEN,
                "Value is not in range.",
                Some(attributes),
            )
        },
    )
}

/// Fails unless the whole string matches `pattern`.
///
/// # Panics
///
/// Panics when `pattern` is not a valid regular expression.
#[track_caller]
pub fn match_regex(field: &str, value: Option<&str>, pattern: &str) -> Option<Violation> {
    let regex = compile_anchored(pattern);
    match_compiled(field, value, &regex, pattern)
}

/// Compile `pattern` so that it must match the entire input.
#[track_caller]
pub(crate) fn compile_anchored(pattern: &str) -> Regex {
    // The bare pattern must compile on its own, or it could close the
    // wrapping group and escape the anchors.
    let anchored = Regex::new(pattern).and_then(|_| Regex::new(&format!("^(?:{pattern})$")));
    match anchored {
        Ok(regex) => regex,
        Err(e) => raise(RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }),
    }
}

pub(crate) fn match_compiled(
    field: &str,
    value: Option<&str>,
    regex: &Regex,
    pattern: &str,
) -> Option<Violation> {
    let Some(value) = value else {
        return Some(required(field));
    };

    is_true_with(
        || regex.is_match(value),
        || {
            let mut attributes = Attributes::new();
            attributes.insert("regexPattern".to_string(), pattern.into());
            Violation::with_attributes(
                field,
                STRING_VALUE_REGEX_NO_MATCH,
                "Value does not match the expected regex.",
                Some(attributes),
            )
        },
    )
}

/// Fails unless the string equals `other`. An absent `other` never matches.
pub fn equals_to_str(field: &str, value: Option<&str>, other: Option<&str>) -> Option<Violation> {
    let Some(value) = value else {
        return Some(required(field));
    };

    is_true_with(
        || other == Some(value),
        || {
            Violation::with_attributes(
                field,
                VALUE_IS_NOT_EQUAL,
                "The value is not equal to the other value.",
                Some(other_attribute(other)),
            )
        },
    )
}

/// Fails when the string equals `other`.
pub fn not_equals_to_str(
    field: &str,
    value: Option<&str>,
    other: Option<&str>,
) -> Option<Violation> {
    let Some(value) = value else {
        return Some(required(field));
    };

    is_false_with(
        || other == Some(value),
        || {
            Violation::with_attributes(
                field,
                VALUE_IS_EQUAL,
                "The value is equal to the other value.",
                Some(other_attribute(other)),
            )
        },
    )
}

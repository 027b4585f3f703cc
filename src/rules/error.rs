//! Programmer errors raised while building a rule.

use thiserror::Error;

/// A rule was invoked with arguments that can never describe a valid check.
///
/// These are bugs in the calling code, not validation outcomes, so rules
/// panic with this error's message instead of returning a `Violation`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RuleError {
    #[error("min is greater than max")]
    MinGreaterThanMax,

    #[error("regex is invalid: {pattern} ({reason})")]
    InvalidPattern { pattern: String, reason: String },
}

#[track_caller]
pub(crate) fn raise(error: RuleError) -> ! {
    panic!("{error}")
}

/// Panic unless `min <= max`.
#[track_caller]
pub(crate) fn ensure_ordered<T: PartialOrd + ?Sized>(min: &T, max: &T) {
    if min > max {
        raise(RuleError::MinGreaterThanMax);
    }
}

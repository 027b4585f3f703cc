//! Deferred rule evaluation.
//!
//! A lazy rule wraps a check without running it. The engine decides when
//! (and whether) to evaluate it, which is what lets find-first validation
//! skip expensive checks once an earlier rule has failed.

use super::violation::Violation;
use std::fmt;

/// Zero-argument deferred rule producing an optional violation.
///
/// The closure captures its inputs at construction time; the check itself
/// only runs inside [`evaluate`](LazyRule::evaluate).
///
/// # Example
///
/// ```rust
/// use verdict::core::{LazyRule, Violation};
///
/// let name = "";
/// let rule = LazyRule::new(move || {
///     name.is_empty()
///         .then(|| Violation::of("name", "value.is.required", "The value is required."))
/// });
///
/// assert!(rule.evaluate().is_some());
/// ```
pub struct LazyRule<'a> {
    check: Box<dyn Fn() -> Option<Violation> + Send + Sync + 'a>,
}

impl<'a> LazyRule<'a> {
    /// Wrap a check closure without evaluating it.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn() -> Option<Violation> + Send + Sync + 'a,
    {
        LazyRule {
            check: Box::new(check),
        }
    }

    /// A rule that always passes.
    pub fn pass() -> Self {
        Self::new(|| None)
    }

    /// A rule that always yields the given violation.
    pub fn fail(violation: Violation) -> Self {
        Self::new(move || Some(violation.clone()))
    }

    /// Run the check.
    pub fn evaluate(&self) -> Option<Violation> {
        (self.check)()
    }
}

impl fmt::Debug for LazyRule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyRule").finish_non_exhaustive()
    }
}

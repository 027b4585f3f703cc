//! The stop condition raised when a batch of violations must abort processing.

use crate::core::Violation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Error carrying the violations that stopped processing.
///
/// Callers propagate it with `?`; the layer that catches it reads
/// [`violations`](ValidationError::violations) to build its response.
/// The message embeds every violation for logging:
/// `Violations: [{field='…', message='…', details='…', attributes=…}, …]`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Violations: [{}]", render(.violations))]
pub struct ValidationError {
    violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Wrap a batch. The vector is moved in, not copied.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// The violations in evaluation order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Convert into the accumulating `Validation` form.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<Violation>> {
        super::to_validation(self.violations)
    }
}

impl From<Violation> for ValidationError {
    fn from(violation: Violation) -> Self {
        Self::new(vec![violation])
    }
}

/// Stop with the whole batch if it holds at least one violation.
///
/// # Example
///
/// ```rust
/// use verdict::core::Violation;
/// use verdict::engine::stop_if_violations;
///
/// assert!(stop_if_violations(Vec::<Violation>::new()).is_ok());
///
/// let err = stop_if_violations(vec![Violation::of("f", "m", "d")]).unwrap_err();
/// assert_eq!(err.violations().len(), 1);
/// ```
pub fn stop_if_violations(
    violations: impl Into<Option<Vec<Violation>>>,
) -> Result<(), ValidationError> {
    match violations.into() {
        Some(violations) if !violations.is_empty() => {
            tracing::debug!(count = violations.len(), "stopping on violations");
            Err(ValidationError::new(violations))
        }
        _ => Ok(()),
    }
}

/// Stop with a single violation if one is present.
pub fn stop_if_violation(violation: Option<Violation>) -> Result<(), ValidationError> {
    match violation {
        Some(violation) => {
            tracing::debug!(field = violation.field_path(), "stopping on violation");
            Err(violation.into())
        }
        None => Ok(()),
    }
}

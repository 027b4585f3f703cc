//! Boolean predicate primitives.
//!
//! Every other rule is expressed through these: a condition that must hold
//! and the violation reported when it does not.

use crate::core::Violation;

/// Return `violation` iff `condition` evaluates to `false`.
///
/// # Example
///
/// ```rust
/// use verdict::core::Violation;
/// use verdict::rules::predicate::is_true;
///
/// let taken = Violation::of("general", "user.duplicate.name", "The name is already used.");
/// assert!(is_true(|| 1 + 1 == 2, taken.clone()).is_none());
/// assert_eq!(is_true(|| false, taken.clone()), Some(taken));
/// ```
pub fn is_true<C>(condition: C, violation: Violation) -> Option<Violation>
where
    C: FnOnce() -> bool,
{
    is_true_with(condition, || violation)
}

/// Return `violation` iff `condition` evaluates to `true`.
pub fn is_false<C>(condition: C, violation: Violation) -> Option<Violation>
where
    C: FnOnce() -> bool,
{
    is_false_with(condition, || violation)
}

/// Like [`is_true`], but only builds the violation when the condition fails.
pub fn is_true_with<C, V>(condition: C, violation: V) -> Option<Violation>
where
    C: FnOnce() -> bool,
    V: FnOnce() -> Violation,
{
    if condition() {
        None
    } else {
        Some(violation())
    }
}

/// Like [`is_false`], but only builds the violation when the condition holds.
pub fn is_false_with<C, V>(condition: C, violation: V) -> Option<Violation>
where
    C: FnOnce() -> bool,
    V: FnOnce() -> Violation,
{
    is_true_with(|| !condition(), violation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation() -> Violation {
        Violation::of("field.path", "message", "details")
    }

    #[test]
    fn is_true_passes_on_true() {
        assert!(is_true(|| true, violation()).is_none());
    }

    #[test]
    fn is_true_fails_on_false() {
        assert_eq!(is_true(|| false, violation()), Some(violation()));
    }

    #[test]
    fn is_false_passes_on_false() {
        assert!(is_false(|| false, violation()).is_none());
    }

    #[test]
    fn is_false_fails_on_true() {
        assert_eq!(is_false(|| true, violation()), Some(violation()));
    }

    #[test]
    fn builder_not_called_when_condition_holds() {
        let result = is_true_with(|| true, || panic!("violation must not be built"));
        assert!(result.is_none());
    }

    #[test]
    fn builder_called_once_on_failure() {
        let mut built = 0;
        let result = is_false_with(
            || true,
            || {
                built += 1;
                violation()
            },
        );

        assert_eq!(built, 1);
        assert_eq!(result, Some(violation()));
    }
}

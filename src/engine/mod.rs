//! Evaluation of rule batches.
//!
//! The engine takes an ordered batch of lazy rules and aggregates their
//! results under one of two strategies:
//!
//! - **collect-all** ([`validate_all`]): every rule runs, every violation is reported
//! - **find-first** ([`validate_find_first`]): evaluation stops at the first
//!   violation, so later (possibly expensive) rules never run
//!
//! Output order always equals input order; nothing is deduplicated. Absent
//! entries (`None`) in a batch are skipped. The engine keeps no state
//! between calls.
//!
//! # Example
//!
//! ```rust
//! use verdict::engine::{validate_all, validate_find_first};
//! use verdict::rules::lazy;
//!
//! let name = "  ";
//! let violations = validate_all(vec![
//!     lazy::not_null("id", None::<u64>),
//!     lazy::not_blank("name", Some(name)),
//! ]);
//! assert_eq!(violations.len(), 2);
//!
//! let first = validate_find_first(vec![
//!     lazy::not_null("id", None::<u64>),
//!     lazy::not_blank("name", Some(name)),
//! ]);
//! assert_eq!(first.len(), 1);
//! assert_eq!(first[0].field_path(), "id");
//! ```

mod error;
mod strategy;

pub use error::{stop_if_violation, stop_if_violations, ValidationError};
pub use strategy::EvaluationStrategy;

use crate::core::{LazyRule, Violation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Evaluate every rule in order and collect every violation.
pub fn validate_all<'a, I>(rules: I) -> Vec<Violation>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    let violations: Vec<Violation> = rules
        .into_iter()
        .enumerate()
        .filter_map(|(index, rule)| {
            let rule: Option<LazyRule<'a>> = rule.into();
            let rule = rule?;
            tracing::trace!(index, "evaluating rule");
            rule.evaluate()
        })
        .collect();

    tracing::debug!(count = violations.len(), "validated all rules");
    violations
}

/// Evaluate rules in order, stopping at the first violation.
///
/// Returns a one-element vector holding that violation, or an empty vector
/// when every rule passes.
pub fn validate_find_first<'a, I>(rules: I) -> Vec<Violation>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    for (index, rule) in rules.into_iter().enumerate() {
        let rule: Option<LazyRule<'a>> = rule.into();
        let Some(rule) = rule else {
            continue;
        };
        tracing::trace!(index, "evaluating rule");
        if let Some(violation) = rule.evaluate() {
            tracing::debug!(index, field = violation.field_path(), "first violation found");
            return vec![violation];
        }
    }
    Vec::new()
}

/// [`validate_all`], then stop if anything failed.
pub fn validate_all_and_stop_if_violations<'a, I>(rules: I) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    stop_if_violations(validate_all(rules))
}

/// [`validate_find_first`], then stop if a violation was found.
pub fn validate_find_first_and_stop_if_violation<'a, I>(rules: I) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    stop_if_violations(validate_find_first(rules))
}

/// Evaluate a batch with the given strategy.
pub fn validate<'a, I>(strategy: EvaluationStrategy, rules: I) -> Vec<Violation>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    match strategy {
        EvaluationStrategy::CollectAll => validate_all(rules),
        EvaluationStrategy::FindFirst => validate_find_first(rules),
    }
}

/// Evaluate a batch with the given strategy and stop on any violation.
pub fn validate_and_stop<'a, I>(
    strategy: EvaluationStrategy,
    rules: I,
) -> Result<(), ValidationError>
where
    I: IntoIterator,
    I::Item: Into<Option<LazyRule<'a>>>,
{
    stop_if_violations(validate(strategy, rules))
}

/// View a batch as an accumulated `Validation`.
///
/// An empty batch is a success; anything else is a failure holding every
/// violation in order.
pub fn to_validation(violations: Vec<Violation>) -> Validation<(), NonEmptyVec<Violation>> {
    let checks: Vec<Validation<(), NonEmptyVec<Violation>>> =
        violations.into_iter().map(Validation::fail).collect();
    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AttributeValue;
    use crate::rules::lazy;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn fail(name: &str) -> LazyRule<'static> {
        LazyRule::fail(Violation::of(name, "m", "d"))
    }

    fn counting<'a>(calls: &'a AtomicUsize, result: Option<Violation>) -> LazyRule<'a> {
        LazyRule::new(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            result.clone()
        })
    }

    #[test]
    fn validate_all_keeps_input_order() {
        let violations = validate_all(vec![fail("A"), LazyRule::pass(), fail("B")]);

        let paths: Vec<&str> = violations.iter().map(Violation::field_path).collect();
        assert_eq!(paths, vec!["A", "B"]);
    }

    #[test]
    fn validate_all_evaluates_every_rule() {
        let calls = AtomicUsize::new(0);
        let rules = vec![
            counting(&calls, Some(Violation::of("A", "m", "d"))),
            counting(&calls, None),
            counting(&calls, Some(Violation::of("B", "m", "d"))),
        ];

        validate_all(rules);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn validate_all_does_not_deduplicate() {
        let violations = validate_all(vec![fail("A"), fail("A")]);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn absent_entries_are_skipped() {
        let rules: Vec<Option<LazyRule>> = vec![None, Some(fail("A")), None, Some(fail("B"))];
        assert_eq!(validate_all(rules).len(), 2);

        let rules: Vec<Option<LazyRule>> = vec![None, Some(fail("A"))];
        assert_eq!(validate_find_first(rules)[0].field_path(), "A");
    }

    #[test]
    fn empty_or_absent_batches_yield_nothing() {
        assert!(validate_all(Vec::<LazyRule>::new()).is_empty());
        assert!(validate_find_first(Vec::<LazyRule>::new()).is_empty());
        assert!(validate_all(None::<LazyRule>).is_empty());
        assert!(validate_find_first(None::<LazyRule>).is_empty());
    }

    #[test]
    fn find_first_short_circuits() {
        let second = AtomicUsize::new(0);
        let violations = validate_find_first(vec![
            fail("A"),
            counting(&second, Some(Violation::of("B", "m", "d"))),
        ]);

        assert_eq!(violations, vec![Violation::of("A", "m", "d")]);
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn find_first_runs_until_failure() {
        let calls = AtomicUsize::new(0);
        let violations = validate_find_first(vec![
            counting(&calls, None),
            counting(&calls, Some(Violation::of("B", "m", "d"))),
            counting(&calls, Some(Violation::of("C", "m", "d"))),
        ]);

        assert_eq!(violations[0].field_path(), "B");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn find_first_all_passing() {
        assert!(validate_find_first(vec![LazyRule::pass(), LazyRule::pass()]).is_empty());
    }

    #[test]
    fn stop_variants_propagate() {
        let error = validate_all_and_stop_if_violations(vec![fail("A"), fail("B")]).unwrap_err();
        assert_eq!(error.violations().len(), 2);

        let error =
            validate_find_first_and_stop_if_violation(vec![fail("A"), fail("B")]).unwrap_err();
        assert_eq!(error.violations().len(), 1);

        assert!(validate_all_and_stop_if_violations(vec![LazyRule::pass()]).is_ok());
        assert!(validate_find_first_and_stop_if_violation(Vec::<LazyRule>::new()).is_ok());
    }

    #[test]
    fn strategy_dispatch() {
        let rules = || vec![fail("A"), fail("B")];

        assert_eq!(validate(EvaluationStrategy::CollectAll, rules()).len(), 2);
        assert_eq!(validate(EvaluationStrategy::FindFirst, rules()).len(), 1);
        assert!(validate_and_stop(EvaluationStrategy::FindFirst, rules()).is_err());
        assert!(validate_and_stop(EvaluationStrategy::CollectAll, vec![LazyRule::pass()]).is_ok());
    }

    #[test]
    fn to_validation_accumulates() {
        assert!(to_validation(Vec::new()).is_success());

        match to_validation(vec![Violation::of("A", "m", "d"), Violation::of("B", "m", "d")]) {
            Validation::Failure(violations) => {
                let paths: Vec<&str> = violations.iter().map(Violation::field_path).collect();
                assert_eq!(paths, vec!["A", "B"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn error_converts_to_validation() {
        let error = ValidationError::from(Violation::of("A", "m", "d"));
        assert!(error.into_validation().is_failure());
    }

    #[test]
    fn end_to_end_required_and_length() {
        let violations = validate_all(vec![
            lazy::not_null("id", None::<u64>),
            lazy::not_blank("name", Some("  ")),
            lazy::length_between("name", Some(""), 1, 10),
        ]);

        let paths: Vec<&str> = violations.iter().map(Violation::field_path).collect();
        let messages: Vec<&str> = violations.iter().map(Violation::message).collect();
        assert_eq!(paths, vec!["id", "name", "name"]);
        assert_eq!(
            messages,
            vec!["value.is.required", "value.is.required", "string.value.not.between"]
        );

        let attributes = violations[2].attributes().unwrap();
        assert_eq!(attributes["min"], AttributeValue::Int(1));
        assert_eq!(attributes["max"], AttributeValue::Int(10));
    }

    #[test]
    fn batches_can_be_evaluated_on_another_thread() {
        let rules = vec![lazy::positive("amount", Some(-1)), lazy::not_blank("name", Some("x"))];
        let violations = std::thread::spawn(move || validate_all(rules)).join().unwrap();

        assert_eq!(violations.len(), 1);
    }
}

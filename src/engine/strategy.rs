//! Aggregation strategies.

use serde::{Deserialize, Serialize};

/// How the engine aggregates a batch of rules.
///
/// Deserializable so a host application can keep the choice in its own
/// configuration (`"collect_all"` / `"find_first"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationStrategy {
    /// Evaluate every rule and report every violation
    #[default]
    CollectAll,

    /// Stop at the first violation; later rules are never evaluated
    FindFirst,
}

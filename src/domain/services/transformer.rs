//! Document Transformer
//!
//! Applies an ordered rule list to one parsed document. Every rule is
//! independent: mutations only overwrite string members in place, so no rule
//! can move or remove what another rule addresses.

use serde_json::Value;
use tracing::debug;

use super::resolver::resolve;
use super::substitutor::{apply, SkipReason, Substitution};
use crate::domain::entities::SubstitutionRule;
use crate::domain::value_objects::Direction;

/// What happened to a single rule during a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The source value was replaced by the target value
    Replaced,
    /// The key path does not exist in the document
    Missing,
    /// The key path exists but the value was left alone
    Skipped(SkipReason),
}

impl RuleOutcome {
    pub fn is_change(&self) -> bool {
        matches!(self, RuleOutcome::Replaced)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleOutcome::Replaced => "replaced",
            RuleOutcome::Missing => "missing",
            RuleOutcome::Skipped(reason) => reason.as_str(),
        }
    }
}

impl From<Substitution> for RuleOutcome {
    fn from(substitution: Substitution) -> Self {
        match substitution {
            Substitution::Mutated => RuleOutcome::Replaced,
            Substitution::Skipped(reason) => RuleOutcome::Skipped(reason),
        }
    }
}

/// Document after a transformation plus what changed
#[derive(Debug, Clone, PartialEq)]
pub struct TransformResult {
    pub document: Value,
    /// True iff at least one rule replaced a value
    pub changed: bool,
    /// One outcome per rule, in rule order
    pub outcomes: Vec<RuleOutcome>,
}

/// Apply `rules` to an owned document.
pub fn transform(
    mut document: Value,
    rules: &[SubstitutionRule],
    direction: Direction,
) -> TransformResult {
    let outcomes = transform_in_place(&mut document, rules, direction);
    let changed = outcomes.iter().any(RuleOutcome::is_change);
    TransformResult {
        document,
        changed,
        outcomes,
    }
}

/// Apply `rules` to a borrowed document, returning one outcome per rule.
pub fn transform_in_place(
    document: &mut Value,
    rules: &[SubstitutionRule],
    direction: Direction,
) -> Vec<RuleOutcome> {
    rules
        .iter()
        .map(|rule| {
            let outcome = match resolve(document, &rule.key) {
                Some(location) => RuleOutcome::from(apply(location, rule, direction)),
                None => RuleOutcome::Missing,
            };
            debug!(key = %rule.key, %direction, outcome = outcome.as_str(), "rule applied");
            outcome
        })
        .collect()
}

//! Value Substitutor
//!
//! Equality-gated replacement: a value is only rewritten when it is exactly
//! the source value for the active direction. Anything else (the target value
//! from an earlier run, a manual override, a non-string) is left alone.

use serde_json::Value;

use super::resolver::Location;
use crate::domain::entities::SubstitutionRule;
use crate::domain::value_objects::Direction;

/// Why a resolved value was left untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Current value is a number, bool, null, array or object
    NotAString,
    /// Current value is a string other than the source value
    Mismatch,
    /// Rule declares the same working and committed value
    NoOpRule,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotAString => "not_a_string",
            SkipReason::Mismatch => "mismatch",
            SkipReason::NoOpRule => "noop_rule",
        }
    }
}

/// Result of applying one rule at one location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    Mutated,
    Skipped(SkipReason),
}

impl Substitution {
    pub fn is_mutated(&self) -> bool {
        matches!(self, Substitution::Mutated)
    }
}

/// Replace the value at `location` with the rule's target if it currently
/// holds the rule's source.
pub fn apply(
    mut location: Location<'_>,
    rule: &SubstitutionRule,
    direction: Direction,
) -> Substitution {
    let (source, target) = direction.select(&rule.working, &rule.committed);

    match location.get() {
        Value::String(current) if current == source => {}
        Value::String(_) => return Substitution::Skipped(SkipReason::Mismatch),
        _ => return Substitution::Skipped(SkipReason::NotAString),
    }
    if source == target {
        return Substitution::Skipped(SkipReason::NoOpRule);
    }

    location.set(Value::String(target.to_string()));
    Substitution::Mutated
}

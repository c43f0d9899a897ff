//! Substitution rule entity

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Direction, KeyPath};

/// A `(key, working, committed)` triple from one config pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub key: KeyPath,
    pub working: String,
    pub committed: String,
}

impl SubstitutionRule {
    /// Create a rule from an already-parsed key path
    pub fn new(key: KeyPath, working: impl Into<String>, committed: impl Into<String>) -> Self {
        Self {
            key,
            working: working.into(),
            committed: committed.into(),
        }
    }

    /// Value expected in the file before a run in `direction`
    pub fn source(&self, direction: Direction) -> &str {
        direction.select(&self.working, &self.committed).0
    }

    /// Value written in place of the source
    pub fn target(&self, direction: Direction) -> &str {
        direction.select(&self.working, &self.committed).1
    }

    /// A rule whose two values are equal can never change a file
    pub fn is_noop(&self) -> bool {
        self.working == self.committed
    }
}

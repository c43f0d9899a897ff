//! Direction Value Object
//!
//! Selects which declared value of a rule is expected in the file and which
//! one replaces it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction of a replacement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Working values become committed values (before a commit)
    ToCommitted,
    /// Committed values become working values (after checkout)
    ToWorking,
}

impl Direction {
    /// All directions
    pub const ALL: [Direction; 2] = [Direction::ToCommitted, Direction::ToWorking];

    /// Token used on the command line and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::ToCommitted => "to_committed",
            Direction::ToWorking => "to_working",
        }
    }

    /// The opposite direction
    pub fn reverse(self) -> Self {
        match self {
            Direction::ToCommitted => Direction::ToWorking,
            Direction::ToWorking => Direction::ToCommitted,
        }
    }

    /// Pick `(source, target)` from a `(working, committed)` pair
    pub fn select<'a>(&self, working: &'a str, committed: &'a str) -> (&'a str, &'a str) {
        match self {
            Direction::ToCommitted => (working, committed),
            Direction::ToWorking => (committed, working),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized direction token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction '{}' (expected 'to_committed' or 'to_working')",
            self.0
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to_committed" => Ok(Direction::ToCommitted),
            "to_working" => Ok(Direction::ToWorking),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

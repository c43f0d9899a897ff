//! Key Path Value Object
//!
//! A dotted path such as `database.connectionString` addressing a member
//! nested inside JSON objects. Array indices are not addressable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ReplaceError;

/// Segment separator
pub const SEPARATOR: char = '.';

/// A validated, non-empty sequence of object member names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a dotted path.
    ///
    /// Rejects the empty string and any empty segment (`a..b`, `.a`, `a.`).
    pub fn parse(raw: &str) -> Result<Self, ReplaceError> {
        if raw.is_empty() {
            return Err(ReplaceError::InvalidKeyPath {
                key: raw.to_string(),
                reason: "key path is empty".to_string(),
            });
        }

        let mut segments = Vec::new();
        for (index, segment) in raw.split(SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(ReplaceError::InvalidKeyPath {
                    key: raw.to_string(),
                    reason: format!("segment {} is empty", index + 1),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// All segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments leading to the parent object of the addressed member
    pub fn parents(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Member name addressed inside the parent object
    pub fn leaf(&self) -> &str {
        // Construction guarantees at least one segment
        &self.segments[self.segments.len() - 1]
    }

    /// Number of segments (always >= 1)
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for KeyPath {
    type Err = ReplaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

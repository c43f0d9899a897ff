//! Pattern entity
//!
//! A validated config pattern: which files to touch, how to indent them, and
//! which rules to apply.

use super::rule::SubstitutionRule;

/// Indentation used when a pattern does not set one
pub const DEFAULT_INDENT: usize = 2;

/// Files selected by one glob and the rules applied to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Glob expression, `**` matches across directories
    pub path: String,
    /// Indentation width for re-serialized files
    pub indent: usize,
    /// Rules applied in order
    pub rules: Vec<SubstitutionRule>,
}

impl Pattern {
    pub fn new(path: impl Into<String>, rules: Vec<SubstitutionRule>) -> Self {
        Self {
            path: path.into(),
            indent: DEFAULT_INDENT,
            rules,
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

//! Configuration type definitions
//!
//! The YAML file deserializes into the `Raw*` types; `Config` holds the
//! validated patterns the use case runs with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Pattern, DEFAULT_INDENT};
use crate::error::ReplaceResult;

use super::loader::{self, ConfigWarning};

/// One `{key, working, committed}` entry as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRule {
    pub key: String,
    pub working: String,
    pub committed: String,
}

/// One pattern entry as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPattern {
    pub path: String,

    #[serde(default = "default_indent")]
    pub indent: usize,

    pub keys: Vec<RawRule>,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

/// Top-level document of the config file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RawConfig {
    #[serde(default)]
    pub patterns: Vec<RawPattern>,
}

/// Validated configuration, immutable for the duration of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub patterns: Vec<Pattern>,
}

impl Config {
    /// Load and validate a YAML config file
    pub fn load(path: &Path) -> ReplaceResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ReplaceResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse and validate YAML content; `source` names the file in errors
    pub fn from_yaml_str(content: &str, source: &Path) -> ReplaceResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, source)
    }

    /// Apply environment variable overrides (JSON_REPLACE_* prefix)
    pub fn with_env_overrides(self) -> ReplaceResult<Self> {
        loader::with_env_overrides(self)
    }

    /// Total number of rules across all patterns
    pub fn rule_count(&self) -> usize {
        self.patterns.iter().map(|p| p.rules.len()).sum()
    }
}

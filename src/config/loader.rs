//! Configuration loading and validation

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::entities::{Pattern, SubstitutionRule};
use crate::domain::value_objects::KeyPath;
use crate::error::{ReplaceError, ReplaceResult};

use super::types::{Config, RawConfig};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".json-replace.yaml";

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "JSON_REPLACE_CONFIG";

/// Environment variable forcing one indentation width for every pattern
pub const INDENT_ENV: &str = "JSON_REPLACE_INDENT";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Pick the config file: explicit flag, then `JSON_REPLACE_CONFIG`, then the default name
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    resolve_config_path_with(explicit, |name| std::env::var(name).ok())
}

fn resolve_config_path_with(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match lookup(CONFIG_ENV) {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReplaceResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ReplaceError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse YAML content, then validate every pattern and rule.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ReplaceResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();

    // An empty file is an empty config, not a YAML error
    let raw: RawConfig = if content.trim().is_empty() {
        RawConfig::default()
    } else {
        let deserializer = serde_yaml_ng::Deserializer::from_str(content);
        serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| ReplaceError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((validate(raw, path)?, warnings))
}

/// Turn the raw file model into validated patterns.
pub fn validate(raw: RawConfig, path: &Path) -> ReplaceResult<Config> {
    let invalid = |message: String| ReplaceError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let mut patterns = Vec::with_capacity(raw.patterns.len());
    for (pi, raw_pattern) in raw.patterns.into_iter().enumerate() {
        if raw_pattern.path.trim().is_empty() {
            return Err(invalid(format!("patterns[{pi}].path is empty")));
        }
        glob::Pattern::new(&raw_pattern.path).map_err(|e| ReplaceError::InvalidPattern {
            pattern: raw_pattern.path.clone(),
            message: e.to_string(),
        })?;

        let mut rules = Vec::with_capacity(raw_pattern.keys.len());
        for (ki, raw_rule) in raw_pattern.keys.into_iter().enumerate() {
            let key = KeyPath::parse(&raw_rule.key)
                .map_err(|e| invalid(format!("patterns[{pi}].keys[{ki}].key: {e}")))?;
            let rule = SubstitutionRule::new(key, raw_rule.working, raw_rule.committed);
            if rule.is_noop() {
                warn!(
                    key = %rule.key,
                    "patterns[{}].keys[{}] has identical working and committed values",
                    pi,
                    ki
                );
            }
            rules.push(rule);
        }

        if rules.is_empty() {
            warn!(pattern = %raw_pattern.path, "pattern has no keys and will not change any file");
        }

        patterns.push(Pattern::new(raw_pattern.path, rules).with_indent(raw_pattern.indent));
    }

    Ok(Config { patterns })
}

/// Apply environment variable overrides (JSON_REPLACE_* prefix)
pub fn with_env_overrides(config: Config) -> ReplaceResult<Config> {
    apply_overrides(config, |name| std::env::var(name).ok())
}

fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> ReplaceResult<Config> {
    // JSON_REPLACE_INDENT
    if let Some(raw) = lookup(INDENT_ENV) {
        let indent: usize = raw.trim().parse().map_err(|_| ReplaceError::InvalidConfig {
            file: PathBuf::from(INDENT_ENV),
            message: format!("expected a non-negative integer, got '{raw}'"),
        })?;
        for pattern in &mut config.patterns {
            pattern.indent = indent;
        }
    }

    Ok(config)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["patterns", "path", "indent", "keys", "key", "working", "committed"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

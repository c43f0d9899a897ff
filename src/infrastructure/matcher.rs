//! Glob expansion for config patterns
//!
//! Relative patterns are anchored at a root directory. `*` and `?` stop at
//! path separators, `**` spans directories, and hidden entries only match
//! when the pattern spells out the leading dot.

use std::path::{Component, Path, PathBuf};

use glob::MatchOptions;
use tracing::warn;

use crate::error::{ReplaceError, ReplaceResult};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Regular files matching `pattern`, sorted and without duplicates.
///
/// An empty `root` means the current directory, in which case returned paths
/// stay relative.
pub fn expand(pattern: &str, root: &Path) -> ReplaceResult<Vec<PathBuf>> {
    let anchored = anchor(pattern, root);

    let entries = glob::glob_with(&anchored, MATCH_OPTIONS).map_err(|e| {
        ReplaceError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => warn!(pattern, error = %e, "skipping unreadable path"),
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn anchor(pattern: &str, root: &Path) -> String {
    if root.as_os_str().is_empty() || Path::new(pattern).is_absolute() {
        return pattern.to_string();
    }
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    format!("{}/{}", escaped_root.trim_end_matches('/'), pattern)
}

/// Drop `.` components so `./a/b.json` and `a/b.json` compare equal
pub fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

//! Differ Domain Service
//!
//! Renders the text change a replacement would make, for dry runs.

use similar::{ChangeTag, TextDiff};

/// Unified diff between two renderings of `path`
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}

/// Count of `(added, removed)` lines
pub fn line_changes(old: &str, new: &str) -> (usize, usize) {
    let diff = TextDiff::from_lines(old, new);
    diff.iter_all_changes()
        .fold((0, 0), |(added, removed), change| match change.tag() {
            ChangeTag::Insert => (added + 1, removed),
            ChangeTag::Delete => (added, removed + 1),
            ChangeTag::Equal => (added, removed),
        })
}

//! Replace Use Case
//!
//! Expands every config pattern, runs the substitution engine over each
//! matched file, and rewrites the files that changed. A file that cannot be
//! read or parsed is reported and skipped; the run carries on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::domain::entities::Pattern;
use crate::domain::ports::FileSystem;
use crate::domain::services::{
    line_changes, to_json_string, transform, unified_diff, SerializeOptions,
};
use crate::domain::value_objects::Direction;
use crate::error::{ReplaceError, ReplaceResult};
use crate::infrastructure::matcher;

/// Options for a replace run
#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    pub direction: Direction,
    /// Compute changes without writing them
    pub dry_run: bool,
    /// Attach a unified diff to every changed file
    pub diff: bool,
    /// Directory relative patterns are anchored at; empty means the current directory
    pub root: PathBuf,
    /// Restrict the run to these files (as passed by a pre-commit hook)
    pub only: Option<Vec<PathBuf>>,
}

impl ReplaceOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            dry_run: false,
            diff: false,
            root: PathBuf::new(),
            only: None,
        }
    }
}

/// Per-file status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum FileStatus {
    /// At least one rule replaced a value (written unless dry run)
    Modified,
    /// Every rule was a miss or a skip
    Unchanged,
    /// The file could not be read, parsed or written
    Failed(String),
}

/// Outcome of one rule against one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    pub key: String,
    pub outcome: &'static str,
}

/// Result of processing one matched file for one pattern
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub pattern: String,
    #[serde(flatten)]
    pub status: FileStatus,
    pub rules: Vec<RuleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
    pub lines_added: usize,
    pub lines_removed: usize,
}

/// Result of a replace run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplaceReport {
    pub files: Vec<FileReport>,
    pub dry_run: bool,
}

impl ReplaceReport {
    /// Files reported as modified, once per path
    pub fn modified_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self
            .files
            .iter()
            .filter(|f| f.status == FileStatus::Modified)
            .map(|f| f.path.as_path())
            .collect();
        paths.sort();
        paths.dedup();
        paths
    }

    /// Number of (pattern, file) pairs that changed
    pub fn modified(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.status == FileStatus::Modified)
            .count()
    }

    /// Number of (pattern, file) pairs that failed
    pub fn failed(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.status, FileStatus::Failed(_)))
            .count()
    }

    /// No file failed
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Replace Use Case
///
/// Holds the validated config and the file system port for one or more runs.
pub struct ReplaceUseCase<F: FileSystem> {
    config: Config,
    fs: F,
}

impl<F: FileSystem> ReplaceUseCase<F> {
    pub fn new(config: Config, fs: F) -> Self {
        Self { config, fs }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Execute a run over every pattern.
    ///
    /// Only glob failures abort; per-file problems land in the report.
    pub fn execute(&self, options: &ReplaceOptions) -> ReplaceResult<ReplaceReport> {
        let only: Option<Vec<PathBuf>> = options
            .only
            .as_ref()
            .map(|paths| paths.iter().map(|p| matcher::normalize(p)).collect());

        let mut report = ReplaceReport {
            files: Vec::new(),
            dry_run: options.dry_run,
        };

        for pattern in &self.config.patterns {
            let matches = matcher::expand(&pattern.path, &options.root)?;
            debug!(pattern = %pattern.path, matched = matches.len(), "expanded pattern");

            for path in matches {
                if let Some(only) = &only {
                    if !is_selected(&path, &options.root, only) {
                        continue;
                    }
                }
                report.files.push(self.process_file(&path, pattern, options));
            }
        }

        Ok(report)
    }

    /// Run one pattern's rules against one file.
    ///
    /// Read, parse, serialize and write failures only concern this file: they
    /// become `FileStatus::Failed` and the run goes on.
    pub fn process_file(&self, path: &Path, pattern: &Pattern, options: &ReplaceOptions) -> FileReport {
        let mut report = FileReport {
            path: path.to_path_buf(),
            pattern: pattern.path.clone(),
            status: FileStatus::Unchanged,
            rules: Vec::new(),
            diff: None,
            lines_added: 0,
            lines_removed: 0,
        };

        match self.rewrite(path, pattern, options, &mut report) {
            Ok(true) => {
                report.status = FileStatus::Modified;
                if options.dry_run {
                    info!(file = %path.display(), "would modify");
                } else {
                    info!(file = %path.display(), "modified");
                }
            }
            Ok(false) => debug!(file = %path.display(), "unchanged"),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "skipping file");
                report.status = FileStatus::Failed(e.to_string());
            }
        }

        report
    }

    fn rewrite(
        &self,
        path: &Path,
        pattern: &Pattern,
        options: &ReplaceOptions,
        report: &mut FileReport,
    ) -> ReplaceResult<bool> {
        let original = self.fs.read(path).map_err(|source| ReplaceError::FileSystem {
            file: path.to_path_buf(),
            source,
        })?;
        let document: Value = serde_json::from_str(&original).map_err(|source| ReplaceError::Parse {
            file: path.to_path_buf(),
            source,
        })?;

        let result = transform(document, &pattern.rules, options.direction);
        report.rules = pattern
            .rules
            .iter()
            .zip(&result.outcomes)
            .map(|(rule, outcome)| RuleReport {
                key: rule.key.to_string(),
                outcome: outcome.as_str(),
            })
            .collect();

        if !result.changed {
            return Ok(false);
        }

        let layout = SerializeOptions::matching(&original, pattern.indent);
        let rendered = to_json_string(&result.document, &layout).map_err(|source| {
            ReplaceError::Serialize {
                file: path.to_path_buf(),
                source,
            }
        })?;

        let (added, removed) = line_changes(&original, &rendered);
        report.lines_added = added;
        report.lines_removed = removed;
        if options.diff {
            report.diff = Some(unified_diff(&path.to_string_lossy(), &original, &rendered));
        }

        if !options.dry_run {
            self.fs
                .write(path, &rendered)
                .map_err(|source| ReplaceError::FileSystem {
                    file: path.to_path_buf(),
                    source,
                })?;
        }

        Ok(true)
    }
}

fn is_selected(path: &Path, root: &Path, only: &[PathBuf]) -> bool {
    let path = matcher::normalize(path);
    let relative = path.strip_prefix(matcher::normalize(root)).unwrap_or(&path);
    only.iter().any(|selected| selected == &path || selected == relative)
}

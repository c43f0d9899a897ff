//! Output Rendering
//!
//! Renders replace reports as text for humans or JSON for scripting.

use std::fmt::Write as _;
use std::path::Path;

use crate::application::{FileStatus, ReplaceReport};
use crate::config::ConfigWarning;
use crate::domain::value_objects::Direction;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

/// Trait for rendering replace reports
pub trait ReportRenderer {
    /// Render the report for a run in `direction`
    fn render(&self, report: &ReplaceReport, direction: Direction) -> String;
}

/// Text renderer for replace reports
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Verbosity level; 1+ lists untouched files and per-rule outcomes
    pub verbose: u8,
    /// Only failures and the failure count
    pub quiet: bool,
}

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &ReplaceReport, _direction: Direction) -> String {
        let verb = if report.dry_run { "Would modify" } else { "Modified" };
        let mut out = String::new();

        for file in &report.files {
            match &file.status {
                FileStatus::Failed(message) => {
                    let _ = writeln!(out, "Error: {}", message);
                    continue;
                }
                _ if self.quiet => continue,
                FileStatus::Modified => {
                    let _ = writeln!(out, "{}: {}", verb, file.path.display());
                }
                FileStatus::Unchanged if self.verbose > 0 => {
                    let _ = writeln!(out, "Unchanged: {}", file.path.display());
                }
                FileStatus::Unchanged => continue,
            }

            if self.verbose > 0 {
                for rule in &file.rules {
                    let _ = writeln!(out, "    {} [{}]", rule.key, rule.outcome);
                }
            }
            if let Some(diff) = &file.diff {
                out.push_str(diff);
                if !diff.ends_with('\n') {
                    out.push('\n');
                }
            }
        }

        if !self.quiet {
            let count = report.modified_paths().len();
            let noun = if count == 1 { "file" } else { "files" };
            let _ = writeln!(out, "{} {} {}", verb, count, noun);
        }
        if report.failed() > 0 {
            let _ = writeln!(out, "Failed to process {} file(s)", report.failed());
        }
        out
    }
}

/// JSON renderer for replace reports
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &ReplaceReport, direction: Direction) -> String {
        let json = serde_json::json!({
            "success": report.is_success(),
            "direction": direction,
            "dry_run": report.dry_run,
            "modified": report.modified_paths().len(),
            "failed": report.failed(),
            "files": report.files,
        });

        let mut out = serde_json::to_string_pretty(&json).unwrap_or_default();
        out.push('\n');
        out
    }
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat, verbose: u8, quiet: bool) -> Box<dyn ReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { verbose, quiet }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Describe unknown config keys, one block per warning
pub fn render_config_warnings(path: &Path, warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for w in warnings {
        if let Some(line) = w.line {
            let _ = writeln!(out, "⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            let _ = writeln!(out, "⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            let _ = writeln!(out, "   Did you mean '{}'?", suggestion);
        }
    }
    out
}

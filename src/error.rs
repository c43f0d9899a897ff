//! Error types for json-replace
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for json-replace operations
pub type ReplaceResult<T> = Result<T, ReplaceError>;

/// Main error type for json-replace operations
#[derive(Error, Debug)]
pub enum ReplaceError {
    /// Key path could not be split into non-empty segments
    #[error("invalid key path '{key}': {reason}")]
    InvalidKeyPath { key: String, reason: String },

    /// Configuration file is structurally wrong
    #[error("invalid config {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Glob pattern failed to compile
    #[error("invalid path pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Matched file is not valid JSON
    #[error("{} is not a valid JSON file: {source}", file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Document could not be re-serialized
    #[error("failed to serialize {}: {source}", file.display())]
    Serialize {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Matched file could not be read or written
    #[error("failed to access {}: {source}", file.display())]
    FileSystem {
        file: PathBuf,
        #[source]
        source: FsError,
    },
}

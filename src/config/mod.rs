//! Configuration module for json-replace
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (JSON_REPLACE_*)
//! 3. Config file (`.json-replace.yaml` unless told otherwise)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    resolve_config_path, validate, ConfigWarning, CONFIG_ENV, DEFAULT_CONFIG_FILE, INDENT_ENV,
};
pub use types::{Config, RawConfig, RawPattern, RawRule};

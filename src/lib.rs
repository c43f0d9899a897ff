//! json-replace - keep environment-specific values out of committed JSON
//!
//! A config maps key paths inside JSON files to a "working" value (used
//! locally) and a "committed" value (stored in version control). Running in
//! one direction swaps every matching value to the other state; running it
//! again is a no-op.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ReplaceOptions, ReplaceReport, ReplaceUseCase};
pub use config::Config;
pub use domain::entities::{Pattern, SubstitutionRule};
pub use domain::services::{resolve, to_json_string, transform, RuleOutcome, TransformResult};
pub use domain::value_objects::{Direction, KeyPath};
pub use error::{ReplaceError, ReplaceResult};

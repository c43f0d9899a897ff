//! Common test utilities for json-replace CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Fixtures: Reusable config and JSON content

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

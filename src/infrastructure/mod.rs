//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `matcher` - Glob expansion of config patterns

pub mod fs;
pub mod matcher;

// Re-export for convenience
pub use fs::{LocalFs, MemoryFs};

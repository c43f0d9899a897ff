//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReplaceUseCase` - Expand patterns, transform matched files, write changes

pub mod replace;

pub use replace::{
    FileReport, FileStatus, ReplaceOptions, ReplaceReport, ReplaceUseCase, RuleReport,
};

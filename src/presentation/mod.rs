//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use json_replace::presentation::factory;
//!
//! let use_case = factory::create_replace_use_case(config);
//! let report = use_case.execute(&options)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::create_replace_use_case;
pub use output::{create_renderer, render_config_warnings, OutputFormat, ReportRenderer};

//! Domain Entities
//!
//! - `SubstitutionRule` - one key path with its working and committed values
//! - `Pattern` - a file glob with the rules applied to every match

mod pattern;
mod rule;

pub use pattern::{Pattern, DEFAULT_INDENT};
pub use rule::SubstitutionRule;

//! Domain Services
//!
//! Stateless operations over parsed documents:
//!
//! - `differ` - line diff of a rewrite, for dry runs
//! - `resolver` - find the member a key path addresses
//! - `substitutor` - equality-gated replacement at one location
//! - `transformer` - apply a rule list to a whole document
//! - `serializer` - render a document back to text

pub mod differ;
pub mod resolver;
pub mod serializer;
pub mod substitutor;
pub mod transformer;

pub use differ::{line_changes, unified_diff};
pub use resolver::{resolve, Location};
pub use serializer::{to_json_string, SerializeOptions};
pub use substitutor::{apply, SkipReason, Substitution};
pub use transformer::{transform, transform_in_place, RuleOutcome, TransformResult};

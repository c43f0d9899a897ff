//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod direction;
mod key_path;

pub use direction::{Direction, ParseDirectionError};
pub use key_path::KeyPath;

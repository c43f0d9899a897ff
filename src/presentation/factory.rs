//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::ReplaceUseCase;
use crate::config::Config;
use crate::infrastructure::LocalFs;

/// Type alias for the concrete ReplaceUseCase working on the local disk
pub type ConcreteReplaceUseCase = ReplaceUseCase<LocalFs>;

/// Create a replace use case writing through the local file system
pub fn create_replace_use_case(config: Config) -> ConcreteReplaceUseCase {
    ReplaceUseCase::new(config, LocalFs::new())
}

//! Domain Layer
//!
//! The substitution engine - pure logic over parsed JSON without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Rules and patterns from the config
//! - `value_objects/` - Immutable value types (KeyPath, Direction)
//! - `services/` - Resolver, Substitutor, Transformer, Serializer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

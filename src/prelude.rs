//! Convenience re-exports for common usage.
//!
//! # Example
//!
//! ```ignore
//! use seedgen::prelude::*;
//!
//! // Now you have access to:
//! // - Entity and descriptor types
//! // - The generator and its options
//! // - Command types
//! // - Error types
//! ```

// Error types
pub use crate::error::{SeedError, SeedResult};

// Entity model
pub use crate::descriptor::{Entity, FieldDescriptor, FieldKind, TypeDescriptor};
pub use crate::value::{ToSeedValue, Value};

// Generation
pub use crate::generator::{SeedGenerator, gen_code, gen_code_all};
pub use crate::options::SeedOptions;
pub use crate::statement::{Assignment, Statement};

// Command types
pub use crate::commands::{GenSeedCommand, GenSeedOptions, GenSeedResult};

// Re-export the Entity derive macro when available
#[cfg(feature = "macros")]
pub use seedgen_macros::Entity;

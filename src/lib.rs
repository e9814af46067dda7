//! Seed data code generation from in-memory entity graphs.
//!
//! This crate turns an entity, and every entity it references, into an
//! ordered list of variable declarations that rebuild the same objects when
//! executed. The output is meant for seeding a data store during
//! development and testing:
//!
//! ```text
//! var topitem_1 = new TopItem {Id = 1, Name = @"I'm TopItem"};
//! var subitem1_2 = new SubItem1 {Id = 2, Name = @"I'm SubItem1", TopItem = topitem_1};
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use seedgen::prelude::*;
//!
//! #[derive(Entity)]
//! pub struct TopItem {
//!     #[seed(key)]
//!     pub id: i32,
//!     pub name: String,
//! }
//!
//! #[derive(Entity)]
//! pub struct SubItem1 {
//!     #[seed(key)]
//!     pub id: i32,
//!     pub name: String,
//!     pub top_item: TopItem,
//! }
//!
//! let lines = gen_code(&sub_item)?;
//! ```
//!
//! # Architecture
//!
//! - [`TypeDescriptor`] / [`Entity`] - Field metadata and value access for
//!   an entity type, usually derived with `#[derive(Entity)]`
//! - [`identity`] - Key lookup and variable naming
//! - [`encoder`] - Ordered literal rules for every supported value kind
//! - [`Decomposer`] - Dependency-ordered, deduplicated graph traversal
//! - [`SeedGenerator`] - Entry point for one root or a list of roots
//! - [`GenSeedCommand`](commands::GenSeedCommand) - Renders and writes code
//!
//! # Guarantees
//!
//! - Every statement comes after the statements of the entities it refers to.
//! - Each `(type, key)` pair produces at most one statement.
//! - Cyclic graphs fail with [`SeedError::CyclicReference`] instead of
//!   looping.
//!
//! # Features
//!
//! - `macros` - `#[derive(Entity)]` support (enabled by default)

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Lets `#[derive(Entity)]` resolve `::seedgen` inside this crate.
extern crate self as seedgen;

pub mod commands;
pub mod decomposer;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod identity;
pub mod options;
pub mod prelude;
pub mod statement;
pub mod value;

// Re-export commonly used types at crate root
pub use decomposer::Decomposer;
pub use descriptor::{Entity, FieldDescriptor, FieldKind, TypeDescriptor};
pub use encoder::{Literal, ValueEncoder, encode};
pub use error::{SeedError, SeedResult};
pub use generator::{SeedGenerator, gen_code, gen_code_all};
pub use identity::{identity_of, variable_name};
pub use options::SeedOptions;
pub use statement::{Assignment, Statement};
pub use value::{ToSeedValue, Value};

// Re-export derive macro when available
#[cfg(feature = "macros")]
pub use seedgen_macros::Entity;

#[doc(hidden)]
pub mod __private {
	pub use once_cell::sync::Lazy;
}

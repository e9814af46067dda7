//! Management commands.
//!
//! - [`GenSeedCommand`] - Render seed code for a set of root entities

mod genseed;

pub use genseed::{GenSeedCommand, GenSeedOptions, GenSeedResult};

//! Generation options.
//!
//! Options bound traversal and shape rendered output. They never change the
//! content or order of generated statements.

use serde::Deserialize;

use crate::error::{SeedError, SeedResult};

/// Options controlling seed generation.
///
/// # Example
///
/// ```
/// use seedgen::SeedOptions;
///
/// let options = SeedOptions::new()
///     .with_max_depth(16)
///     .with_line_ending("\r\n");
/// assert_eq!(options.max_depth, Some(16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedOptions {
	/// Maximum reference depth below a root. `None` means unbounded.
	pub max_depth: Option<usize>,

	/// Separator placed between statements when rendering a block.
	pub line_ending: String,

	/// Verbosity level.
	pub verbosity: u8,
}

impl SeedOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the maximum reference depth.
	pub fn with_max_depth(mut self, depth: usize) -> Self {
		self.max_depth = Some(depth);
		self
	}

	/// Sets the line ending used when rendering.
	pub fn with_line_ending(mut self, line_ending: impl Into<String>) -> Self {
		self.line_ending = line_ending.into();
		self
	}

	/// Sets verbosity level.
	pub fn with_verbosity(mut self, level: u8) -> Self {
		self.verbosity = level;
		self
	}

	/// Reads options from the `[seed]` table of a TOML document.
	///
	/// A missing table or missing keys fall back to defaults.
	///
	/// # Example
	///
	/// ```
	/// use seedgen::SeedOptions;
	///
	/// let options = SeedOptions::from_toml_str("[seed]\nmax_depth = 4\n").unwrap();
	/// assert_eq!(options.max_depth, Some(4));
	/// assert_eq!(options.line_ending, "\n");
	/// ```
	pub fn from_toml_str(source: &str) -> SeedResult<Self> {
		toml::from_str::<SeedConfig>(source)
			.map(|config| config.seed)
			.map_err(|e| SeedError::Config(e.to_string()))
	}
}

impl Default for SeedOptions {
	fn default() -> Self {
		Self {
			max_depth: None,
			line_ending: "\n".to_string(),
			verbosity: 0,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct SeedConfig {
	#[serde(default)]
	seed: SeedOptions,
}

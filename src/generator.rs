//! Seed code generation entry points.
//!
//! [`SeedGenerator`] runs the decomposer over one root or a list of roots
//! and renders the resulting statements.
//!
//! # Example
//!
//! ```ignore
//! use seedgen::prelude::*;
//!
//! let generator = SeedGenerator::new();
//! let statements = generator.generate_all(&[&order_one, &order_two])?;
//! println!("{}", generator.render(&statements));
//! ```

use crate::decomposer::Decomposer;
use crate::descriptor::Entity;
use crate::error::SeedResult;
use crate::options::SeedOptions;
use crate::statement::Statement;

/// Generates seed statements for entity graphs.
#[derive(Debug, Clone, Default)]
pub struct SeedGenerator {
	options: SeedOptions,
	decomposer: Decomposer,
}

impl SeedGenerator {
	/// Creates a generator with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator with the given options.
	pub fn with_options(options: SeedOptions) -> Self {
		let decomposer = Decomposer::new().with_max_depth(options.max_depth);
		Self {
			options,
			decomposer,
		}
	}

	/// Returns the configured options.
	pub fn options(&self) -> &SeedOptions {
		&self.options
	}

	/// Generates statements for a single root.
	///
	/// Every entity reachable from `root` appears exactly once, after all the
	/// entities it references. The root itself is always last.
	pub fn generate(&self, root: &dyn Entity) -> SeedResult<Vec<Statement>> {
		self.decomposer.decompose(root)
	}

	/// Generates statements for several roots.
	///
	/// Roots are generated independently, in order, and concatenated. A
	/// variable already emitted for an earlier root is skipped for later
	/// ones, including repeated roots.
	pub fn generate_all(&self, roots: &[&dyn Entity]) -> SeedResult<Vec<Statement>> {
		let statements = self.decomposer.decompose_all(roots)?;
		tracing::debug!(
			roots = roots.len(),
			statements = statements.len(),
			"generated seed statements"
		);
		Ok(statements)
	}

	/// Joins rendered statements with the configured line ending.
	pub fn render(&self, statements: &[Statement]) -> String {
		statements
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(&self.options.line_ending)
	}

	/// Generates code lines for a single root.
	pub fn gen_code(&self, root: &dyn Entity) -> SeedResult<Vec<String>> {
		Ok(to_lines(&self.generate(root)?))
	}

	/// Generates code lines for several roots.
	pub fn gen_code_all(&self, roots: &[&dyn Entity]) -> SeedResult<Vec<String>> {
		Ok(to_lines(&self.generate_all(roots)?))
	}
}

fn to_lines(statements: &[Statement]) -> Vec<String> {
	statements.iter().map(ToString::to_string).collect()
}

/// Generates code lines for a single object with default options.
pub fn gen_code(root: &dyn Entity) -> SeedResult<Vec<String>> {
	SeedGenerator::new().gen_code(root)
}

/// Generates code lines for a list of objects with default options.
pub fn gen_code_all(roots: &[&dyn Entity]) -> SeedResult<Vec<String>> {
	SeedGenerator::new().gen_code_all(roots)
}

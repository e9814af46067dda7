//! genseed command implementation.
//!
//! This command renders seed code for a list of root entities and can write
//! it to a file.

use std::path::PathBuf;

use crate::descriptor::Entity;
use crate::error::{SeedError, SeedResult};
use crate::generator::SeedGenerator;
use crate::options::SeedOptions;
use crate::statement::Statement;

/// Options for the genseed command.
#[derive(Debug, Clone, Default)]
pub struct GenSeedOptions {
	/// File to write the generated code to.
	pub output: Option<PathBuf>,

	/// Generation options.
	pub seed: SeedOptions,
}

impl GenSeedOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the output file.
	pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
		self.output = Some(path.into());
		self
	}

	/// Sets generation options.
	pub fn with_seed_options(mut self, seed: SeedOptions) -> Self {
		self.seed = seed;
		self
	}
}

/// Result of a genseed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenSeedResult {
	/// Generated statements in output order.
	pub statements: Vec<Statement>,

	/// Rendered code block.
	pub code: String,

	/// File the code was written to, if any.
	pub written_to: Option<PathBuf>,
}

/// The genseed command for rendering seed code.
///
/// # Example
///
/// ```ignore
/// let command = GenSeedCommand::new();
/// let options = GenSeedOptions::new().with_output("seed/orders.cs");
/// let result = command.execute(&[&order], options)?;
/// println!("Generated {} statements", result.statements.len());
/// ```
#[derive(Debug, Default)]
pub struct GenSeedCommand;

impl GenSeedCommand {
	/// Creates a new genseed command.
	pub fn new() -> Self {
		Self
	}

	/// Returns the command name.
	pub fn name(&self) -> &str {
		"genseed"
	}

	/// Returns the command description.
	pub fn description(&self) -> &str {
		"Generates seed code that reconstructs the given entities"
	}

	/// Returns the command help text.
	pub fn help(&self) -> &str {
		r#"
Usage: genseed [options]

Generates variable declarations that reconstruct the given entities,
dependencies first.

Options:
  --output, -o FILE    Write the generated code to FILE
  --max-depth N        Fail when references nest deeper than N
  --verbosity LEVEL    Verbosity level (0=minimal, 1=normal, 2=verbose)
"#
	}

	/// Executes the genseed command.
	///
	/// # Arguments
	///
	/// * `roots` - Root entities, in output order
	/// * `options` - Command options
	///
	/// # Returns
	///
	/// Returns the generated statements and rendered code.
	pub fn execute(
		&self,
		roots: &[&dyn Entity],
		options: GenSeedOptions,
	) -> SeedResult<GenSeedResult> {
		if roots.is_empty() {
			return Err(SeedError::Config(
				"at least one root entity must be supplied".to_string(),
			));
		}

		let verbosity = options.seed.verbosity;
		let generator = SeedGenerator::with_options(options.seed);
		let statements = generator.generate_all(roots)?;
		let code = generator.render(&statements);

		if let Some(path) = &options.output {
			let mut content = code.clone();
			content.push_str(&generator.options().line_ending);
			std::fs::write(path, content)?;
			tracing::info!(path = %path.display(), "wrote seed code");
		}

		if verbosity > 0 {
			println!("Generated {} statement(s)", statements.len());
		}

		Ok(GenSeedResult {
			statements,
			code,
			written_to: options.output,
		})
	}
}

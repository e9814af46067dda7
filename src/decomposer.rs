//! Graph decomposition.
//!
//! The decomposer walks an entity graph depth first, recording a statement
//! for each entity before any of the entities it references (pre-order).
//! Reversing that sequence once puts every dependency ahead of the entities
//! that use it. Repeat visits of the same variable are dropped afterwards,
//! keeping the earliest position in the reversed sequence.
//!
//! Traversal uses an explicit work stack, so deep graphs cannot exhaust the
//! call stack. A reference chain that returns to one of its own ancestors
//! fails with [`SeedError::CyclicReference`].

use std::collections::HashSet;

use crate::descriptor::{Entity, FieldDescriptor};
use crate::encoder::{Literal, ValueEncoder};
use crate::error::{SeedError, SeedResult};
use crate::identity::variable_name;
use crate::statement::{Assignment, Statement};
use crate::value::Value;

/// Identity of an in-memory instance, used for cycle detection only.
type InstanceId = (*const (), &'static str);

fn instance_id(entity: &dyn Entity) -> InstanceId {
	(
		std::ptr::from_ref(entity).cast::<()>(),
		entity.descriptor().type_name(),
	)
}

/// Decomposes entity graphs into ordered, deduplicated statements.
#[derive(Debug, Default, Clone)]
pub struct Decomposer {
	encoder: ValueEncoder,
	max_depth: Option<usize>,
}

impl Decomposer {
	/// Creates a decomposer with unbounded depth.
	pub fn new() -> Self {
		Self::default()
	}

	/// Limits how deep below a root references are followed.
	pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
		self.max_depth = depth;
		self
	}

	/// Decomposes a single root into dependency-ordered statements.
	///
	/// # Errors
	///
	/// Fails if any entity in the graph has no resolvable identity, if a
	/// value cannot be encoded, or on cycles and depth limit violations.
	pub fn decompose(&self, root: &dyn Entity) -> SeedResult<Vec<Statement>> {
		let mut visited = self.visit(root)?;
		visited.reverse();

		let mut seen = HashSet::new();
		let mut statements = Vec::with_capacity(visited.len());
		let skipped = retain_first(visited, &mut seen, &mut statements);
		tracing::debug!(
			root = %statements.last().map_or("", |s| s.variable.as_str()),
			statements = statements.len(),
			skipped,
			"decomposed entity graph"
		);
		Ok(statements)
	}

	/// Decomposes several roots, in order, into one statement list.
	///
	/// A variable already produced for an earlier root is skipped for every
	/// later root, so the first occurrence keeps its position.
	pub fn decompose_all(&self, roots: &[&dyn Entity]) -> SeedResult<Vec<Statement>> {
		let mut seen = HashSet::new();
		let mut statements = Vec::new();
		for root in roots {
			let skipped = retain_first(self.decompose(*root)?, &mut seen, &mut statements);
			tracing::debug!(skipped, total = statements.len(), "merged root statements");
		}
		Ok(statements)
	}

	/// Visits the graph below `root` in pre-order.
	///
	/// The result still contains repeat visits; [`Decomposer::decompose`]
	/// reverses and deduplicates it.
	pub fn visit<'a>(&self, root: &'a dyn Entity) -> SeedResult<Vec<Statement>> {
		let mut pending: Vec<(&'a dyn Entity, usize)> = vec![(root, 0)];
		let mut path: Vec<InstanceId> = Vec::new();
		let mut visited = Vec::new();

		while let Some((entity, depth)) = pending.pop() {
			if let Some(limit) = self.max_depth
				&& depth > limit
			{
				return Err(SeedError::DepthLimitExceeded { limit });
			}

			path.truncate(depth);
			let (statement, dependencies) = self.describe(entity)?;
			let id = instance_id(entity);
			if path.contains(&id) {
				return Err(SeedError::CyclicReference {
					variable: statement.variable,
				});
			}
			path.push(id);

			tracing::trace!(variable = %statement.variable, depth, "visited entity");
			visited.push(statement);
			// Reversed so the first declared dependency is popped first.
			pending.extend(dependencies.into_iter().rev().map(|dep| (dep, depth + 1)));
		}

		Ok(visited)
	}

	/// Builds the statement for one entity and lists the entities it uses.
	fn describe<'a>(
		&self,
		entity: &'a dyn Entity,
	) -> SeedResult<(Statement, Vec<&'a dyn Entity>)> {
		let descriptor = entity.descriptor();
		let variable = variable_name(entity)?;
		let mut assignments = Vec::new();
		let mut dependencies = Vec::new();

		for field in descriptor.scalar_fields() {
			let value = read_field(entity, field)?;
			match self.encoder.encode(&value)? {
				Literal::Text(text) => assignments.push(Assignment::literal(field.name(), text)),
				Literal::Reference {
					variable: target_variable,
					entity: target,
				} => {
					assignments.push(Assignment::reference(field.name(), target_variable));
					dependencies.push(target);
				}
			}
		}

		for field in descriptor.reference_fields() {
			let value = read_field(entity, field)?;
			if value.is_null() {
				continue;
			}
			let Some(target) = value.as_entity() else {
				return Err(SeedError::unencodable(value.type_name()));
			};
			assignments.push(Assignment::reference(field.name(), variable_name(target)?));
			dependencies.push(target);
		}

		let statement = Statement {
			variable,
			type_name: descriptor.type_name().to_string(),
			assignments,
		};
		Ok((statement, dependencies))
	}
}

fn read_field<'a>(entity: &'a dyn Entity, field: &FieldDescriptor) -> SeedResult<Value<'a>> {
	entity
		.field_value(field.name())
		.ok_or_else(|| SeedError::MissingField {
			type_name: entity.descriptor().type_name().to_string(),
			field: field.name().to_string(),
		})
}

/// Appends statements whose variable has not been seen yet, in order.
///
/// Returns the number of statements skipped as duplicates.
pub(crate) fn retain_first(
	statements: Vec<Statement>,
	seen: &mut HashSet<String>,
	into: &mut Vec<Statement>,
) -> usize {
	let mut skipped = 0;
	for statement in statements {
		if seen.insert(statement.variable.clone()) {
			into.push(statement);
		} else {
			skipped += 1;
		}
	}
	skipped
}

//! Generated statements.

use std::fmt;

/// A single `Field = literal` pair inside an initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
	/// Field name.
	pub field: String,
	/// Literal text or referenced variable name.
	pub literal: String,
	/// True when `literal` names another generated variable.
	pub is_reference: bool,
}

impl Assignment {
	/// Creates an assignment of literal text.
	pub fn literal(field: impl Into<String>, literal: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			literal: literal.into(),
			is_reference: false,
		}
	}

	/// Creates an assignment referring to another generated variable.
	pub fn reference(field: impl Into<String>, variable: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			literal: variable.into(),
			is_reference: true,
		}
	}
}

impl fmt::Display for Assignment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} = {}", self.field, self.literal)
	}
}

/// One variable declaration reconstructing a single entity.
///
/// Renders as `var {variable} = new {TypeName} {Field = literal, ...};`.
/// Scalar assignments come first, then reference assignments, each group
/// in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
	/// Generated variable name, e.g. `topitem_1`.
	pub variable: String,
	/// Entity type name.
	pub type_name: String,
	/// Initializer assignments.
	pub assignments: Vec<Assignment>,
}

impl Statement {
	/// Returns the variable names this statement refers to.
	pub fn references(&self) -> impl Iterator<Item = &str> {
		self.assignments
			.iter()
			.filter(|assignment| assignment.is_reference)
			.map(|assignment| assignment.literal.as_str())
	}
}

impl fmt::Display for Statement {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "var {} = new {} {{", self.variable, self.type_name)?;
		for (index, assignment) in self.assignments.iter().enumerate() {
			if index > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{assignment}")?;
		}
		f.write_str("};")
	}
}

//! Type descriptors and the entity introspection trait.
//!
//! A [`TypeDescriptor`] is the static shape of an entity type: its name and
//! its fields in declaration order, each carrying the markers that decide
//! identity and emission. Filtering is resolved once, when the descriptor
//! is built, so the generator never re-derives it per instance.
//!
//! Descriptors are normally produced by `#[derive(Entity)]`, but can be
//! written by hand:
//!
//! ```
//! use once_cell::sync::Lazy;
//! use seedgen::{Entity, FieldDescriptor, TypeDescriptor, Value};
//!
//! struct Tag {
//!     id: i32,
//!     label: String,
//! }
//!
//! static TAG: Lazy<TypeDescriptor> = Lazy::new(|| {
//!     TypeDescriptor::new(
//!         "Tag",
//!         vec![
//!             FieldDescriptor::scalar("Id").key(),
//!             FieldDescriptor::scalar("Label"),
//!         ],
//!     )
//! });
//!
//! impl Entity for Tag {
//!     fn descriptor(&self) -> &'static TypeDescriptor {
//!         &TAG
//!     }
//!
//!     fn field_value(&self, field: &str) -> Option<Value<'_>> {
//!         match field {
//!             "Id" => Some(Value::from(self.id)),
//!             "Label" => Some(Value::text(&self.label)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let lines = seedgen::gen_code(&Tag { id: 1, label: "new".into() }).unwrap();
//! assert_eq!(lines, vec![r#"var tag_1 = new Tag {Id = 1, Label = @"new"};"#]);
//! ```

use crate::value::Value;

/// Suffix marking foreign-key shadow fields, which are never emitted.
pub const FOREIGN_KEY_SUFFIX: &str = "Id";

/// Declared shape of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Primitive or value-shaped field, emitted as a literal.
	Scalar,
	/// Field holding another entity, emitted as a variable reference.
	Reference,
	/// List-like field. Never traversed, never emitted.
	Collection,
}

/// Metadata for a single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	name: &'static str,
	kind: FieldKind,
	key: bool,
	discard: bool,
	settable: bool,
}

impl FieldDescriptor {
	/// Creates a settable field of the given kind with no markers.
	pub const fn new(name: &'static str, kind: FieldKind) -> Self {
		Self {
			name,
			kind,
			key: false,
			discard: false,
			settable: true,
		}
	}

	/// Creates a scalar field.
	pub const fn scalar(name: &'static str) -> Self {
		Self::new(name, FieldKind::Scalar)
	}

	/// Creates a reference field.
	pub const fn reference(name: &'static str) -> Self {
		Self::new(name, FieldKind::Reference)
	}

	/// Creates a collection field.
	pub const fn collection(name: &'static str) -> Self {
		Self::new(name, FieldKind::Collection)
	}

	/// Marks the field as the entity key.
	pub const fn key(mut self) -> Self {
		self.key = true;
		self
	}

	/// Marks the field as discarded from generated code.
	pub const fn discard(mut self) -> Self {
		self.discard = true;
		self
	}

	/// Marks the field as not publicly settable.
	pub const fn read_only(mut self) -> Self {
		self.settable = false;
		self
	}

	/// Returns the field name as rendered in assignments.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns the declared kind.
	pub fn kind(&self) -> FieldKind {
		self.kind
	}

	/// Returns true if the field carries the key marker.
	pub fn is_key(&self) -> bool {
		self.key
	}

	/// Returns true if the field carries the discard marker.
	pub fn is_discard(&self) -> bool {
		self.discard
	}

	/// Returns true if the field is publicly settable.
	pub fn is_settable(&self) -> bool {
		self.settable
	}

	/// Returns true if the field appears in generated assignments.
	///
	/// The key field is exempt from the foreign-key suffix rule, so an `Id`
	/// key is always emitted while `TopItemId`-style shadow fields are not.
	pub fn is_emitted(&self) -> bool {
		self.settable
			&& !self.discard
			&& self.kind != FieldKind::Collection
			&& (self.key || !self.name.ends_with(FOREIGN_KEY_SUFFIX))
	}
}

/// Static shape of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
	type_name: &'static str,
	fields: Vec<FieldDescriptor>,
	key: Option<usize>,
	scalars: Vec<usize>,
	references: Vec<usize>,
}

impl TypeDescriptor {
	/// Creates a descriptor and resolves its key and emitted fields.
	///
	/// # Arguments
	///
	/// * `type_name` - Type name as rendered in generated code
	/// * `fields` - All declared fields, in declaration order
	pub fn new(type_name: &'static str, fields: Vec<FieldDescriptor>) -> Self {
		let key = fields.iter().position(FieldDescriptor::is_key);
		let emitted = |kind: FieldKind| {
			fields
				.iter()
				.enumerate()
				.filter(|(_, field)| field.kind == kind && field.is_emitted())
				.map(|(index, _)| index)
				.collect::<Vec<_>>()
		};
		let scalars = emitted(FieldKind::Scalar);
		let references = emitted(FieldKind::Reference);

		Self {
			type_name,
			fields,
			key,
			scalars,
			references,
		}
	}

	/// Returns the type name.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Returns all declared fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Returns the key field, if one is declared.
	pub fn key_field(&self) -> Option<&FieldDescriptor> {
		self.key.map(|index| &self.fields[index])
	}

	/// Returns emitted scalar fields in declaration order.
	pub fn scalar_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.scalars.iter().map(|&index| &self.fields[index])
	}

	/// Returns emitted reference fields in declaration order.
	pub fn reference_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
		self.references.iter().map(|&index| &self.fields[index])
	}

	/// Returns the lowercase prefix used for variable names.
	pub fn variable_prefix(&self) -> String {
		self.type_name.to_lowercase()
	}
}

/// An introspectable entity instance.
///
/// Implementations expose a static descriptor and the current value of each
/// declared field. The generator only reads entities, it never mutates them.
pub trait Entity {
	/// Returns the descriptor for this entity's type.
	fn descriptor(&self) -> &'static TypeDescriptor;

	/// Returns the current value of `field`, or `None` if the type has no
	/// such field.
	fn field_value(&self, field: &str) -> Option<Value<'_>>;
}

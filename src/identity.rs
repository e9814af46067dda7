//! Entity identity resolution.
//!
//! Identity is key based: two instances of the same type with the same key
//! value map to the same generated variable, whether or not they are the
//! same object in memory.

use crate::descriptor::Entity;
use crate::encoder::encode_literal;
use crate::error::{SeedError, SeedResult};
use crate::value::Value;

/// Returns the key value of the entity held in `value`.
///
/// # Errors
///
/// * [`SeedError::UnencodableType`] if `value` is not an entity
/// * [`SeedError::NoKey`] if the entity type declares no key field
pub fn identity_of<'a>(value: &Value<'a>) -> SeedResult<Value<'a>> {
	match value {
		Value::Entity(entity) => entity_key(*entity),
		other => Err(SeedError::unencodable(other.type_name())),
	}
}

/// Returns the key value of `entity`.
///
/// # Errors
///
/// Returns [`SeedError::NoKey`] naming the type if it declares no key field,
/// and [`SeedError::MissingField`] if the entity yields no value for it.
pub fn entity_key(entity: &dyn Entity) -> SeedResult<Value<'_>> {
	let descriptor = entity.descriptor();
	let key = descriptor
		.key_field()
		.ok_or_else(|| SeedError::no_key(descriptor.type_name()))?;
	entity
		.field_value(key.name())
		.ok_or_else(|| SeedError::MissingField {
			type_name: descriptor.type_name().to_string(),
			field: key.name().to_string(),
		})
}

/// Returns the generated variable name for `entity`.
///
/// The name is the lowercased type name, an underscore, and the literal
/// form of the key value, e.g. `subitem1_2`.
pub fn variable_name(entity: &dyn Entity) -> SeedResult<String> {
	let key = entity_key(entity)?;
	Ok(format!(
		"{}_{}",
		entity.descriptor().variable_prefix(),
		encode_literal(&key)?
	))
}

//! Runtime values read from entity fields.
//!
//! A [`Value`] is what an [`Entity`] hands back for one of its declared
//! fields. The encoder turns it into literal text, or into a variable
//! reference when the value is itself an entity.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::descriptor::Entity;

/// A single field value borrowed from an entity.
#[derive(Clone)]
pub enum Value<'a> {
	/// Boolean value.
	Bool(bool),
	/// Integer value.
	Int(i64),
	/// 128-bit unique identifier.
	Uuid(Uuid),
	/// Text value.
	Text(Cow<'a, str>),
	/// Date and time without timezone. Sub-second precision is never rendered.
	DateTime(NaiveDateTime),
	/// Fixed-point decimal.
	Decimal(Decimal),
	/// 64-bit float.
	Double(f64),
	/// 32-bit float.
	Float(f32),
	/// Absent value.
	Null,
	/// Nested entity reference.
	Entity(&'a dyn Entity),
	/// Value-shaped type that has no literal form.
	Unsupported {
		/// Runtime type name reported in errors.
		type_name: &'static str,
	},
}

impl<'a> Value<'a> {
	/// Creates a text value borrowing `s`.
	pub fn text(s: &'a str) -> Self {
		Self::Text(Cow::Borrowed(s))
	}

	/// Creates an entity reference value.
	pub fn entity<E: Entity>(entity: &'a E) -> Self {
		Self::Entity(entity)
	}

	/// Returns the runtime type name used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::Int(_) => "i64",
			Self::Uuid(_) => "Uuid",
			Self::Text(_) => "String",
			Self::DateTime(_) => "NaiveDateTime",
			Self::Decimal(_) => "Decimal",
			Self::Double(_) => "f64",
			Self::Float(_) => "f32",
			Self::Null => "null",
			Self::Entity(entity) => entity.descriptor().type_name(),
			Self::Unsupported { type_name } => type_name,
		}
	}

	/// Returns true for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Returns the referenced entity, if this value is one.
	pub fn as_entity(&self) -> Option<&'a dyn Entity> {
		match self {
			Self::Entity(entity) => Some(*entity),
			_ => None,
		}
	}
}

impl fmt::Debug for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Uuid(v) => f.debug_tuple("Uuid").field(v).finish(),
			Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
			Self::DateTime(v) => f.debug_tuple("DateTime").field(v).finish(),
			Self::Decimal(v) => f.debug_tuple("Decimal").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
			Self::Null => f.write_str("Null"),
			Self::Entity(entity) => f
				.debug_tuple("Entity")
				.field(&entity.descriptor().type_name())
				.finish(),
			Self::Unsupported { type_name } => f
				.debug_struct("Unsupported")
				.field("type_name", type_name)
				.finish(),
		}
	}
}

impl PartialEq for Value<'_> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Int(a), Self::Int(b)) => a == b,
			(Self::Uuid(a), Self::Uuid(b)) => a == b,
			(Self::Text(a), Self::Text(b)) => a == b,
			(Self::DateTime(a), Self::DateTime(b)) => a == b,
			(Self::Decimal(a), Self::Decimal(b)) => a == b,
			(Self::Double(a), Self::Double(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Null, Self::Null) => true,
			(Self::Entity(a), Self::Entity(b)) => std::ptr::addr_eq(*a, *b),
			(Self::Unsupported { type_name: a }, Self::Unsupported { type_name: b }) => a == b,
			_ => false,
		}
	}
}

/// Conversion of a field value into a [`Value`].
///
/// Implemented for every type with a literal form. Implement it for a
/// custom value type to return [`Value::Unsupported`] or to map it onto one
/// of the supported variants.
pub trait ToSeedValue {
	/// Borrows `self` as a seed value.
	fn to_seed_value(&self) -> Value<'_>;
}

macro_rules! impl_to_seed_value_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl ToSeedValue for $ty {
				fn to_seed_value(&self) -> Value<'_> {
					Value::Int(i64::from(*self))
				}
			}

			impl From<$ty> for Value<'_> {
				fn from(value: $ty) -> Self {
					Value::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_to_seed_value_int!(i8, i16, i32, i64, u8, u16, u32);

// Wider integers encode as ints when they fit, and are unencodable otherwise.
macro_rules! impl_to_seed_value_wide_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl ToSeedValue for $ty {
				fn to_seed_value(&self) -> Value<'_> {
					i64::try_from(*self).map_or(
						Value::Unsupported {
							type_name: stringify!($ty),
						},
						Value::Int,
					)
				}
			}
		)*
	};
}

impl_to_seed_value_wide_int!(u64, usize, isize, i128, u128);

impl ToSeedValue for bool {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Bool(*self)
	}
}

impl ToSeedValue for Uuid {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Uuid(*self)
	}
}

impl ToSeedValue for String {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Text(Cow::Borrowed(self.as_str()))
	}
}

impl ToSeedValue for &str {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Text(Cow::Borrowed(self))
	}
}

impl ToSeedValue for Cow<'_, str> {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Text(Cow::Borrowed(self.as_ref()))
	}
}

impl ToSeedValue for NaiveDateTime {
	fn to_seed_value(&self) -> Value<'_> {
		Value::DateTime(*self)
	}
}

impl ToSeedValue for NaiveDate {
	fn to_seed_value(&self) -> Value<'_> {
		Value::DateTime(self.and_time(NaiveTime::MIN))
	}
}

impl<Tz: TimeZone> ToSeedValue for DateTime<Tz> {
	fn to_seed_value(&self) -> Value<'_> {
		Value::DateTime(self.naive_local())
	}
}

impl ToSeedValue for Decimal {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Decimal(*self)
	}
}

impl ToSeedValue for f64 {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Double(*self)
	}
}

impl ToSeedValue for f32 {
	fn to_seed_value(&self) -> Value<'_> {
		Value::Float(*self)
	}
}

impl<T: ToSeedValue> ToSeedValue for Option<T> {
	fn to_seed_value(&self) -> Value<'_> {
		match self {
			Some(value) => value.to_seed_value(),
			None => Value::Null,
		}
	}
}

impl From<bool> for Value<'_> {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<Uuid> for Value<'_> {
	fn from(value: Uuid) -> Self {
		Value::Uuid(value)
	}
}

impl<'a> From<&'a str> for Value<'a> {
	fn from(value: &'a str) -> Self {
		Value::Text(Cow::Borrowed(value))
	}
}

impl From<String> for Value<'_> {
	fn from(value: String) -> Self {
		Value::Text(Cow::Owned(value))
	}
}

impl From<NaiveDateTime> for Value<'_> {
	fn from(value: NaiveDateTime) -> Self {
		Value::DateTime(value)
	}
}

impl From<Decimal> for Value<'_> {
	fn from(value: Decimal) -> Self {
		Value::Decimal(value)
	}
}

impl From<f64> for Value<'_> {
	fn from(value: f64) -> Self {
		Value::Double(value)
	}
}

impl From<f32> for Value<'_> {
	fn from(value: f32) -> Self {
		Value::Float(value)
	}
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
	fn from(value: Option<T>) -> Self {
		value.map_or(Value::Null, Into::into)
	}
}

//! Value encoder.
//!
//! Values are rendered by an ordered rule table: the first rule that accepts
//! a value produces its literal. Entities fall through every literal rule
//! and become variable references instead, handing the entity back to the
//! decomposer.

use chrono::{Datelike, Timelike};

use crate::descriptor::Entity;
use crate::error::{SeedError, SeedResult};
use crate::identity::variable_name;
use crate::value::Value;

const QUOTE: &str = "\"";
const ESCAPED_QUOTE: &str = "\"\"";
const TEXT_PREFIX: &str = "@\"";

/// One entry of the literal dispatch table.
#[derive(Clone, Copy)]
pub struct LiteralRule {
	/// Short name of the value kind handled by this rule.
	pub name: &'static str,
	/// Renders the value, or returns `None` if the rule does not apply.
	pub render: fn(&Value<'_>) -> Option<String>,
}

/// Literal rules in priority order. The first match wins.
pub const LITERAL_RULES: [LiteralRule; 9] = [
	LiteralRule {
		name: "bool",
		render: render_bool,
	},
	LiteralRule {
		name: "int",
		render: render_int,
	},
	LiteralRule {
		name: "uuid",
		render: render_uuid,
	},
	LiteralRule {
		name: "text",
		render: render_text,
	},
	LiteralRule {
		name: "datetime",
		render: render_datetime,
	},
	LiteralRule {
		name: "decimal",
		render: render_decimal,
	},
	LiteralRule {
		name: "double",
		render: render_double,
	},
	LiteralRule {
		name: "float",
		render: render_float,
	},
	LiteralRule {
		name: "null",
		render: render_null,
	},
];

fn render_bool(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Bool(v) => Some(v.to_string()),
		_ => None,
	}
}

fn render_int(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Int(v) => Some(v.to_string()),
		_ => None,
	}
}

fn render_uuid(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Uuid(v) => Some(format!("new Guid(\"{}\")", v.hyphenated())),
		_ => None,
	}
}

fn render_text(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Text(v) => Some(format!(
			"{TEXT_PREFIX}{}{QUOTE}",
			v.replace(QUOTE, ESCAPED_QUOTE)
		)),
		_ => None,
	}
}

fn render_datetime(value: &Value<'_>) -> Option<String> {
	match value {
		Value::DateTime(v) => Some(format!(
			"new DateTime({}, {}, {}, {}, {}, {})",
			v.year(),
			v.month(),
			v.day(),
			v.hour(),
			v.minute(),
			v.second()
		)),
		_ => None,
	}
}

fn render_decimal(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Decimal(v) => Some(format!("{}m", v.normalize())),
		_ => None,
	}
}

fn render_double(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Double(v) => Some(
			render_non_finite("double", v.is_nan(), v.is_infinite(), v.is_sign_positive())
				.unwrap_or_else(|| shortest(v.to_string(), format!("{v:e}"))),
		),
		_ => None,
	}
}

fn render_float(value: &Value<'_>) -> Option<String> {
	match value {
		Value::Float(v) => Some(
			render_non_finite("float", v.is_nan(), v.is_infinite(), v.is_sign_positive())
				.unwrap_or_else(|| format!("{}f", shortest(v.to_string(), format!("{v:e}")))),
		),
		_ => None,
	}
}

// Both forms round-trip; ties keep the plain form.
fn shortest(plain: String, exponent: String) -> String {
	if exponent.len() < plain.len() {
		exponent
	} else {
		plain
	}
}

fn render_null(value: &Value<'_>) -> Option<String> {
	value.is_null().then(|| "null".to_string())
}

// NaN and infinities have no numeric literal in the target syntax.
fn render_non_finite(
	type_keyword: &str,
	nan: bool,
	infinite: bool,
	positive: bool,
) -> Option<String> {
	if nan {
		Some(format!("{type_keyword}.NaN"))
	} else if infinite && positive {
		Some(format!("{type_keyword}.PositiveInfinity"))
	} else if infinite {
		Some(format!("{type_keyword}.NegativeInfinity"))
	} else {
		None
	}
}

/// Encoded form of a field value.
#[derive(Clone)]
pub enum Literal<'a> {
	/// Literal text for a non-entity value.
	Text(String),
	/// Reference to the variable generated for a nested entity.
	Reference {
		/// Variable name of the referenced entity.
		variable: String,
		/// The referenced entity, still to be decomposed.
		entity: &'a dyn Entity,
	},
}

impl Literal<'_> {
	/// Returns the text that appears on the right-hand side of an assignment.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(text) => text,
			Self::Reference { variable, .. } => variable,
		}
	}

	/// Consumes the literal, returning its assignment text.
	pub fn into_string(self) -> String {
		match self {
			Self::Text(text) => text,
			Self::Reference { variable, .. } => variable,
		}
	}
}

/// Encoder applying [`LITERAL_RULES`] followed by the entity rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValueEncoder;

impl ValueEncoder {
	/// Creates a new encoder.
	pub fn new() -> Self {
		Self
	}

	/// Encodes a value into a literal or an entity reference.
	///
	/// # Errors
	///
	/// Returns [`SeedError::UnencodableType`] for [`Value::Unsupported`], and
	/// propagates identity failures for entity values.
	pub fn encode<'a>(&self, value: &Value<'a>) -> SeedResult<Literal<'a>> {
		if let Some(text) = render(value) {
			return Ok(Literal::Text(text));
		}
		match value {
			Value::Entity(entity) => Ok(Literal::Reference {
				variable: variable_name(*entity)?,
				entity: *entity,
			}),
			other => Err(SeedError::unencodable(other.type_name())),
		}
	}
}

fn render(value: &Value<'_>) -> Option<String> {
	LITERAL_RULES.iter().find_map(|rule| (rule.render)(value))
}

/// Encodes a value to its assignment text.
///
/// Entities encode to their variable name.
pub fn encode(value: &Value<'_>) -> SeedResult<String> {
	ValueEncoder::new().encode(value).map(Literal::into_string)
}

/// Encodes a value that must have a literal form.
///
/// Used for key values, which are part of variable names and therefore
/// cannot themselves be entity references.
pub fn encode_literal(value: &Value<'_>) -> SeedResult<String> {
	render(value).ok_or_else(|| SeedError::unencodable(value.type_name()))
}

/// Recovers the original text from a string literal produced by the encoder.
///
/// Returns `None` if `literal` is not in the generated form.
pub fn unescape_text_literal(literal: &str) -> Option<String> {
	let body = literal.strip_prefix(TEXT_PREFIX)?.strip_suffix(QUOTE)?;
	let mut result = String::with_capacity(body.len());
	let mut chars = body.chars();
	while let Some(c) = chars.next() {
		if c == '"' && chars.next() != Some('"') {
			return None;
		}
		result.push(c);
	}
	Some(result)
}

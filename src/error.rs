//! Error types for seed code generation.
//!
//! Every failure aborts the whole generation call. No partial statement
//! list is ever returned to the caller.

use thiserror::Error;

/// Errors that can occur while generating seed code.
#[derive(Debug, Error)]
pub enum SeedError {
	/// Entity type declares no key-marked field.
	#[error("Cannot find key for entity {type_name}")]
	NoKey {
		/// Name of the offending entity type.
		type_name: String,
	},

	/// A value outside the supported value space reached the encoder, or
	/// identity was requested for something that is not an entity.
	#[error("Unknown primitive or value type \"{type_name}\".")]
	UnencodableType {
		/// Runtime type name of the offending value.
		type_name: String,
	},

	/// A reference chain led back to one of its own ancestors.
	#[error("Cyclic reference detected at {variable}")]
	CyclicReference {
		/// Variable name of the entity that was revisited.
		variable: String,
	},

	/// The configured maximum reference depth was exceeded.
	#[error("Reference depth limit of {limit} exceeded")]
	DepthLimitExceeded {
		/// Configured limit.
		limit: usize,
	},

	/// An entity declares a field in its descriptor but yields no value for it.
	#[error("Entity {type_name} has no value for declared field {field}")]
	MissingField {
		/// Name of the entity type.
		type_name: String,
		/// Name of the declared field.
		field: String,
	},

	/// I/O operation failed.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Configuration could not be parsed or is invalid.
	#[error("Configuration error: {0}")]
	Config(String),
}

impl SeedError {
	/// Builds a [`SeedError::NoKey`] for the given type name.
	pub fn no_key(type_name: impl Into<String>) -> Self {
		Self::NoKey {
			type_name: type_name.into(),
		}
	}

	/// Builds a [`SeedError::UnencodableType`] for the given type name.
	pub fn unencodable(type_name: impl Into<String>) -> Self {
		Self::UnencodableType {
			type_name: type_name.into(),
		}
	}
}

/// Result type alias for seed generation.
pub type SeedResult<T> = Result<T, SeedError>;

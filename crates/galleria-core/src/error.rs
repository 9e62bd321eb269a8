//! Application-level error taxonomy.
//!
//! Service crates define their own error enums and convert into this one at
//! the boundary, so the presentation layer maps a single type to responses.

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Application error.
///
/// Expected failure modes are explicit variants; anything genuinely
/// unexpected travels in [`Error::Other`].
#[derive(Debug, Error)]
pub enum Error {
	/// A referenced entity does not exist. Terminal for the operation and
	/// always distinct from validation failures.
	#[error("not found: {0}")]
	NotFound(String),

	/// User input failed one or more stated constraints. Recoverable by
	/// re-prompting; never a system fault.
	#[error("validation failed: {0}")]
	Validation(ValidationErrors),

	/// Login failed. The message never reveals whether the account exists.
	#[error("invalid email or password")]
	InvalidCredentials,

	/// The image store is unreachable or refused the operation.
	#[error("storage error: {0}")]
	Storage(String),

	/// The relational store is unreachable or errored.
	#[error("database error: {0}")]
	Database(String),

	/// Startup configuration is missing or malformed.
	#[error("configuration error: {0}")]
	Config(String),

	/// Anything else.
	#[error(transparent)]
	Other(#[from] anyhow::Error),
}

impl From<ValidationErrors> for Error {
	fn from(errors: ValidationErrors) -> Self {
		Error::Validation(errors)
	}
}

//! Identity error type.

use galleria_core::ValidationErrors;
use thiserror::Error;

/// Identity service error.
#[derive(Debug, Error)]
pub enum AuthError {
	/// Login failed. Deliberately the same value whether the email is
	/// unknown or the password is wrong, so responses cannot be used to
	/// enumerate accounts.
	#[error("invalid email or password")]
	InvalidCredentials,

	/// Registration input failed one or more constraints.
	#[error("validation failed: {0}")]
	Validation(ValidationErrors),

	/// Hashing or verifying a password failed.
	#[error("password hashing error: {0}")]
	Hash(String),

	/// The users table is unreachable or errored.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<AuthError> for galleria_core::Error {
	fn from(err: AuthError) -> Self {
		match err {
			AuthError::InvalidCredentials => galleria_core::Error::InvalidCredentials,
			AuthError::Validation(errors) => galleria_core::Error::Validation(errors),
			AuthError::Hash(msg) => galleria_core::Error::Other(anyhow::anyhow!(msg)),
			AuthError::Database(e) => galleria_core::Error::Database(e.to_string()),
		}
	}
}

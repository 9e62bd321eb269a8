//! Support inbox error type.

use galleria_core::ValidationErrors;
use thiserror::Error;

/// Support inbox error.
#[derive(Debug, Error)]
pub enum SupportError {
	/// The submitted ticket failed a constraint.
	#[error("validation failed: {0}")]
	Validation(#[from] ValidationErrors),

	/// The support table is unreachable or errored.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<SupportError> for galleria_core::Error {
	fn from(err: SupportError) -> Self {
		match err {
			SupportError::Validation(errors) => galleria_core::Error::Validation(errors),
			SupportError::Database(e) => galleria_core::Error::Database(e.to_string()),
		}
	}
}

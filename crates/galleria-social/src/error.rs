//! Social layer error type.

use galleria_core::ValidationErrors;
use thiserror::Error;

/// Social layer error.
#[derive(Debug, Error)]
pub enum SocialError {
	/// Comment text failed a constraint.
	#[error("validation failed: {0}")]
	Validation(#[from] ValidationErrors),

	/// The writing user does not exist.
	#[error("user {0} not found")]
	UserNotFound(i64),

	/// The social tables are unreachable or errored.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<SocialError> for galleria_core::Error {
	fn from(err: SocialError) -> Self {
		match err {
			SocialError::Validation(errors) => galleria_core::Error::Validation(errors),
			SocialError::UserNotFound(id) => galleria_core::Error::NotFound(format!("user {id}")),
			SocialError::Database(e) => galleria_core::Error::Database(e.to_string()),
		}
	}
}

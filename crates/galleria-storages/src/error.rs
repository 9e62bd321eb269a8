//! Storage error type.

use thiserror::Error;

/// Image store error.
#[derive(Debug, Error)]
pub enum StorageError {
	/// The referenced image does not exist on this backend.
	#[error("image not found: {0}")]
	NotFound(String),

	/// The backend configuration is missing or malformed.
	#[error("storage configuration error: {0}")]
	Config(String),

	/// A remote call did not finish within the configured deadline.
	#[error("upload timed out after {0} seconds")]
	Timeout(u64),

	/// Local filesystem failure.
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	/// The object store rejected or failed the call.
	#[error("remote storage error: {0}")]
	Remote(String),
}

impl StorageError {
	/// Whether retrying the same call can reasonably succeed.
	pub fn is_retryable(&self) -> bool {
		matches!(self, StorageError::Timeout(_))
	}
}

pub type Result<T> = std::result::Result<T, StorageError>;

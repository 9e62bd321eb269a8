//! Catalog error type.

use galleria_core::ValidationErrors;
use galleria_storages::StorageError;
use thiserror::Error;

/// Catalog service error.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Submitted fields failed one or more constraints; nothing was written.
	#[error("validation failed: {0}")]
	Validation(#[from] ValidationErrors),

	/// No artwork with this id.
	#[error("artwork {0} not found")]
	NotFound(i64),

	/// The image store refused or failed a required operation.
	#[error("storage error: {0}")]
	Storage(#[from] StorageError),

	/// The catalog table is unreachable or errored.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<CatalogError> for galleria_core::Error {
	fn from(err: CatalogError) -> Self {
		match err {
			CatalogError::Validation(errors) => galleria_core::Error::Validation(errors),
			CatalogError::NotFound(id) => galleria_core::Error::NotFound(format!("artwork {id}")),
			CatalogError::Storage(e) => galleria_core::Error::Storage(e.to_string()),
			CatalogError::Database(e) => galleria_core::Error::Database(e.to_string()),
		}
	}
}

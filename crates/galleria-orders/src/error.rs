//! Order error type.

use galleria_db::OrderStatus;
use thiserror::Error;

use crate::service::CheckoutRejection;

/// Order service error.
#[derive(Debug, Error)]
pub enum OrderError {
	/// The artwork being bought does not exist. Terminal, and reported
	/// separately from field errors.
	#[error("artwork {0} not found")]
	ArtworkNotFound(i64),

	/// No order with this id.
	#[error("order {0} not found")]
	OrderNotFound(i64),

	/// The checkout failed field validation; nothing was written. Carries
	/// the computed total so the form can be re-rendered.
	#[error("checkout rejected: {}", .0.errors)]
	Rejected(CheckoutRejection),

	/// The transition policy refused this status move.
	#[error("status change {from} -> {to} is not permitted")]
	StatusChangeRejected {
		from: OrderStatus,
		to: OrderStatus,
	},

	/// The orders table is unreachable or errored.
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl From<OrderError> for galleria_core::Error {
	fn from(err: OrderError) -> Self {
		match err {
			OrderError::ArtworkNotFound(id) => {
				galleria_core::Error::NotFound(format!("artwork {id}"))
			}
			OrderError::OrderNotFound(id) => galleria_core::Error::NotFound(format!("order {id}")),
			OrderError::Rejected(rejection) => galleria_core::Error::Validation(rejection.errors),
			OrderError::StatusChangeRejected { from, to } => galleria_core::Error::Other(
				anyhow::anyhow!("status change {from} -> {to} is not permitted"),
			),
			OrderError::Database(e) => galleria_core::Error::Database(e.to_string()),
		}
	}
}

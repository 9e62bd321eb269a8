//! The order service.

use chrono::Utc;
use galleria_core::ValidationErrors;
use galleria_db::{Artwork, Order, OrderStatus, format_timestamp};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use crate::OrderError;
use crate::forms::CheckoutForm;
use crate::policy::status_change_permitted;

/// A successfully placed order, with the artwork as it was at placement for
/// the confirmation view.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
	pub order: Order,
	pub artwork: Artwork,
}

/// A checkout rejection: the field errors plus the total computed for the
/// submitted quantity, so the caller re-renders the form with both.
#[derive(Debug, Clone)]
pub struct CheckoutRejection {
	pub errors: ValidationErrors,
	pub total: Decimal,
}

/// An order joined with its artwork, when the artwork still exists.
///
/// The order's own snapshot fields carry the display data either way; the
/// live artwork is extra (current image, current price) and simply absent
/// after a catalog delete.
#[derive(Debug, Clone)]
pub struct OrderWithArtwork {
	pub order: Order,
	pub artwork: Option<Artwork>,
}

/// Checkout and order management.
pub struct OrderService {
	pool: SqlitePool,
}

impl OrderService {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Place a cash-on-delivery order for one artwork.
	///
	/// A missing artwork is terminal and short-circuits. Field failures are
	/// returned all together with the computed total, and nothing is
	/// persisted. On success the row is inserted with status `pending` and
	/// the artwork's title and unit price copied onto it, so the order keeps
	/// showing what the buyer agreed to.
	pub async fn place_order(
		&self,
		artwork_id: i64,
		form: &CheckoutForm,
	) -> Result<PlacedOrder, OrderError> {
		let parsed = form.validate();

		let artwork = self
			.find_artwork(artwork_id)
			.await?
			.ok_or(OrderError::ArtworkNotFound(artwork_id))?;

		let fields = match parsed {
			Ok(fields) => fields,
			Err(rejected) => {
				return Err(OrderError::Rejected(CheckoutRejection {
					errors: rejected.errors,
					total: artwork.price * Decimal::from(rejected.quantity),
				}));
			}
		};

		// There is no stock model: the artwork row is only read here, never
		// locked or decremented, so concurrent orders for the same piece all
		// succeed.
		let result = sqlx::query(
			"INSERT INTO orders (artwork_id, artwork_title, unit_price, buyer_name, buyer_email, \
			 phone, address, payment_method, quantity, status, created_at) \
			 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(artwork.id)
		.bind(&artwork.title)
		.bind(artwork.price.to_string())
		.bind(&fields.buyer_name)
		.bind(&fields.buyer_email)
		.bind(&fields.phone)
		.bind(&fields.address)
		.bind(fields.payment_method.as_str())
		.bind(fields.quantity)
		.bind(OrderStatus::Pending.as_str())
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await?;

		let order = self.get_order_record(result.last_insert_rowid()).await?;

		Ok(PlacedOrder { order, artwork })
	}

	/// Change an order's status.
	///
	/// The transition policy is consulted on every call; see
	/// [`crate::policy::status_change_permitted`] for what it currently
	/// allows. No audit trail is kept.
	pub async fn set_status(
		&self,
		order_id: i64,
		new_status: OrderStatus,
	) -> Result<Order, OrderError> {
		let order = self.get_order_record(order_id).await?;

		if !status_change_permitted(order.status, new_status) {
			return Err(OrderError::StatusChangeRejected {
				from: order.status,
				to: new_status,
			});
		}

		sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
			.bind(new_status.as_str())
			.bind(order_id)
			.execute(&self.pool)
			.await?;

		self.get_order_record(order_id).await
	}

	/// Every order, newest first, with the live artwork when it still
	/// exists.
	pub async fn list_orders(&self) -> Result<Vec<OrderWithArtwork>, OrderError> {
		let rows = sqlx::query("SELECT * FROM orders ORDER BY created_at DESC, id DESC")
			.fetch_all(&self.pool)
			.await?;

		let mut orders = Vec::with_capacity(rows.len());
		for row in &rows {
			let order = Order::from_row(row)?;
			let artwork = self.find_artwork(order.artwork_id).await?;
			orders.push(OrderWithArtwork { order, artwork });
		}
		Ok(orders)
	}

	pub async fn get_order(&self, order_id: i64) -> Result<OrderWithArtwork, OrderError> {
		let order = self.get_order_record(order_id).await?;
		let artwork = self.find_artwork(order.artwork_id).await?;
		Ok(OrderWithArtwork { order, artwork })
	}

	/// Orders referencing one artwork, newest first.
	pub async fn orders_for_artwork(&self, artwork_id: i64) -> Result<Vec<Order>, OrderError> {
		let rows = sqlx::query(
			"SELECT * FROM orders WHERE artwork_id = ? ORDER BY created_at DESC, id DESC",
		)
		.bind(artwork_id)
		.fetch_all(&self.pool)
		.await?;

		let mut orders = Vec::with_capacity(rows.len());
		for row in &rows {
			orders.push(Order::from_row(row)?);
		}
		Ok(orders)
	}

	async fn get_order_record(&self, order_id: i64) -> Result<Order, OrderError> {
		let row = sqlx::query("SELECT * FROM orders WHERE id = ?")
			.bind(order_id)
			.fetch_optional(&self.pool)
			.await?;

		match row {
			Some(row) => Ok(Order::from_row(&row)?),
			None => Err(OrderError::OrderNotFound(order_id)),
		}
	}

	/// The artwork price read at order time comes straight from the catalog
	/// table; this is the one lateral read between services.
	async fn find_artwork(&self, artwork_id: i64) -> Result<Option<Artwork>, sqlx::Error> {
		let row = sqlx::query("SELECT * FROM artworks WHERE id = ?")
			.bind(artwork_id)
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(Artwork::from_row).transpose()
	}
}

//! Record types and row mapping.
//!
//! Rows are mapped by hand with `Row::try_get`: prices are stored as
//! canonical decimal strings and timestamps as RFC 3339 text, so each record
//! parses those columns on the way out. A column that fails to parse is
//! reported as a column-decode error against that column.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use thiserror::Error;

/// An unknown value for one of the closed string enums.
#[derive(Debug, Clone, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
	kind: &'static str,
	value: String,
}

/// Fulfillment stage of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
	Pending,
	Accepted,
	Shipped,
	Delivered,
}

impl OrderStatus {
	/// Every status, in fulfillment order.
	pub const ALL: [OrderStatus; 4] = [
		OrderStatus::Pending,
		OrderStatus::Accepted,
		OrderStatus::Shipped,
		OrderStatus::Delivered,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			OrderStatus::Pending => "pending",
			OrderStatus::Accepted => "accepted",
			OrderStatus::Shipped => "shipped",
			OrderStatus::Delivered => "delivered",
		}
	}
}

impl fmt::Display for OrderStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OrderStatus {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pending" => Ok(OrderStatus::Pending),
			"accepted" => Ok(OrderStatus::Accepted),
			"shipped" => Ok(OrderStatus::Shipped),
			"delivered" => Ok(OrderStatus::Delivered),
			other => Err(ParseEnumError {
				kind: "order status",
				value: other.to_string(),
			}),
		}
	}
}

/// How the buyer intends to pay.
///
/// `online` is accepted as a submitted value but has no gateway behind it;
/// every order is fulfilled as cash on delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
	Cod,
	Online,
}

impl PaymentMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			PaymentMethod::Cod => "cod",
			PaymentMethod::Online => "online",
		}
	}
}

impl fmt::Display for PaymentMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for PaymentMethod {
	type Err = ParseEnumError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"cod" => Ok(PaymentMethod::Cod),
			"online" => Ok(PaymentMethod::Online),
			other => Err(ParseEnumError {
				kind: "payment method",
				value: other.to_string(),
			}),
		}
	}
}

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
	pub id: i64,
	pub title: String,
	pub description: Option<String>,
	pub price: Decimal,
	pub image_reference: String,
	pub created_at: DateTime<Utc>,
}

impl Artwork {
	pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
		Ok(Self {
			id: row.try_get("id")?,
			title: row.try_get("title")?,
			description: row.try_get("description")?,
			price: parse_decimal_column(row.try_get("price")?, "price")?,
			image_reference: row.try_get("image_reference")?,
			created_at: parse_timestamp_column(row.try_get("created_at")?, "created_at")?,
		})
	}
}

/// A buyer's cash-on-delivery purchase request.
///
/// `artwork_title` and `unit_price` are snapshots captured at placement, so
/// the order keeps displaying what the buyer agreed to even after the artwork
/// is re-priced or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
	pub id: i64,
	pub artwork_id: i64,
	pub artwork_title: String,
	pub unit_price: Decimal,
	pub buyer_name: String,
	pub buyer_email: Option<String>,
	pub phone: String,
	pub address: String,
	pub payment_method: PaymentMethod,
	pub quantity: i64,
	pub status: OrderStatus,
	pub created_at: DateTime<Utc>,
}

impl Order {
	pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
		let status: String = row.try_get("status")?;
		let payment_method: String = row.try_get("payment_method")?;
		Ok(Self {
			id: row.try_get("id")?,
			artwork_id: row.try_get("artwork_id")?,
			artwork_title: row.try_get("artwork_title")?,
			unit_price: parse_decimal_column(row.try_get("unit_price")?, "unit_price")?,
			buyer_name: row.try_get("buyer_name")?,
			buyer_email: row.try_get("buyer_email")?,
			phone: row.try_get("phone")?,
			address: row.try_get("address")?,
			payment_method: payment_method
				.parse()
				.map_err(|e| column_decode("payment_method", e))?,
			quantity: row.try_get("quantity")?,
			status: status.parse().map_err(|e| column_decode("status", e))?,
			created_at: parse_timestamp_column(row.try_get("created_at")?, "created_at")?,
		})
	}

	/// Amount due on delivery.
	pub fn total(&self) -> Decimal {
		self.unit_price * Decimal::from(self.quantity)
	}
}

/// A registered shopper (one seeded row is the administrator).
#[derive(Debug, Clone, PartialEq)]
pub struct User {
	pub id: i64,
	pub email: String,
	pub password_hash: String,
	pub name: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl User {
	pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
		Ok(Self {
			id: row.try_get("id")?,
			email: row.try_get("email")?,
			password_hash: row.try_get("password_hash")?,
			name: row.try_get("name")?,
			created_at: parse_timestamp_column(row.try_get("created_at")?, "created_at")?,
		})
	}

	/// The name shown next to comments and tickets; falls back to the email.
	pub fn display_name(&self) -> &str {
		self.name.as_deref().unwrap_or(&self.email)
	}
}

/// A message to the shop's support inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportMessage {
	pub id: i64,
	pub user_id: Option<i64>,
	pub user_name: String,
	pub user_email: String,
	pub subject: String,
	pub message: String,
	pub status: String,
	pub created_at: DateTime<Utc>,
}

impl SupportMessage {
	pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
		Ok(Self {
			id: row.try_get("id")?,
			user_id: row.try_get("user_id")?,
			user_name: row.try_get("user_name")?,
			user_email: row.try_get("user_email")?,
			subject: row.try_get("subject")?,
			message: row.try_get("message")?,
			status: row.try_get("status")?,
			created_at: parse_timestamp_column(row.try_get("created_at")?, "created_at")?,
		})
	}
}

/// An append-only comment on an artwork's detail page.
///
/// `user_name` is the writer's display name as it was when the comment was
/// written; later profile changes do not rewrite old comments.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkComment {
	pub id: i64,
	pub user_id: i64,
	pub artwork_id: i64,
	pub user_name: String,
	pub comment: String,
	pub created_at: DateTime<Utc>,
}

impl ArtworkComment {
	pub fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
		Ok(Self {
			id: row.try_get("id")?,
			user_id: row.try_get("user_id")?,
			artwork_id: row.try_get("artwork_id")?,
			user_name: row.try_get("user_name")?,
			comment: row.try_get("comment")?,
			created_at: parse_timestamp_column(row.try_get("created_at")?, "created_at")?,
		})
	}
}

/// Render a timestamp the way the store persists it.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
	ts.to_rfc3339()
}

/// Parse a persisted RFC 3339 timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
	DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}

fn parse_timestamp_column(raw: String, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
	parse_timestamp(&raw).map_err(|e| column_decode(column, e))
}

fn parse_decimal_column(raw: String, column: &str) -> Result<Decimal, sqlx::Error> {
	Decimal::from_str(&raw).map_err(|e| column_decode(column, e))
}

fn column_decode(
	column: &str,
	source: impl std::error::Error + Send + Sync + 'static,
) -> sqlx::Error {
	sqlx::Error::ColumnDecode {
		index: column.to_string(),
		source: Box::new(source),
	}
}

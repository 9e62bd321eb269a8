//! # galleria-db
//!
//! Owns the relational side of the storefront: connecting the process-wide
//! SQLite pool, creating the seven tables (with the unique pair indexes that
//! backstop the social toggles), and mapping rows into the record types the
//! service crates share.
//!
//! All database work in the storefront is point reads and writes on this
//! pool; there are no multi-statement transactions, and the store's own
//! write serialization is the only concurrency control.

pub mod pool;
pub mod records;
pub mod schema;

pub use pool::connect;
pub use records::{
	Artwork, ArtworkComment, Order, OrderStatus, ParseEnumError, PaymentMethod, SupportMessage,
	User, format_timestamp, parse_timestamp,
};
pub use schema::create_tables;

//! Schema creation.
//!
//! Statements are built with sea-query and rendered for SQLite. Everything is
//! `IF NOT EXISTS`, so the bootstrap can run on every startup. The unique
//! pair indexes on the wishlist and like tables are load-bearing: they are
//! the storage-level backstop for the toggle operations' check-then-act
//! window.

use sea_query::{Alias, ColumnDef, Index, SqliteQueryBuilder, Table};
use sqlx::SqlitePool;

/// Create all storefront tables and indexes.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
	for sql in table_statements() {
		sqlx::query(&sql).execute(pool).await?;
	}
	Ok(())
}

fn table_statements() -> Vec<String> {
	let mut statements = Vec::new();

	let stmt = Table::create()
		.table(Alias::new("artworks"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("title")).text().not_null())
		.col(ColumnDef::new(Alias::new("description")).text())
		.col(ColumnDef::new(Alias::new("price")).text().not_null())
		.col(
			ColumnDef::new(Alias::new("image_reference"))
				.text()
				.not_null(),
		)
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("orders"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("artwork_id")).integer().not_null())
		.col(
			ColumnDef::new(Alias::new("artwork_title"))
				.text()
				.not_null(),
		)
		.col(ColumnDef::new(Alias::new("unit_price")).text().not_null())
		.col(ColumnDef::new(Alias::new("buyer_name")).text().not_null())
		.col(ColumnDef::new(Alias::new("buyer_email")).text())
		.col(ColumnDef::new(Alias::new("phone")).text().not_null())
		.col(ColumnDef::new(Alias::new("address")).text().not_null())
		.col(
			ColumnDef::new(Alias::new("payment_method"))
				.string_len(16)
				.not_null(),
		)
		.col(ColumnDef::new(Alias::new("quantity")).integer().not_null())
		.col(
			ColumnDef::new(Alias::new("status"))
				.string_len(16)
				.not_null()
				.default("pending"),
		)
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let idx = Index::create()
		.if_not_exists()
		.name("idx_orders_artwork")
		.table(Alias::new("orders"))
		.col(Alias::new("artwork_id"))
		.to_owned();
	statements.push(idx.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("users"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(
			ColumnDef::new(Alias::new("email"))
				.text()
				.not_null()
				.unique_key(),
		)
		.col(
			ColumnDef::new(Alias::new("password_hash"))
				.text()
				.not_null(),
		)
		.col(ColumnDef::new(Alias::new("name")).text())
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("support_messages"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("user_id")).integer())
		.col(ColumnDef::new(Alias::new("user_name")).text().not_null())
		.col(ColumnDef::new(Alias::new("user_email")).text().not_null())
		.col(ColumnDef::new(Alias::new("subject")).text().not_null())
		.col(ColumnDef::new(Alias::new("message")).text().not_null())
		.col(
			ColumnDef::new(Alias::new("status"))
				.string_len(16)
				.not_null()
				.default("pending"),
		)
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("wishlist_items"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
		.col(ColumnDef::new(Alias::new("artwork_id")).integer().not_null())
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let idx = Index::create()
		.if_not_exists()
		.name("idx_wishlist_user_artwork")
		.table(Alias::new("wishlist_items"))
		.col(Alias::new("user_id"))
		.col(Alias::new("artwork_id"))
		.unique()
		.to_owned();
	statements.push(idx.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("artwork_likes"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
		.col(ColumnDef::new(Alias::new("artwork_id")).integer().not_null())
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	let idx = Index::create()
		.if_not_exists()
		.name("idx_likes_user_artwork")
		.table(Alias::new("artwork_likes"))
		.col(Alias::new("user_id"))
		.col(Alias::new("artwork_id"))
		.unique()
		.to_owned();
	statements.push(idx.to_string(SqliteQueryBuilder));

	let stmt = Table::create()
		.table(Alias::new("artwork_comments"))
		.if_not_exists()
		.col(
			ColumnDef::new(Alias::new("id"))
				.integer()
				.not_null()
				.auto_increment()
				.primary_key(),
		)
		.col(ColumnDef::new(Alias::new("user_id")).integer().not_null())
		.col(ColumnDef::new(Alias::new("artwork_id")).integer().not_null())
		.col(ColumnDef::new(Alias::new("user_name")).text().not_null())
		.col(ColumnDef::new(Alias::new("comment")).text().not_null())
		.col(
			ColumnDef::new(Alias::new("created_at"))
				.timestamp()
				.not_null(),
		)
		.to_owned();
	statements.push(stmt.to_string(SqliteQueryBuilder));

	statements
}

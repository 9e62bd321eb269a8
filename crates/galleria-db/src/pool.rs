//! Pool bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Connect the process-wide pool.
///
/// Created once at startup and shared by every request for the lifetime of
/// the process. The database file is created on first connect.
///
/// ```rust,no_run
/// # async fn example() -> Result<(), sqlx::Error> {
/// let pool = galleria_db::connect("sqlite://storefront.db").await?;
/// galleria_db::create_tables(&pool).await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
	let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(5)
		.connect_with(options)
		.await
}

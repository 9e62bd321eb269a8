//! Shared fixtures for the social tests.

use galleria_social::SocialService;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A throwaway database with the schema created and the social service on
/// top of it.
pub struct TestDb {
	// Held so the directory outlives the pool.
	_dir: TempDir,
	pub pool: SqlitePool,
	pub social: SocialService,
}

impl TestDb {
	pub async fn new() -> Self {
		let dir = TempDir::new().expect("temp dir");
		let url = format!("sqlite://{}", dir.path().join("test.db").display());
		let pool = galleria_db::connect(&url).await.expect("connect");
		galleria_db::create_tables(&pool).await.expect("schema");
		let social = SocialService::new(pool.clone());
		Self {
			_dir: dir,
			pool,
			social,
		}
	}

	/// Seed a user row directly; the social layer only needs the id and the
	/// display name.
	pub async fn user(&self, email: &str, name: Option<&str>) -> i64 {
		let result = sqlx::query(
			"INSERT INTO users (email, password_hash, name, created_at) VALUES (?, ?, ?, ?)",
		)
		.bind(email)
		.bind("$argon2id$test")
		.bind(name)
		.bind("2026-01-01T00:00:00+00:00")
		.execute(&self.pool)
		.await
		.expect("seed user");
		result.last_insert_rowid()
	}

	/// Seed an artwork row directly.
	pub async fn artwork(&self, title: &str, price: &str) -> i64 {
		let result = sqlx::query(
			"INSERT INTO artworks (title, description, price, image_reference, created_at) \
			 VALUES (?, ?, ?, ?, ?)",
		)
		.bind(title)
		.bind(Option::<String>::None)
		.bind(price)
		.bind("uploads/seed.jpg")
		.bind("2026-01-01T00:00:00+00:00")
		.execute(&self.pool)
		.await
		.expect("seed artwork");
		result.last_insert_rowid()
	}

	pub async fn wishlist_rows(&self, user_id: i64, artwork_id: i64) -> i64 {
		sqlx::query_scalar(
			"SELECT count(*) FROM wishlist_items WHERE user_id = ? AND artwork_id = ?",
		)
		.bind(user_id)
		.bind(artwork_id)
		.fetch_one(&self.pool)
		.await
		.expect("count wishlist rows")
	}
}

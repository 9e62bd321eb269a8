//! Shared fixtures for the identity tests.

use std::sync::Arc;

use galleria_auth::{Argon2Hasher, IdentityService};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const ADMIN_EMAIL: &str = "owner@galleria.example";

/// A file-backed throwaway database with the schema created.
pub struct TestDb {
	// Held so the directory outlives the pool.
	_dir: TempDir,
	pub pool: SqlitePool,
}

impl TestDb {
	pub async fn new() -> Self {
		let dir = TempDir::new().expect("temp dir");
		let url = format!("sqlite://{}", dir.path().join("test.db").display());
		let pool = galleria_db::connect(&url).await.expect("connect");
		galleria_db::create_tables(&pool).await.expect("schema");
		Self { _dir: dir, pool }
	}
}

pub fn identity_service(db: &TestDb) -> IdentityService {
	IdentityService::new(db.pool.clone(), Arc::new(Argon2Hasher::new()), ADMIN_EMAIL)
}

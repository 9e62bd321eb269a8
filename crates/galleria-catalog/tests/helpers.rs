//! Shared fixtures for the catalog tests.

use std::path::PathBuf;
use std::sync::Arc;

use galleria_catalog::{ArtworkForm, CatalogService};
use galleria_storages::backends::LocalImageStore;
use galleria_storages::config::LocalConfig;
use galleria_storages::ImageUpload;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A throwaway database plus a local image store rooted in a temp dir.
pub struct TestShop {
	// Held so the directories outlive the services.
	_dir: TempDir,
	pub pool: SqlitePool,
	pub catalog: CatalogService,
	pub images_dir: PathBuf,
}

impl TestShop {
	pub async fn new() -> Self {
		let dir = TempDir::new().expect("temp dir");
		let url = format!("sqlite://{}", dir.path().join("test.db").display());
		let pool = galleria_db::connect(&url).await.expect("connect");
		galleria_db::create_tables(&pool).await.expect("schema");

		let images_dir = dir.path().join("uploads");
		let store = LocalImageStore::new(LocalConfig {
			base_dir: images_dir.to_string_lossy().into_owned(),
			public_prefix: "uploads".to_string(),
		})
		.expect("local store");

		let catalog = CatalogService::new(pool.clone(), Arc::new(store));

		Self {
			_dir: dir,
			pool,
			catalog,
			images_dir,
		}
	}

	/// Number of files currently stored by the image backend.
	pub fn stored_image_count(&self) -> usize {
		std::fs::read_dir(&self.images_dir)
			.map(|entries| entries.count())
			.unwrap_or(0)
	}
}

pub fn sunset_form() -> ArtworkForm {
	ArtworkForm {
		title: "Sunset".to_string(),
		description: "Oil on canvas".to_string(),
		price: "100".to_string(),
	}
}

pub fn jpeg_upload() -> ImageUpload {
	ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "sunset.jpg").with_content_type("image/jpeg")
}

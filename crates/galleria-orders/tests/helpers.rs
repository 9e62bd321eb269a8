//! Shared fixtures for the order tests.

use std::sync::Arc;

use galleria_catalog::{ArtworkForm, CatalogService};
use galleria_db::Artwork;
use galleria_orders::{CheckoutForm, OrderService};
use galleria_storages::ImageUpload;
use galleria_storages::backends::LocalImageStore;
use galleria_storages::config::LocalConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// A throwaway shop: database, local image store, catalog and orders.
pub struct TestShop {
	// Held so the directories outlive the services.
	_dir: TempDir,
	pub pool: SqlitePool,
	pub catalog: CatalogService,
	pub orders: OrderService,
}

impl TestShop {
	pub async fn new() -> Self {
		init_tracing();

		let dir = TempDir::new().expect("temp dir");
		let url = format!("sqlite://{}", dir.path().join("test.db").display());
		let pool = galleria_db::connect(&url).await.expect("connect");
		galleria_db::create_tables(&pool).await.expect("schema");

		let store = LocalImageStore::new(LocalConfig {
			base_dir: dir.path().join("uploads").to_string_lossy().into_owned(),
			public_prefix: "uploads".to_string(),
		})
		.expect("local store");

		let catalog = CatalogService::new(pool.clone(), Arc::new(store));
		let orders = OrderService::new(pool.clone());

		Self {
			_dir: dir,
			pool,
			catalog,
			orders,
		}
	}

	/// Create a catalog artwork with an image.
	pub async fn artwork(&self, title: &str, price: &str) -> Artwork {
		let form = ArtworkForm {
			title: title.to_string(),
			description: String::new(),
			price: price.to_string(),
		};
		let upload = ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "art.jpg");
		self.catalog
			.create_artwork(&form, Some(&upload))
			.await
			.expect("create artwork")
	}

	pub async fn order_count(&self) -> i64 {
		sqlx::query_scalar("SELECT count(*) FROM orders")
			.fetch_one(&self.pool)
			.await
			.expect("count orders")
	}
}

pub fn valid_checkout() -> CheckoutForm {
	CheckoutForm {
		buyer_name: "Jane Doe".to_string(),
		buyer_email: String::new(),
		phone: "9876543210".to_string(),
		address_line1: "12 Main St".to_string(),
		address_line2: String::new(),
		postal_code: "560001".to_string(),
		payment_method: "cod".to_string(),
		quantity: "2".to_string(),
	}
}

fn init_tracing() {
	use tracing_subscriber::EnvFilter;

	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

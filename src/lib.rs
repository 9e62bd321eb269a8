//! # Galleria
//!
//! Storefront core for a small art-gallery shop.
//!
//! Galleria is the service layer behind a server-rendered storefront: a
//! public gallery of artworks, a cash-on-delivery checkout, a
//! wishlist/likes/comments social layer, and the back office for the single
//! configured administrator. The presentation layer (routing, templates,
//! cookies, static files) is an external collaborator — it hands the
//! services string-typed form fields plus an optional [`Session`], and maps
//! the typed results and errors to responses. No HTML or HTTP types appear
//! anywhere in this workspace.
//!
//! ## Wiring
//!
//! Everything process-wide is created once by [`Storefront::bootstrap`]:
//! the SQLite pool, the schema, the configured image store, the services,
//! and the seeded admin user.
//!
//! ```rust,no_run
//! use galleria::{Settings, Storefront};
//! use galleria::storages::ImageStoreConfig;
//!
//! # async fn example() -> Result<(), galleria::Error> {
//! let settings = Settings::from_env()?;
//! let images = ImageStoreConfig::from_env().map_err(|e| galleria::Error::Config(e.to_string()))?;
//! let shop = Storefront::bootstrap(&settings, images).await?;
//!
//! let gallery = shop.catalog.list_artworks().await?;
//! # let _ = gallery;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub use galleria_auth as auth;
pub use galleria_catalog as catalog;
pub use galleria_db as db;
pub use galleria_orders as orders;
pub use galleria_social as social;
pub use galleria_storages as storages;
pub use galleria_support as support;

pub use galleria_auth::Session;
pub use galleria_core::{Error, Settings, ValidationErrors};

use galleria_auth::{Argon2Hasher, IdentityService, PasswordHasher};
use galleria_catalog::CatalogService;
use galleria_orders::OrderService;
use galleria_social::SocialService;
use galleria_storages::{ImageStoreConfig, create_image_store};
use galleria_support::SupportService;
use sqlx::SqlitePool;

/// The wired-up storefront: one pool, one image store, every service.
pub struct Storefront {
	pub pool: SqlitePool,
	pub identity: IdentityService,
	pub catalog: CatalogService,
	pub orders: OrderService,
	pub social: SocialService,
	pub support: SupportService,
}

impl Storefront {
	/// Connect the store, create the schema, build the configured image
	/// store, construct the services and seed the admin user.
	///
	/// Runs once at process start; the returned value is shared by every
	/// request for the lifetime of the process.
	pub async fn bootstrap(settings: &Settings, images: ImageStoreConfig) -> Result<Self, Error> {
		let pool = galleria_db::connect(&settings.database_url)
			.await
			.map_err(|e| Error::Database(e.to_string()))?;
		galleria_db::create_tables(&pool)
			.await
			.map_err(|e| Error::Database(e.to_string()))?;

		let images = create_image_store(images)
			.await
			.map_err(|e| Error::Storage(e.to_string()))?;

		let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher::new());
		let identity = IdentityService::new(pool.clone(), hasher, settings.admin_email.clone());
		identity
			.ensure_admin_user(&settings.admin_password, settings.admin_name.as_deref())
			.await?;

		let catalog = CatalogService::new(pool.clone(), Arc::clone(&images));
		let orders = OrderService::new(pool.clone());
		let social = SocialService::new(pool.clone());
		let support = SupportService::new(pool.clone());

		Ok(Self {
			pool,
			identity,
			catalog,
			orders,
			social,
			support,
		})
	}
}

//! Factory function for creating the configured image store.

use std::sync::Arc;

use crate::{ImageStore, ImageStoreConfig, Result};

/// Create the image store the configuration selects.
///
/// Called once at startup; the rest of the process only sees the returned
/// capability and never branches on the active backend.
///
/// ```rust,no_run
/// use galleria_storages::{ImageStoreConfig, create_image_store};
///
/// # async fn example() -> galleria_storages::Result<()> {
/// let config = ImageStoreConfig::from_env()?;
/// let images = create_image_store(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn create_image_store(config: ImageStoreConfig) -> Result<Arc<dyn ImageStore>> {
	match config {
		ImageStoreConfig::Local(local_config) => {
			let store = crate::backends::local::LocalImageStore::new(local_config)?;
			Ok(Arc::new(store))
		}
		ImageStoreConfig::S3(s3_config) => {
			let store = crate::backends::s3::S3ImageStore::new(s3_config).await?;
			Ok(Arc::new(store))
		}
	}
}

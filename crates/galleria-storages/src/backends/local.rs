//! Local file system backend.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::config::LocalConfig;
use crate::naming::generate_name;
use crate::store::{ImageStore, ImageUpload};
use crate::{Result, StorageError};

/// Stores images under a base directory and persists references as
/// `<public_prefix>/<generated name>` relative paths, which the collaborator
/// serves as static files.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
	base_dir: PathBuf,
	public_prefix: String,
}

impl LocalImageStore {
	/// Create the backend, creating the base directory if needed.
	pub fn new(config: LocalConfig) -> Result<Self> {
		let base_dir = PathBuf::from(config.base_dir);
		std::fs::create_dir_all(&base_dir)?;

		if !base_dir.is_dir() {
			return Err(StorageError::Config(format!(
				"Base path is not a directory: {}",
				base_dir.display()
			)));
		}

		Ok(Self {
			base_dir,
			public_prefix: config.public_prefix.trim_matches('/').to_string(),
		})
	}

	/// The on-disk path for a persisted reference.
	///
	/// References are flat: only the final segment names a file, so a
	/// reference minted by another backend simply fails to resolve here.
	fn path_of(&self, reference: &str) -> PathBuf {
		let name = reference.rsplit('/').next().unwrap_or(reference);
		self.base_dir.join(name)
	}

	fn reference_of(&self, name: &str) -> String {
		if self.public_prefix.is_empty() {
			name.to_string()
		} else {
			format!("{}/{}", self.public_prefix, name)
		}
	}
}

#[async_trait]
impl ImageStore for LocalImageStore {
	async fn put(&self, upload: &ImageUpload) -> Result<String> {
		let name = generate_name(&upload.original_name);
		let path = self.base_dir.join(&name);

		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).await?;
		}

		fs::write(&path, &upload.bytes).await?;

		Ok(self.reference_of(&name))
	}

	async fn delete(&self, reference: &str) -> Result<()> {
		let path = self.path_of(reference);

		if !path.exists() {
			return Err(StorageError::NotFound(reference.to_string()));
		}

		fs::remove_file(&path).await?;
		Ok(())
	}

	async fn exists(&self, reference: &str) -> Result<bool> {
		let path = self.path_of(reference);
		Ok(path.exists() && path.is_file())
	}
}

//! The image store capability.

use async_trait::async_trait;

use crate::Result;

/// A submitted image file, as received from the upload form.
///
/// Size and content-type limits are enforced at the transport boundary
/// before the bytes reach this crate.
#[derive(Debug, Clone)]
pub struct ImageUpload {
	pub bytes: Vec<u8>,
	pub original_name: String,
	pub content_type: Option<String>,
}

impl ImageUpload {
	pub fn new(bytes: Vec<u8>, original_name: impl Into<String>) -> Self {
		Self {
			bytes,
			original_name: original_name.into(),
			content_type: None,
		}
	}

	pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
		self.content_type = Some(content_type.into());
		self
	}
}

/// Storage capability for artwork images.
///
/// Implementations are interchangeable; the catalog only ever holds the
/// opaque reference a backend returned and hands it back for deletion.
///
/// ```rust,no_run
/// use galleria_storages::{ImageStore, ImageUpload, Result};
///
/// async fn example(images: &dyn ImageStore) -> Result<()> {
///     let upload = ImageUpload::new(vec![0xFF, 0xD8], "sunset.jpg");
///     let reference = images.put(&upload).await?;
///     images.delete(&reference).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ImageStore: Send + Sync {
	/// Store the upload and return the reference to persist on the artwork.
	///
	/// The reference is immediately retrievable once this returns; there is
	/// no asynchronous finalization.
	async fn put(&self, upload: &ImageUpload) -> Result<String>;

	/// Remove a previously returned reference.
	///
	/// Returns [`crate::StorageError::NotFound`] when the reference does not
	/// exist on this backend.
	async fn delete(&self, reference: &str) -> Result<()>;

	/// Whether a previously returned reference still resolves.
	async fn exists(&self, reference: &str) -> Result<bool>;
}

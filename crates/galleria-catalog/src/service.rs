//! The catalog service.

use std::sync::Arc;

use chrono::Utc;
use galleria_core::ValidationErrors;
use galleria_db::{Artwork, format_timestamp};
use galleria_storages::{ImageStore, ImageUpload};
use sqlx::SqlitePool;

use crate::CatalogError;
use crate::forms::ArtworkForm;

/// Artwork CRUD for the public gallery and the back office.
pub struct CatalogService {
	pool: SqlitePool,
	images: Arc<dyn ImageStore>,
}

impl CatalogService {
	pub fn new(pool: SqlitePool, images: Arc<dyn ImageStore>) -> Self {
		Self { pool, images }
	}

	/// Create an artwork. Title and a positive price are required, and so is
	/// an image upload; everything is validated before any write.
	pub async fn create_artwork(
		&self,
		form: &ArtworkForm,
		image: Option<&ImageUpload>,
	) -> Result<Artwork, CatalogError> {
		let mut errors = ValidationErrors::new();
		let fields = match form.validate() {
			Ok(fields) => Some(fields),
			Err(e) => {
				errors = e;
				None
			}
		};
		if image.is_none() {
			errors.add("image", "is required");
		}
		let (Some(fields), Some(image)) = (fields, image) else {
			return Err(CatalogError::Validation(errors));
		};

		let reference = self.images.put(image).await?;

		let inserted = sqlx::query(
			"INSERT INTO artworks (title, description, price, image_reference, created_at) \
			 VALUES (?, ?, ?, ?, ?)",
		)
		.bind(&fields.title)
		.bind(&fields.description)
		.bind(fields.price.to_string())
		.bind(&reference)
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await;

		let result = match inserted {
			Ok(result) => result,
			Err(e) => {
				// Keep image and row consistent: a failed insert must not
				// leave the just-stored image behind.
				if let Err(cleanup) = self.images.delete(&reference).await {
					tracing::warn!(%reference, error = %cleanup, "failed to remove image after insert error");
				}
				return Err(e.into());
			}
		};

		self.get_artwork(result.last_insert_rowid()).await
	}

	/// Update an artwork. A newly supplied image replaces the stored one;
	/// deleting the old reference is best-effort and never fails the update.
	pub async fn update_artwork(
		&self,
		id: i64,
		form: &ArtworkForm,
		image: Option<&ImageUpload>,
	) -> Result<Artwork, CatalogError> {
		let existing = self.get_artwork(id).await?;
		let fields = form.validate()?;

		let image_reference = match image {
			Some(upload) => {
				if let Err(e) = self.images.delete(&existing.image_reference).await {
					tracing::warn!(
						reference = %existing.image_reference,
						error = %e,
						"failed to remove replaced image"
					);
				}
				self.images.put(upload).await?
			}
			None => existing.image_reference,
		};

		sqlx::query(
			"UPDATE artworks SET title = ?, description = ?, price = ?, image_reference = ? \
			 WHERE id = ?",
		)
		.bind(&fields.title)
		.bind(&fields.description)
		.bind(fields.price.to_string())
		.bind(&image_reference)
		.bind(id)
		.execute(&self.pool)
		.await?;

		self.get_artwork(id).await
	}

	/// Delete an artwork and, best-effort, its stored image.
	///
	/// Orders referencing the artwork are untouched; they keep rendering
	/// from the title/price snapshot taken at placement.
	pub async fn delete_artwork(&self, id: i64) -> Result<(), CatalogError> {
		let existing = self.get_artwork(id).await?;

		if let Err(e) = self.images.delete(&existing.image_reference).await {
			tracing::warn!(
				reference = %existing.image_reference,
				error = %e,
				"failed to remove image of deleted artwork"
			);
		}

		sqlx::query("DELETE FROM artworks WHERE id = ?")
			.bind(id)
			.execute(&self.pool)
			.await?;

		Ok(())
	}

	/// The gallery listing, newest first.
	pub async fn list_artworks(&self) -> Result<Vec<Artwork>, CatalogError> {
		let rows = sqlx::query("SELECT * FROM artworks ORDER BY created_at DESC, id DESC")
			.fetch_all(&self.pool)
			.await?;

		let mut artworks = Vec::with_capacity(rows.len());
		for row in &rows {
			artworks.push(Artwork::from_row(row)?);
		}
		Ok(artworks)
	}

	pub async fn get_artwork(&self, id: i64) -> Result<Artwork, CatalogError> {
		let row = sqlx::query("SELECT * FROM artworks WHERE id = ?")
			.bind(id)
			.fetch_optional(&self.pool)
			.await?;

		match row {
			Some(row) => Ok(Artwork::from_row(&row)?),
			None => Err(CatalogError::NotFound(id)),
		}
	}
}

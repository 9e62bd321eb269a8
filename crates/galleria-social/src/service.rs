//! The social service.

use chrono::Utc;
use galleria_core::validate::{MaxTrimmedLength, MinTrimmedLength, ValidationErrors};
use galleria_db::{Artwork, ArtworkComment, User, format_timestamp};
use sqlx::SqlitePool;

use crate::SocialError;

const MAX_COMMENT_CHARS: usize = 500;

const WISHLIST_TABLE: &str = "wishlist_items";
const LIKES_TABLE: &str = "artwork_likes";

/// Result of a wishlist toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WishlistToggle {
	/// Whether the artwork is on the wishlist after this call.
	pub saved: bool,
}

/// Result of a like toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LikeToggle {
	/// Whether this user likes the artwork after this call.
	pub liked: bool,
	/// Fresh `count(*)` over the likes table for this artwork.
	pub like_count: i64,
}

/// Wishlist, likes and comments.
pub struct SocialService {
	pool: SqlitePool,
}

impl SocialService {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// Flip an artwork's presence on a user's wishlist.
	pub async fn toggle_wishlist(
		&self,
		user_id: i64,
		artwork_id: i64,
	) -> Result<WishlistToggle, SocialError> {
		if self.pair_exists(WISHLIST_TABLE, user_id, artwork_id).await? {
			self.delete_pair(WISHLIST_TABLE, user_id, artwork_id).await?;
			return Ok(WishlistToggle { saved: false });
		}

		self.insert_pair(WISHLIST_TABLE, user_id, artwork_id).await?;
		Ok(WishlistToggle { saved: true })
	}

	/// Flip a user's like on an artwork and return the fresh total.
	///
	/// The count is recomputed on every call, never cached.
	pub async fn toggle_like(
		&self,
		user_id: i64,
		artwork_id: i64,
	) -> Result<LikeToggle, SocialError> {
		let liked = if self.pair_exists(LIKES_TABLE, user_id, artwork_id).await? {
			self.delete_pair(LIKES_TABLE, user_id, artwork_id).await?;
			false
		} else {
			self.insert_pair(LIKES_TABLE, user_id, artwork_id).await?;
			true
		};

		Ok(LikeToggle {
			liked,
			like_count: self.like_count(artwork_id).await?,
		})
	}

	/// Append a comment to an artwork's detail page.
	///
	/// The writer's display name is copied onto the comment row, so renames
	/// later on do not rewrite what old comments show.
	pub async fn add_comment(
		&self,
		user_id: i64,
		artwork_id: i64,
		text: &str,
	) -> Result<ArtworkComment, SocialError> {
		let trimmed = text.trim();

		let mut errors = ValidationErrors::new();
		errors.check("comment", trimmed, &MinTrimmedLength::new(1));
		errors.check("comment", trimmed, &MaxTrimmedLength::new(MAX_COMMENT_CHARS));
		errors.into_result(())?;

		let user = self
			.find_user(user_id)
			.await?
			.ok_or(SocialError::UserNotFound(user_id))?;

		let result = sqlx::query(
			"INSERT INTO artwork_comments (user_id, artwork_id, user_name, comment, created_at) \
			 VALUES (?, ?, ?, ?, ?)",
		)
		.bind(user_id)
		.bind(artwork_id)
		.bind(user.display_name())
		.bind(trimmed)
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await?;

		let row = sqlx::query("SELECT * FROM artwork_comments WHERE id = ?")
			.bind(result.last_insert_rowid())
			.fetch_one(&self.pool)
			.await?;
		Ok(ArtworkComment::from_row(&row)?)
	}

	/// Comments for one artwork, newest first.
	pub async fn list_comments(&self, artwork_id: i64) -> Result<Vec<ArtworkComment>, SocialError> {
		let rows = sqlx::query(
			"SELECT * FROM artwork_comments WHERE artwork_id = ? \
			 ORDER BY created_at DESC, id DESC",
		)
		.bind(artwork_id)
		.fetch_all(&self.pool)
		.await?;

		let mut comments = Vec::with_capacity(rows.len());
		for row in &rows {
			comments.push(ArtworkComment::from_row(row)?);
		}
		Ok(comments)
	}

	/// Visible like total for one artwork.
	pub async fn like_count(&self, artwork_id: i64) -> Result<i64, SocialError> {
		let count = sqlx::query_scalar("SELECT count(*) FROM artwork_likes WHERE artwork_id = ?")
			.bind(artwork_id)
			.fetch_one(&self.pool)
			.await?;
		Ok(count)
	}

	pub async fn is_wishlisted(&self, user_id: i64, artwork_id: i64) -> Result<bool, SocialError> {
		self.pair_exists(WISHLIST_TABLE, user_id, artwork_id).await
	}

	pub async fn is_liked(&self, user_id: i64, artwork_id: i64) -> Result<bool, SocialError> {
		self.pair_exists(LIKES_TABLE, user_id, artwork_id).await
	}

	/// The artworks on a user's wishlist, most recently saved first.
	pub async fn wishlist_artworks(&self, user_id: i64) -> Result<Vec<Artwork>, SocialError> {
		let rows = sqlx::query(
			"SELECT a.* FROM artworks a \
			 JOIN wishlist_items w ON w.artwork_id = a.id \
			 WHERE w.user_id = ? \
			 ORDER BY w.created_at DESC, w.id DESC",
		)
		.bind(user_id)
		.fetch_all(&self.pool)
		.await?;

		let mut artworks = Vec::with_capacity(rows.len());
		for row in &rows {
			artworks.push(Artwork::from_row(row)?);
		}
		Ok(artworks)
	}

	async fn pair_exists(
		&self,
		table: &'static str,
		user_id: i64,
		artwork_id: i64,
	) -> Result<bool, SocialError> {
		let count: i64 = sqlx::query_scalar(&format!(
			"SELECT count(*) FROM {table} WHERE user_id = ? AND artwork_id = ?"
		))
		.bind(user_id)
		.bind(artwork_id)
		.fetch_one(&self.pool)
		.await?;
		Ok(count > 0)
	}

	async fn delete_pair(
		&self,
		table: &'static str,
		user_id: i64,
		artwork_id: i64,
	) -> Result<(), SocialError> {
		sqlx::query(&format!(
			"DELETE FROM {table} WHERE user_id = ? AND artwork_id = ?"
		))
		.bind(user_id)
		.bind(artwork_id)
		.execute(&self.pool)
		.await?;
		Ok(())
	}

	/// Insert the pair; `false` means it was already there.
	///
	/// Between the existence check and this insert another request can win
	/// the race. The unique pair index catches that, and the violation is
	/// reinterpreted as "already in this state" rather than surfaced.
	async fn insert_pair(
		&self,
		table: &'static str,
		user_id: i64,
		artwork_id: i64,
	) -> Result<bool, SocialError> {
		let inserted = sqlx::query(&format!(
			"INSERT INTO {table} (user_id, artwork_id, created_at) VALUES (?, ?, ?)"
		))
		.bind(user_id)
		.bind(artwork_id)
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await;

		match inserted {
			Ok(_) => Ok(true),
			Err(e) if is_unique_violation(&e) => Ok(false),
			Err(e) => Err(e.into()),
		}
	}

	async fn find_user(&self, user_id: i64) -> Result<Option<User>, SocialError> {
		let row = sqlx::query("SELECT * FROM users WHERE id = ?")
			.bind(user_id)
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref()
			.map(User::from_row)
			.transpose()
			.map_err(Into::into)
	}
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
	err.as_database_error()
		.map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
		.unwrap_or(false)
}

#[cfg(test)]
mod tests {
	use sqlx::sqlite::SqlitePoolOptions;

	use super::*;

	async fn service() -> SocialService {
		let pool = SqlitePoolOptions::new()
			.max_connections(1)
			.connect("sqlite::memory:")
			.await
			.unwrap();
		galleria_db::create_tables(&pool).await.unwrap();
		SocialService::new(pool)
	}

	#[tokio::test]
	async fn losing_the_insert_race_reads_as_already_present() {
		let social = service().await;

		// Another request got between the existence check and this insert.
		assert!(social.insert_pair(WISHLIST_TABLE, 1, 2).await.unwrap());
		let second = social.insert_pair(WISHLIST_TABLE, 1, 2).await.unwrap();

		// The unique violation is absorbed, not surfaced.
		assert!(!second);
	}

	#[tokio::test]
	async fn the_like_table_backstop_behaves_the_same_way() {
		let social = service().await;

		assert!(social.insert_pair(LIKES_TABLE, 1, 2).await.unwrap());
		assert!(!social.insert_pair(LIKES_TABLE, 1, 2).await.unwrap());
	}
}

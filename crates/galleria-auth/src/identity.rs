//! The identity service.

use std::sync::{Arc, OnceLock};

use chrono::Utc;
use galleria_core::validate::{MinTrimmedLength, ValidationErrors};
use galleria_db::{User, format_timestamp};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::hasher::PasswordHasher;
use crate::session::Session;
use crate::AuthError;

const MIN_PASSWORD_CHARS: usize = 6;

/// Registration, login and the admin predicate.
pub struct IdentityService {
	pool: SqlitePool,
	hasher: Arc<dyn PasswordHasher>,
	admin_email: String,
}

impl IdentityService {
	pub fn new(
		pool: SqlitePool,
		hasher: Arc<dyn PasswordHasher>,
		admin_email: impl Into<String>,
	) -> Self {
		Self {
			pool,
			hasher,
			admin_email: admin_email.into(),
		}
	}

	/// Register a new shopper and log them in.
	///
	/// Email and password are required and the password must be at least six
	/// characters. Emails are unique by exact stored value; there is no
	/// normalization, so `Ana@example.com` and `ana@example.com` are two
	/// accounts.
	pub async fn register(
		&self,
		email: &str,
		password: &str,
		name: Option<&str>,
	) -> Result<Session, AuthError> {
		let email = email.trim();

		let mut errors = ValidationErrors::new();
		errors.check("email", email, &MinTrimmedLength::new(1));
		if password.chars().count() < MIN_PASSWORD_CHARS {
			errors.add(
				"password",
				format!("must be at least {} characters", MIN_PASSWORD_CHARS),
			);
		}
		if !errors.is_empty() {
			return Err(AuthError::Validation(errors));
		}

		if self.find_user_by_email(email).await?.is_some() {
			return Err(AuthError::Validation(email_taken()));
		}

		let password_hash = self.hasher.hash(password)?;
		let user = match self.insert_user(email, &password_hash, name).await {
			Ok(user) => user,
			// Two registrations racing on the same email: the unique column
			// is the backstop, reported as the same field error.
			Err(e) if is_unique_violation(&e) => {
				return Err(AuthError::Validation(email_taken()));
			}
			Err(e) => return Err(e.into()),
		};

		Ok(Session::for_user(&user))
	}

	/// Authenticate a shopper by email and password.
	pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
		let user = self.find_user_by_email(email.trim()).await?;

		let Some(user) = user else {
			// Hash-check a throwaway value so the unknown-email path costs
			// about as much as a real verification.
			let _ = self.hasher.verify(password, self.dummy_hash());
			return Err(AuthError::InvalidCredentials);
		};

		// Unusable external-identity markers are not parseable hashes; those
		// accounts can never log in with a password.
		match self.hasher.verify(password, &user.password_hash) {
			Ok(true) => Ok(Session::for_user(&user)),
			Ok(false) | Err(AuthError::Hash(_)) => Err(AuthError::InvalidCredentials),
			Err(e) => Err(e),
		}
	}

	/// Log in via a third-party identity hand-off, creating the account on
	/// first contact.
	///
	/// New accounts get an unusable password marker, so the only way into
	/// them is the external provider.
	pub async fn login_or_create_from_external_identity(
		&self,
		email: &str,
		display_name: &str,
		external_id: &str,
	) -> Result<Session, AuthError> {
		let email = email.trim();

		if let Some(user) = self.find_user_by_email(email).await? {
			return Ok(Session::for_user(&user));
		}

		let marker = format!("!external:{}:{}", external_id, Uuid::new_v4());
		let name = if display_name.trim().is_empty() {
			None
		} else {
			Some(display_name.trim())
		};

		let user = match self.insert_user(email, &marker, name).await {
			Ok(user) => user,
			// Lost a race against another hand-off for the same email.
			Err(e) if is_unique_violation(&e) => self
				.find_user_by_email(email)
				.await?
				.ok_or(AuthError::Database(sqlx::Error::RowNotFound))?,
			Err(e) => return Err(e.into()),
		};

		Ok(Session::for_user(&user))
	}

	/// Whether this session belongs to the administrator.
	pub fn is_admin(&self, session: &Session) -> bool {
		session.email == self.admin_email
	}

	/// Seed the admin row if it does not exist yet. Runs on every startup.
	pub async fn ensure_admin_user(
		&self,
		password: &str,
		name: Option<&str>,
	) -> Result<(), AuthError> {
		if self.find_user_by_email(&self.admin_email).await?.is_some() {
			return Ok(());
		}

		let password_hash = self.hasher.hash(password)?;
		match self.insert_user(&self.admin_email, &password_hash, name).await {
			Ok(_) => {
				tracing::info!(email = %self.admin_email, "seeded admin user");
				Ok(())
			}
			// Another instance of the bootstrap got there first.
			Err(e) if is_unique_violation(&e) => Ok(()),
			Err(e) => Err(e.into()),
		}
	}

	/// Every registered user, newest first, for the back-office user screen.
	pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
		let rows = sqlx::query("SELECT * FROM users ORDER BY created_at DESC, id DESC")
			.fetch_all(&self.pool)
			.await?;

		let mut users = Vec::with_capacity(rows.len());
		for row in &rows {
			users.push(User::from_row(row)?);
		}
		Ok(users)
	}

	async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
		let row = sqlx::query("SELECT * FROM users WHERE email = ?")
			.bind(email)
			.fetch_optional(&self.pool)
			.await?;

		row.as_ref().map(User::from_row).transpose().map_err(Into::into)
	}

	async fn insert_user(
		&self,
		email: &str,
		password_hash: &str,
		name: Option<&str>,
	) -> Result<User, sqlx::Error> {
		let result = sqlx::query(
			"INSERT INTO users (email, password_hash, name, created_at) VALUES (?, ?, ?, ?)",
		)
		.bind(email)
		.bind(password_hash)
		.bind(name)
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await?;

		let row = sqlx::query("SELECT * FROM users WHERE id = ?")
			.bind(result.last_insert_rowid())
			.fetch_one(&self.pool)
			.await?;
		User::from_row(&row)
	}

	fn dummy_hash(&self) -> &str {
		static DUMMY: OnceLock<String> = OnceLock::new();
		DUMMY.get_or_init(|| {
			self.hasher
				.hash("galleria.login-padding")
				.unwrap_or_default()
		})
	}
}

fn email_taken() -> ValidationErrors {
	let mut errors = ValidationErrors::new();
	errors.add("email", "is already registered");
	errors
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
	err.as_database_error()
		.map(|db| matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation))
		.unwrap_or(false)
}

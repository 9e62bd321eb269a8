//! The support service.

use chrono::Utc;
use galleria_auth::Session;
use galleria_core::validate::{MinTrimmedLength, ValidationErrors};
use galleria_db::{SupportMessage, format_timestamp};
use sqlx::SqlitePool;

use crate::SupportError;

const INITIAL_STATUS: &str = "pending";

/// The contact form, as string-typed fields straight from the presentation
/// layer. Name and email only matter for anonymous submissions.
#[derive(Debug, Clone, Default)]
pub struct SupportForm {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

/// The support inbox.
pub struct SupportService {
	pool: SqlitePool,
}

impl SupportService {
	pub fn new(pool: SqlitePool) -> Self {
		Self { pool }
	}

	/// File a support ticket.
	///
	/// With a session, the writer's identity is taken from it; without one,
	/// the form must carry a name and an email. Either way the values are
	/// copied onto the row as they are now.
	pub async fn submit_message(
		&self,
		session: Option<&Session>,
		form: &SupportForm,
	) -> Result<SupportMessage, SupportError> {
		let mut errors = ValidationErrors::new();
		errors.check("subject", form.subject.as_str(), &MinTrimmedLength::new(1));
		errors.check("message", form.message.as_str(), &MinTrimmedLength::new(1));
		if session.is_none() {
			errors.check("name", form.name.as_str(), &MinTrimmedLength::new(1));
			errors.check("email", form.email.as_str(), &MinTrimmedLength::new(1));
		}
		errors.into_result(())?;

		let (user_id, user_name, user_email) = match session {
			Some(session) => (
				Some(session.id),
				session
					.name
					.clone()
					.unwrap_or_else(|| session.email.clone()),
				session.email.clone(),
			),
			None => (
				None,
				form.name.trim().to_string(),
				form.email.trim().to_string(),
			),
		};

		let result = sqlx::query(
			"INSERT INTO support_messages (user_id, user_name, user_email, subject, message, \
			 status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
		)
		.bind(user_id)
		.bind(&user_name)
		.bind(&user_email)
		.bind(form.subject.trim())
		.bind(form.message.trim())
		.bind(INITIAL_STATUS)
		.bind(format_timestamp(Utc::now()))
		.execute(&self.pool)
		.await?;

		let row = sqlx::query("SELECT * FROM support_messages WHERE id = ?")
			.bind(result.last_insert_rowid())
			.fetch_one(&self.pool)
			.await?;
		Ok(SupportMessage::from_row(&row)?)
	}

	/// Every ticket, newest first, for the back-office inbox.
	pub async fn list_messages(&self) -> Result<Vec<SupportMessage>, SupportError> {
		let rows = sqlx::query("SELECT * FROM support_messages ORDER BY created_at DESC, id DESC")
			.fetch_all(&self.pool)
			.await?;

		let mut messages = Vec::with_capacity(rows.len());
		for row in &rows {
			messages.push(SupportMessage::from_row(row)?);
		}
		Ok(messages)
	}
}

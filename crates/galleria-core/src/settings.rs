//! Process settings.
//!
//! Resolved once from environment variables at startup and read-only
//! afterwards. The admin identity lives here: there is no role table, just a
//! single configured email every admin-only operation compares against.

use std::env;

use thiserror::Error;

/// Settings error.
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("{0} environment variable not set")]
	Missing(&'static str),
}

impl From<SettingsError> for crate::Error {
	fn from(err: SettingsError) -> Self {
		crate::Error::Config(err.to_string())
	}
}

/// Storefront settings.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (required)
/// - `ADMIN_EMAIL`: the single administrator identity (required)
/// - `ADMIN_PASSWORD`: bootstrap password for seeding the admin row (required)
/// - `ADMIN_NAME`: display name for the admin row (optional)
#[derive(Debug, Clone)]
pub struct Settings {
	pub database_url: String,
	pub admin_email: String,
	pub admin_password: String,
	pub admin_name: Option<String>,
}

impl Settings {
	/// Load settings from the environment.
	pub fn from_env() -> Result<Self, SettingsError> {
		Ok(Self {
			database_url: require("DATABASE_URL")?,
			admin_email: require("ADMIN_EMAIL")?,
			admin_password: require("ADMIN_PASSWORD")?,
			admin_name: env::var("ADMIN_NAME").ok(),
		})
	}
}

fn require(name: &'static str) -> Result<String, SettingsError> {
	env::var(name).map_err(|_| SettingsError::Missing(name))
}

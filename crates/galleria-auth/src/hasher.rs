//! Password hashing.

use crate::AuthError;

/// Password hasher trait.
///
/// The identity service only depends on this trait; the algorithm is an
/// implementation detail behind it.
///
/// ```
/// use galleria_auth::{Argon2Hasher, PasswordHasher};
///
/// let hasher = Argon2Hasher::new();
/// let hash = hasher.hash("my_secure_password").unwrap();
///
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// assert!(!hasher.verify("wrong_password", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
	/// Hashes a password into a self-describing PHC string.
	fn hash(&self, password: &str) -> Result<String, AuthError>;

	/// Verifies a password against a stored hash.
	///
	/// `Ok(false)` means the password does not match; an error means the
	/// stored value is not a parseable hash at all.
	fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Argon2id password hasher.
pub struct Argon2Hasher;

impl Argon2Hasher {
	pub fn new() -> Self {
		Self
	}
}

impl Default for Argon2Hasher {
	fn default() -> Self {
		Self::new()
	}
}

impl PasswordHasher for Argon2Hasher {
	fn hash(&self, password: &str) -> Result<String, AuthError> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
		};

		let salt = SaltString::generate(&mut OsRng);

		Argon2::default()
			.hash_password(password.as_bytes(), &salt)
			.map(|hash| hash.to_string())
			.map_err(|e| AuthError::Hash(e.to_string()))
	}

	fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
		use argon2::{
			Argon2,
			password_hash::{PasswordHash, PasswordVerifier},
		};

		let parsed_hash = PasswordHash::new(hash).map_err(|e| AuthError::Hash(e.to_string()))?;

		Ok(Argon2::default()
			.verify_password(password.as_bytes(), &parsed_hash)
			.is_ok())
	}
}

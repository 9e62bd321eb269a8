//! # galleria-auth
//!
//! Identity for the storefront: registration and login against the users
//! table, Argon2id password hashing behind the [`PasswordHasher`] trait,
//! external-identity hand-off, and the single-admin predicate.
//!
//! There is no role table. One configured email is the administrator, the
//! [`IdentityService::is_admin`] comparison is the entire authorization
//! layer, and every admin-only operation re-checks it.

pub mod error;
pub mod hasher;
pub mod identity;
pub mod session;

pub use error::AuthError;
pub use hasher::{Argon2Hasher, PasswordHasher};
pub use identity::IdentityService;
pub use session::Session;

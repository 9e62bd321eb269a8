//! # galleria-core
//!
//! Shared foundations for the Galleria storefront: the process-wide
//! [`Settings`] resolved once from the environment, the application-level
//! [`Error`] taxonomy that the service crates convert into, and the
//! field-scoped validation layer used by every form-handling operation.

pub mod error;
pub mod settings;
pub mod validate;

pub use error::Error;
pub use settings::{Settings, SettingsError};
pub use validate::{FieldError, ValidationErrors, Validator};

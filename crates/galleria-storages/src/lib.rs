//! # galleria-storages
//!
//! Image storage for the storefront catalog.
//!
//! Artwork uploads are resolved to an opaque string reference — a relative
//! path under the public uploads prefix, or an absolute URL on the object
//! store — through a single [`ImageStore`] capability with two backends:
//!
//! - **Local**: writes under a base directory with `tokio::fs`
//! - **S3**: uploads under a namespaced key and returns a public URL
//!
//! The backend is selected once at startup by [`create_image_store`] from
//! env-driven [`ImageStoreConfig`]; callers only ever see the trait. Both
//! backends return references that are immediately retrievable, and remote
//! calls run under an explicit timeout so a stalled upload becomes a
//! retryable failure instead of a hung request.

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod naming;
pub mod store;

pub use config::ImageStoreConfig;
pub use error::{Result, StorageError};
pub use factory::create_image_store;
pub use store::{ImageStore, ImageUpload};

//! Configuration types for the image store backends.

use std::env;
use std::str::FromStr;

use crate::{Result, StorageError};

const DEFAULT_PUBLIC_PREFIX: &str = "uploads";
const DEFAULT_KEY_PREFIX: &str = "artworks";
const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Image backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
	/// Local file system under the served uploads directory
	Local,
	/// Amazon S3 (or an S3-compatible endpoint)
	S3,
}

impl FromStr for BackendType {
	type Err = StorageError;

	fn from_str(s: &str) -> Result<Self> {
		match s.to_lowercase().as_str() {
			"local" => Ok(BackendType::Local),
			"s3" => Ok(BackendType::S3),
			_ => Err(StorageError::Config(format!(
				"Invalid image backend: {}",
				s
			))),
		}
	}
}

/// Configuration for the local file system backend.
#[derive(Debug, Clone)]
pub struct LocalConfig {
	/// Directory the images are written into
	pub base_dir: String,
	/// Prefix prepended to stored names to form the persisted reference
	pub public_prefix: String,
}

/// Configuration for the S3 backend.
#[derive(Debug, Clone)]
pub struct S3Config {
	/// Bucket name
	pub bucket: String,
	/// AWS region (e.g. "eu-central-1")
	pub region: Option<String>,
	/// Custom endpoint URL (for MinIO or LocalStack)
	pub endpoint: Option<String>,
	/// Key prefix namespacing this shop's objects inside the bucket
	pub key_prefix: String,
	/// Base URL for persisted references; derived from bucket/region if unset
	pub public_base_url: Option<String>,
	/// Deadline for a single remote call
	pub upload_timeout_secs: u64,
}

/// Image store configuration, selected once at startup.
#[derive(Debug, Clone)]
pub enum ImageStoreConfig {
	Local(LocalConfig),
	S3(S3Config),
}

impl ImageStoreConfig {
	/// Load configuration from environment variables.
	///
	/// # Environment Variables
	///
	/// - `IMAGE_BACKEND`: `"local"` or `"s3"`
	///
	/// ## Local backend
	/// - `IMAGE_DIR`: base directory (required)
	/// - `IMAGE_PUBLIC_PREFIX`: reference prefix (optional, default `uploads`)
	///
	/// ## S3 backend
	/// - `IMAGE_S3_BUCKET`: bucket name (required)
	/// - `IMAGE_S3_REGION`: region (optional)
	/// - `IMAGE_S3_ENDPOINT`: custom endpoint URL (optional)
	/// - `IMAGE_S3_KEY_PREFIX`: key namespace (optional, default `artworks`)
	/// - `IMAGE_S3_PUBLIC_BASE_URL`: base URL for references (optional)
	/// - `IMAGE_UPLOAD_TIMEOUT_SECS`: remote call deadline (optional, default 30)
	pub fn from_env() -> Result<Self> {
		let backend = env::var("IMAGE_BACKEND").map_err(|_| {
			StorageError::Config("IMAGE_BACKEND environment variable not set".to_string())
		})?;

		match backend.parse::<BackendType>()? {
			BackendType::Local => {
				let base_dir = env::var("IMAGE_DIR").map_err(|_| {
					StorageError::Config("IMAGE_DIR environment variable not set".to_string())
				})?;
				let public_prefix = env::var("IMAGE_PUBLIC_PREFIX")
					.unwrap_or_else(|_| DEFAULT_PUBLIC_PREFIX.to_string());

				Ok(ImageStoreConfig::Local(LocalConfig {
					base_dir,
					public_prefix,
				}))
			}
			BackendType::S3 => {
				let bucket = env::var("IMAGE_S3_BUCKET").map_err(|_| {
					StorageError::Config("IMAGE_S3_BUCKET environment variable not set".to_string())
				})?;
				let region = env::var("IMAGE_S3_REGION").ok();
				let endpoint = env::var("IMAGE_S3_ENDPOINT").ok();
				let key_prefix = env::var("IMAGE_S3_KEY_PREFIX")
					.unwrap_or_else(|_| DEFAULT_KEY_PREFIX.to_string());
				let public_base_url = env::var("IMAGE_S3_PUBLIC_BASE_URL").ok();
				let upload_timeout_secs = match env::var("IMAGE_UPLOAD_TIMEOUT_SECS") {
					Ok(raw) => raw.parse::<u64>().map_err(|_| {
						StorageError::Config(format!(
							"Invalid IMAGE_UPLOAD_TIMEOUT_SECS: {}",
							raw
						))
					})?,
					Err(_) => DEFAULT_UPLOAD_TIMEOUT_SECS,
				};

				Ok(ImageStoreConfig::S3(S3Config {
					bucket,
					region,
					endpoint,
					key_prefix,
					public_base_url,
					upload_timeout_secs,
				}))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use serial_test::serial;

	use super::*;

	fn clear_all() {
		for name in [
			"IMAGE_BACKEND",
			"IMAGE_DIR",
			"IMAGE_PUBLIC_PREFIX",
			"IMAGE_S3_BUCKET",
			"IMAGE_S3_REGION",
			"IMAGE_S3_ENDPOINT",
			"IMAGE_S3_KEY_PREFIX",
			"IMAGE_S3_PUBLIC_BASE_URL",
			"IMAGE_UPLOAD_TIMEOUT_SECS",
		] {
			unsafe { env::remove_var(name) };
		}
	}

	#[test]
	fn backend_type_parses_case_insensitively() {
		assert_eq!("local".parse::<BackendType>().unwrap(), BackendType::Local);
		assert_eq!("S3".parse::<BackendType>().unwrap(), BackendType::S3);
		assert!("gcs".parse::<BackendType>().is_err());
	}

	#[test]
	#[serial]
	fn local_config_from_env_with_defaults() {
		clear_all();
		unsafe {
			env::set_var("IMAGE_BACKEND", "local");
			env::set_var("IMAGE_DIR", "/srv/shop/uploads");
		}

		match ImageStoreConfig::from_env().unwrap() {
			ImageStoreConfig::Local(config) => {
				assert_eq!(config.base_dir, "/srv/shop/uploads");
				assert_eq!(config.public_prefix, "uploads");
			}
			other => panic!("expected local config, got {:?}", other),
		}
		clear_all();
	}

	#[test]
	#[serial]
	fn s3_config_from_env() {
		clear_all();
		unsafe {
			env::set_var("IMAGE_BACKEND", "s3");
			env::set_var("IMAGE_S3_BUCKET", "shop-media");
			env::set_var("IMAGE_S3_REGION", "eu-central-1");
			env::set_var("IMAGE_UPLOAD_TIMEOUT_SECS", "10");
		}

		match ImageStoreConfig::from_env().unwrap() {
			ImageStoreConfig::S3(config) => {
				assert_eq!(config.bucket, "shop-media");
				assert_eq!(config.region.as_deref(), Some("eu-central-1"));
				assert_eq!(config.key_prefix, "artworks");
				assert_eq!(config.upload_timeout_secs, 10);
			}
			other => panic!("expected s3 config, got {:?}", other),
		}
		clear_all();
	}

	#[test]
	#[serial]
	fn missing_backend_variable_errors() {
		clear_all();
		let err = ImageStoreConfig::from_env().unwrap_err();
		assert!(matches!(err, StorageError::Config(_)));
	}
}

//! S3 backend.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use tokio::time::timeout;

use crate::config::S3Config;
use crate::naming::generate_name;
use crate::store::{ImageStore, ImageUpload};
use crate::{Result, StorageError};

const DEFAULT_REGION: &str = "us-east-1";

/// Stores images in an S3 bucket under a namespaced key and persists the
/// public object URL as the reference.
///
/// Every remote call runs under the configured deadline; a deadline miss is
/// reported as a retryable timeout rather than stalling the request.
#[derive(Debug, Clone)]
pub struct S3ImageStore {
	client: aws_sdk_s3::Client,
	bucket: String,
	key_prefix: String,
	public_base_url: String,
	deadline: Duration,
	timeout_secs: u64,
}

impl S3ImageStore {
	/// Create the backend from configuration, resolving AWS credentials from
	/// the environment.
	pub async fn new(config: S3Config) -> Result<Self> {
		let region = config
			.region
			.clone()
			.unwrap_or_else(|| DEFAULT_REGION.to_string());

		let shared = aws_config::defaults(aws_config::BehaviorVersion::latest())
			.region(aws_config::Region::new(region.clone()))
			.load()
			.await;

		let mut builder = aws_sdk_s3::config::Builder::from(&shared);
		if let Some(endpoint) = &config.endpoint {
			builder = builder.endpoint_url(endpoint).force_path_style(true);
		}
		let client = aws_sdk_s3::Client::from_conf(builder.build());

		let public_base_url = public_base_url(&config, &region);

		Ok(Self {
			client,
			bucket: config.bucket,
			key_prefix: config.key_prefix.trim_matches('/').to_string(),
			public_base_url,
			deadline: Duration::from_secs(config.upload_timeout_secs),
			timeout_secs: config.upload_timeout_secs,
		})
	}

	fn key_of_name(&self, name: &str) -> String {
		if self.key_prefix.is_empty() {
			name.to_string()
		} else {
			format!("{}/{}", self.key_prefix, name)
		}
	}

	/// Recover the object key from a persisted reference.
	///
	/// References minted here are `<public base>/<key>`; anything else is
	/// treated as a bare key so deletes stay best-effort after a
	/// configuration change.
	fn key_of_reference<'a>(&self, reference: &'a str) -> &'a str {
		reference
			.strip_prefix(&self.public_base_url)
			.map(|rest| rest.trim_start_matches('/'))
			.unwrap_or(reference)
	}

	fn reference_of(&self, key: &str) -> String {
		format!("{}/{}", self.public_base_url, key)
	}
}

fn public_base_url(config: &S3Config, region: &str) -> String {
	if let Some(base) = &config.public_base_url {
		return base.trim_end_matches('/').to_string();
	}
	if let Some(endpoint) = &config.endpoint {
		return format!("{}/{}", endpoint.trim_end_matches('/'), config.bucket);
	}
	format!("https://{}.s3.{}.amazonaws.com", config.bucket, region)
}

#[async_trait]
impl ImageStore for S3ImageStore {
	async fn put(&self, upload: &ImageUpload) -> Result<String> {
		let key = self.key_of_name(&generate_name(&upload.original_name));

		let mut request = self
			.client
			.put_object()
			.bucket(&self.bucket)
			.key(&key)
			.body(ByteStream::from(upload.bytes.clone()));
		if let Some(content_type) = &upload.content_type {
			request = request.content_type(content_type);
		}

		timeout(self.deadline, request.send())
			.await
			.map_err(|_| StorageError::Timeout(self.timeout_secs))?
			.map_err(|e| StorageError::Remote(e.to_string()))?;

		Ok(self.reference_of(&key))
	}

	async fn delete(&self, reference: &str) -> Result<()> {
		let key = self.key_of_reference(reference);

		timeout(
			self.deadline,
			self.client
				.delete_object()
				.bucket(&self.bucket)
				.key(key)
				.send(),
		)
		.await
		.map_err(|_| StorageError::Timeout(self.timeout_secs))?
		.map_err(|e| StorageError::Remote(e.to_string()))?;

		Ok(())
	}

	async fn exists(&self, reference: &str) -> Result<bool> {
		let key = self.key_of_reference(reference);

		let result = timeout(
			self.deadline,
			self.client
				.head_object()
				.bucket(&self.bucket)
				.key(key)
				.send(),
		)
		.await
		.map_err(|_| StorageError::Timeout(self.timeout_secs))?;

		match result {
			Ok(_) => Ok(true),
			Err(err) => {
				if err
					.as_service_error()
					.map(|e| e.is_not_found())
					.unwrap_or(false)
				{
					Ok(false)
				} else {
					Err(StorageError::Remote(err.to_string()))
				}
			}
		}
	}
}

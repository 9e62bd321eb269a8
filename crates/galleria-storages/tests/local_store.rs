//! Integration tests for the local image backend.

use std::sync::Arc;

use galleria_storages::config::{ImageStoreConfig, LocalConfig};
use galleria_storages::{ImageStore, ImageUpload, StorageError, create_image_store};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct LocalFixture {
	// Held so the directory outlives the store.
	_dir: TempDir,
	store: Arc<dyn ImageStore>,
}

#[fixture]
fn local_store() -> LocalFixture {
	let dir = TempDir::new().expect("temp dir");
	let config = LocalConfig {
		base_dir: dir.path().to_string_lossy().into_owned(),
		public_prefix: "uploads".to_string(),
	};
	let store: Arc<dyn ImageStore> =
		Arc::new(galleria_storages::backends::LocalImageStore::new(config).expect("local store"));
	LocalFixture { _dir: dir, store }
}

fn jpeg_upload() -> ImageUpload {
	ImageUpload::new(vec![0xFF, 0xD8, 0xFF, 0xE0], "sunset.jpg").with_content_type("image/jpeg")
}

#[rstest]
#[tokio::test]
async fn put_returns_a_prefixed_reference(local_store: LocalFixture) {
	let reference = local_store
		.store
		.put(&jpeg_upload())
		.await
		.expect("Failed to store image");

	assert!(reference.starts_with("uploads/"), "got {reference}");
	assert!(reference.ends_with(".jpg"));
	assert!(local_store.store.exists(&reference).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn reference_is_immediately_retrievable(local_store: LocalFixture) {
	let reference = local_store.store.put(&jpeg_upload()).await.unwrap();

	// No async finalization: the file is on disk the moment put returns.
	assert!(local_store.store.exists(&reference).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn two_puts_of_the_same_name_do_not_collide(local_store: LocalFixture) {
	let first = local_store.store.put(&jpeg_upload()).await.unwrap();
	let second = local_store.store.put(&jpeg_upload()).await.unwrap();

	assert_ne!(first, second);
	assert!(local_store.store.exists(&first).await.unwrap());
	assert!(local_store.store.exists(&second).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn delete_removes_the_stored_file(local_store: LocalFixture) {
	let reference = local_store.store.put(&jpeg_upload()).await.unwrap();

	local_store
		.store
		.delete(&reference)
		.await
		.expect("Failed to delete image");

	assert!(!local_store.store.exists(&reference).await.unwrap());
}

#[rstest]
#[tokio::test]
async fn delete_of_unknown_reference_reports_not_found(local_store: LocalFixture) {
	let result = local_store.store.delete("uploads/never-stored.png").await;
	assert!(matches!(result, Err(StorageError::NotFound(_))));
}

#[rstest]
#[tokio::test]
async fn extensionless_uploads_are_accepted(local_store: LocalFixture) {
	let upload = ImageUpload::new(vec![1, 2, 3], "portrait");
	let reference = local_store.store.put(&upload).await.unwrap();

	assert!(local_store.store.exists(&reference).await.unwrap());
}

#[tokio::test]
async fn factory_builds_the_local_backend() {
	let dir = TempDir::new().unwrap();
	let config = ImageStoreConfig::Local(LocalConfig {
		base_dir: dir.path().to_string_lossy().into_owned(),
		public_prefix: "uploads".to_string(),
	});

	let store = create_image_store(config).await.expect("factory");
	let reference = store.put(&jpeg_upload()).await.unwrap();
	assert!(store.exists(&reference).await.unwrap());
}

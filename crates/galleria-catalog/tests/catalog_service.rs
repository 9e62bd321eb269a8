//! Integration tests for the catalog service.

mod helpers;

use galleria_catalog::{ArtworkForm, CatalogError};
use helpers::{TestShop, jpeg_upload, sunset_form};
use rust_decimal::Decimal;

#[tokio::test]
async fn create_rejects_bad_fields_before_any_write() {
	let shop = TestShop::new().await;

	let form = ArtworkForm {
		title: String::new(),
		description: String::new(),
		price: "not-a-number".to_string(),
	};
	let err = shop.catalog.create_artwork(&form, None).await.unwrap_err();

	match err {
		CatalogError::Validation(errors) => {
			assert!(errors.has("title"));
			assert!(errors.has("price"));
			assert!(errors.has("image"));
		}
		other => panic!("expected validation errors, got {other:?}"),
	}

	assert!(shop.catalog.list_artworks().await.unwrap().is_empty());
	assert_eq!(shop.stored_image_count(), 0);
}

#[tokio::test]
async fn create_requires_an_image_even_when_fields_are_valid() {
	let shop = TestShop::new().await;

	let err = shop
		.catalog
		.create_artwork(&sunset_form(), None)
		.await
		.unwrap_err();

	match err {
		CatalogError::Validation(errors) => {
			assert_eq!(errors.len(), 1);
			assert!(errors.has("image"));
		}
		other => panic!("expected validation errors, got {other:?}"),
	}
}

#[tokio::test]
async fn create_stores_the_image_and_the_row() {
	let shop = TestShop::new().await;

	let artwork = shop
		.catalog
		.create_artwork(&sunset_form(), Some(&jpeg_upload()))
		.await
		.expect("create should succeed");

	assert_eq!(artwork.title, "Sunset");
	assert_eq!(artwork.price, Decimal::from(100));
	assert!(artwork.image_reference.starts_with("uploads/"));
	assert_eq!(shop.stored_image_count(), 1);
}

#[tokio::test]
async fn update_replaces_the_image_and_drops_the_old_one() {
	let shop = TestShop::new().await;
	let artwork = shop
		.catalog
		.create_artwork(&sunset_form(), Some(&jpeg_upload()))
		.await
		.unwrap();

	let mut form = sunset_form();
	form.price = "250".to_string();
	let updated = shop
		.catalog
		.update_artwork(artwork.id, &form, Some(&jpeg_upload()))
		.await
		.expect("update should succeed");

	assert_eq!(updated.price, Decimal::from(250));
	assert_ne!(updated.image_reference, artwork.image_reference);
	// The replaced file is gone; only the new one remains.
	assert_eq!(shop.stored_image_count(), 1);
}

#[tokio::test]
async fn update_without_a_new_image_keeps_the_reference() {
	let shop = TestShop::new().await;
	let artwork = shop
		.catalog
		.create_artwork(&sunset_form(), Some(&jpeg_upload()))
		.await
		.unwrap();

	let mut form = sunset_form();
	form.title = "Sunset (framed)".to_string();
	let updated = shop
		.catalog
		.update_artwork(artwork.id, &form, None)
		.await
		.unwrap();

	assert_eq!(updated.title, "Sunset (framed)");
	assert_eq!(updated.image_reference, artwork.image_reference);
	assert_eq!(shop.stored_image_count(), 1);
}

#[tokio::test]
async fn update_of_unknown_artwork_is_not_found() {
	let shop = TestShop::new().await;

	let err = shop
		.catalog
		.update_artwork(999, &sunset_form(), None)
		.await
		.unwrap_err();
	assert!(matches!(err, CatalogError::NotFound(999)));
}

#[tokio::test]
async fn delete_removes_the_row_and_the_image() {
	let shop = TestShop::new().await;
	let artwork = shop
		.catalog
		.create_artwork(&sunset_form(), Some(&jpeg_upload()))
		.await
		.unwrap();

	shop.catalog.delete_artwork(artwork.id).await.unwrap();

	assert!(matches!(
		shop.catalog.get_artwork(artwork.id).await.unwrap_err(),
		CatalogError::NotFound(_)
	));
	assert_eq!(shop.stored_image_count(), 0);
}

#[tokio::test]
async fn failed_insert_cleans_up_the_stored_image() {
	let shop = TestShop::new().await;

	// Force the insert to fail after the image write.
	sqlx::query("DROP TABLE artworks")
		.execute(&shop.pool)
		.await
		.unwrap();

	let err = shop
		.catalog
		.create_artwork(&sunset_form(), Some(&jpeg_upload()))
		.await
		.unwrap_err();

	assert!(matches!(err, CatalogError::Database(_)));
	assert_eq!(shop.stored_image_count(), 0);
}

#[tokio::test]
async fn listing_is_newest_first() {
	let shop = TestShop::new().await;

	let mut form = sunset_form();
	form.title = "First".to_string();
	shop.catalog
		.create_artwork(&form, Some(&jpeg_upload()))
		.await
		.unwrap();
	form.title = "Second".to_string();
	shop.catalog
		.create_artwork(&form, Some(&jpeg_upload()))
		.await
		.unwrap();

	let titles: Vec<String> = shop
		.catalog
		.list_artworks()
		.await
		.unwrap()
		.into_iter()
		.map(|a| a.title)
		.collect();
	assert_eq!(titles, vec!["Second".to_string(), "First".to_string()]);
}

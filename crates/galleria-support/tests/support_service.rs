//! Integration tests for the support inbox.

use galleria_auth::Session;
use galleria_support::{SupportError, SupportForm, SupportService};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn support_service() -> (TempDir, SupportService) {
	let dir = TempDir::new().expect("temp dir");
	let url = format!("sqlite://{}", dir.path().join("test.db").display());
	let pool: SqlitePool = galleria_db::connect(&url).await.expect("connect");
	galleria_db::create_tables(&pool).await.expect("schema");
	(dir, SupportService::new(pool))
}

fn ticket() -> SupportForm {
	SupportForm {
		name: "Jane Doe".to_string(),
		email: "jane@example.com".to_string(),
		subject: "Where is my order?".to_string(),
		message: "It has been a week since I ordered.".to_string(),
	}
}

#[tokio::test]
async fn anonymous_submission_uses_the_form_contact_details() {
	let (_dir, support) = support_service().await;

	let message = support.submit_message(None, &ticket()).await.unwrap();

	assert_eq!(message.user_id, None);
	assert_eq!(message.user_name, "Jane Doe");
	assert_eq!(message.user_email, "jane@example.com");
	assert_eq!(message.status, "pending");
}

#[tokio::test]
async fn logged_in_submission_copies_the_session_identity() {
	let (_dir, support) = support_service().await;

	let session = Session {
		id: 7,
		email: "ana@example.com".to_string(),
		name: Some("Ana".to_string()),
	};

	let form = SupportForm {
		// Form contact fields are ignored when a session is present.
		name: String::new(),
		email: String::new(),
		subject: "Framing question".to_string(),
		message: "Can the harbour piece be framed in oak?".to_string(),
	};
	let message = support.submit_message(Some(&session), &form).await.unwrap();

	assert_eq!(message.user_id, Some(7));
	assert_eq!(message.user_name, "Ana");
	assert_eq!(message.user_email, "ana@example.com");
}

#[tokio::test]
async fn session_without_a_name_falls_back_to_the_email() {
	let (_dir, support) = support_service().await;

	let session = Session {
		id: 7,
		email: "ana@example.com".to_string(),
		name: None,
	};

	let mut form = ticket();
	form.name = String::new();
	form.email = String::new();
	let message = support.submit_message(Some(&session), &form).await.unwrap();

	assert_eq!(message.user_name, "ana@example.com");
}

#[tokio::test]
async fn blank_subject_or_message_is_rejected() {
	let (_dir, support) = support_service().await;

	let mut form = ticket();
	form.subject = "   ".to_string();
	form.message = String::new();

	let err = support.submit_message(None, &form).await.unwrap_err();
	match err {
		SupportError::Validation(errors) => {
			assert!(errors.has("subject"));
			assert!(errors.has("message"));
		}
		other => panic!("expected validation errors, got {other:?}"),
	}

	assert!(support.list_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn anonymous_submission_requires_contact_details() {
	let (_dir, support) = support_service().await;

	let mut form = ticket();
	form.name = String::new();
	form.email = "  ".to_string();

	let err = support.submit_message(None, &form).await.unwrap_err();
	match err {
		SupportError::Validation(errors) => {
			assert!(errors.has("name"));
			assert!(errors.has("email"));
		}
		other => panic!("expected validation errors, got {other:?}"),
	}
}

#[tokio::test]
async fn inbox_lists_newest_first() {
	let (_dir, support) = support_service().await;

	let mut form = ticket();
	form.subject = "First".to_string();
	support.submit_message(None, &form).await.unwrap();
	form.subject = "Second".to_string();
	support.submit_message(None, &form).await.unwrap();

	let subjects: Vec<String> = support
		.list_messages()
		.await
		.unwrap()
		.into_iter()
		.map(|m| m.subject)
		.collect();
	assert_eq!(subjects, vec!["Second".to_string(), "First".to_string()]);
}

//! The authenticated session value.

use galleria_db::User;
use serde::{Deserialize, Serialize};

/// What the presentation layer carries between requests for a logged-in
/// shopper. Cookie plumbing is the collaborator's problem; this is just the
/// serializable payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
	pub id: i64,
	pub email: String,
	pub name: Option<String>,
}

impl Session {
	pub fn for_user(user: &User) -> Self {
		Self {
			id: user.id,
			email: user.email.clone(),
			name: user.name.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use chrono::Utc;

	use super::*;

	#[test]
	fn session_round_trips_through_json() {
		let user = User {
			id: 3,
			email: "ana@example.com".to_string(),
			password_hash: "$argon2id$...".to_string(),
			name: Some("Ana".to_string()),
			created_at: Utc::now(),
		};

		let session = Session::for_user(&user);
		let json = serde_json::to_string(&session).unwrap();
		let back: Session = serde_json::from_str(&json).unwrap();

		assert_eq!(back, session);
		assert!(!json.contains("password"));
	}
}

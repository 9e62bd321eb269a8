//! Stored-object naming.
//!
//! Uploads never keep their submitted file name. Each stored object gets a
//! name derived from the current time plus a random suffix, keeping the
//! original extension so served files retain a usable media type.

use chrono::Utc;
use uuid::Uuid;

/// Generate a fresh storage name for an upload.
pub fn generate_name(original_name: &str) -> String {
	let suffix = Uuid::new_v4().simple().to_string();
	compose_name(
		Utc::now().timestamp_millis(),
		&suffix[..8],
		extension(original_name),
	)
}

pub(crate) fn compose_name(millis: i64, suffix: &str, extension: Option<&str>) -> String {
	match extension {
		Some(ext) => format!("{millis}-{suffix}.{ext}"),
		None => format!("{millis}-{suffix}"),
	}
}

/// The lowercased extension of a submitted file name, if it has one.
pub(crate) fn extension(name: &str) -> Option<&str> {
	let (stem, ext) = name.rsplit_once('.')?;
	if stem.is_empty() || ext.is_empty() || ext.contains('/') {
		return None;
	}
	Some(ext)
}

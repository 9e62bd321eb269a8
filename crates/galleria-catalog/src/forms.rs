//! Artwork form validation.

use galleria_core::validate::{MinTrimmedLength, ValidationErrors, parse_positive_amount};
use rust_decimal::Decimal;

/// The admin's artwork form, as string-typed fields straight from the
/// presentation layer. An empty string is a missing field.
#[derive(Debug, Clone, Default)]
pub struct ArtworkForm {
	pub title: String,
	pub description: String,
	pub price: String,
}

/// A form that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedArtwork {
	pub title: String,
	pub description: Option<String>,
	pub price: Decimal,
}

impl ArtworkForm {
	/// Validate every field, collecting all failures.
	pub fn validate(&self) -> Result<ValidatedArtwork, ValidationErrors> {
		let mut errors = ValidationErrors::new();

		errors.check("title", self.title.as_str(), &MinTrimmedLength::new(1));

		let price = match parse_positive_amount(&self.price) {
			Ok(price) => Some(price),
			Err(message) => {
				errors.add("price", message);
				None
			}
		};

		let description = {
			let trimmed = self.description.trim();
			if trimmed.is_empty() {
				None
			} else {
				Some(trimmed.to_string())
			}
		};

		match price {
			Some(price) if errors.is_empty() => Ok(ValidatedArtwork {
				title: self.title.trim().to_string(),
				description,
				price,
			}),
			_ => Err(errors),
		}
	}
}

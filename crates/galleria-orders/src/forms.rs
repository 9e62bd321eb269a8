//! Checkout form validation.

use galleria_core::validate::{MinTrimmedLength, ValidationErrors};
use galleria_db::PaymentMethod;

/// The buyer's checkout form, as string-typed fields straight from the
/// presentation layer. An empty string is a missing field.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
	pub buyer_name: String,
	pub buyer_email: String,
	pub phone: String,
	pub address_line1: String,
	pub address_line2: String,
	pub postal_code: String,
	pub payment_method: String,
	pub quantity: String,
}

/// A checkout that passed validation, with the address already composited.
#[derive(Debug, Clone)]
pub struct ValidatedCheckout {
	pub buyer_name: String,
	pub buyer_email: Option<String>,
	pub phone: String,
	pub address: String,
	pub payment_method: PaymentMethod,
	pub quantity: i64,
}

/// A checkout that failed validation.
///
/// Carries the quantity the buyer effectively asked for, so the caller can
/// still compute the total to show on the re-rendered form.
#[derive(Debug, Clone)]
pub struct RejectedCheckout {
	pub errors: ValidationErrors,
	pub quantity: i64,
}

impl CheckoutForm {
	/// Validate every field independently and report all failures at once.
	///
	/// Quantity is forgiving about shape but strict about range: a missing
	/// or unparseable value silently becomes 1, while an explicit integer
	/// outside 1–5 is a field error.
	pub fn validate(&self) -> Result<ValidatedCheckout, RejectedCheckout> {
		let mut errors = ValidationErrors::new();

		errors.check("buyer_name", self.buyer_name.as_str(), &MinTrimmedLength::new(2));
		errors.check("phone", self.phone.as_str(), &MinTrimmedLength::new(10));
		errors.check(
			"address_line1",
			self.address_line1.as_str(),
			&MinTrimmedLength::new(5),
		);
		errors.check(
			"postal_code",
			self.postal_code.as_str(),
			&MinTrimmedLength::new(6),
		);

		let payment_method = match self.payment_method.trim().parse::<PaymentMethod>() {
			Ok(method) => Some(method),
			Err(_) => {
				errors.add("payment_method", "must be cod or online");
				None
			}
		};

		let quantity = match parse_quantity(&self.quantity) {
			Ok(quantity) => quantity,
			Err((quantity, message)) => {
				errors.add("quantity", message);
				quantity
			}
		};

		let buyer_email = {
			let trimmed = self.buyer_email.trim();
			if trimmed.is_empty() {
				None
			} else {
				Some(trimmed.to_string())
			}
		};

		match (payment_method, errors.is_empty()) {
			(Some(payment_method), true) => Ok(ValidatedCheckout {
				buyer_name: self.buyer_name.trim().to_string(),
				buyer_email,
				phone: self.phone.trim().to_string(),
				address: compose_address(
					self.address_line1.trim(),
					self.address_line2.trim(),
					self.postal_code.trim(),
				),
				payment_method,
				quantity,
			}),
			_ => Err(RejectedCheckout { errors, quantity }),
		}
	}
}

/// The quantity the buyer asked for.
///
/// `Err` carries the out-of-range value alongside the message so rejected
/// forms can still show the total for what was submitted.
fn parse_quantity(raw: &str) -> Result<i64, (i64, String)> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Ok(1);
	}
	match trimmed.parse::<i64>() {
		Ok(quantity) if (1..=5).contains(&quantity) => Ok(quantity),
		Ok(quantity) => Err((quantity, "must be between 1 and 5".to_string())),
		// Garbage is treated like a missing field, not an error.
		Err(_) => Ok(1),
	}
}

fn compose_address(line1: &str, line2: &str, postal_code: &str) -> String {
	if line2.is_empty() {
		format!("{line1}, Pin: {postal_code}")
	} else {
		format!("{line1}, {line2}, Pin: {postal_code}")
	}
}

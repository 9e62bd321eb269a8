//! Field validation.
//!
//! Form handlers validate every field and report all failures at once, so the
//! buyer sees the whole list instead of fixing one field per round trip.
//! [`ValidationErrors`] is the collector; the [`Validator`] implementations
//! cover the length/amount checks the storefront forms share.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: String,
	pub message: String,
}

/// All validation failures for one submitted form.
///
/// ```
/// use galleria_core::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("phone", "must be at least 10 characters");
/// assert!(!errors.is_empty());
/// assert_eq!(errors.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
		self.0.push(FieldError {
			field: field.into(),
			message: message.into(),
		});
	}

	/// Runs `validator` against `value`, recording a failure under `field`.
	pub fn check<T: ?Sized>(&mut self, field: &str, value: &T, validator: &dyn Validator<T>) {
		if let Err(message) = validator.validate(value) {
			self.add(field, message);
		}
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
		self.0.iter()
	}

	/// True if any recorded failure is scoped to `field`.
	pub fn has(&self, field: &str) -> bool {
		self.0.iter().any(|e| e.field == field)
	}

	/// `Ok(value)` when nothing failed, `Err(self)` otherwise.
	pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
		if self.is_empty() { Ok(value) } else { Err(self) }
	}
}

impl fmt::Display for ValidationErrors {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for e in &self.0 {
			if !first {
				write!(f, "; ")?;
			}
			write!(f, "{}: {}", e.field, e.message)?;
			first = false;
		}
		Ok(())
	}
}

impl std::error::Error for ValidationErrors {}

/// A reusable check over one field value.
pub trait Validator<T: ?Sized> {
	/// `Err` carries the user-facing message for the failing field.
	fn validate(&self, value: &T) -> Result<(), String>;
}

/// Requires at least `min` characters after trimming surrounding whitespace.
///
/// Lengths are counted in characters, not bytes, so multibyte input is not
/// penalized.
pub struct MinTrimmedLength {
	min: usize,
}

impl MinTrimmedLength {
	pub fn new(min: usize) -> Self {
		Self { min }
	}
}

impl Validator<str> for MinTrimmedLength {
	fn validate(&self, value: &str) -> Result<(), String> {
		let len = value.trim().chars().count();
		if len >= self.min {
			Ok(())
		} else if self.min == 1 {
			Err("is required".to_string())
		} else {
			Err(format!("must be at least {} characters", self.min))
		}
	}
}

/// Rejects values longer than `max` characters after trimming.
pub struct MaxTrimmedLength {
	max: usize,
}

impl MaxTrimmedLength {
	pub fn new(max: usize) -> Self {
		Self { max }
	}
}

impl Validator<str> for MaxTrimmedLength {
	fn validate(&self, value: &str) -> Result<(), String> {
		let len = value.trim().chars().count();
		if len <= self.max {
			Ok(())
		} else {
			Err(format!("must be at most {} characters", self.max))
		}
	}
}

/// Parses a submitted amount as a strictly positive decimal.
///
/// Forms deliver prices as strings; anything that is missing, non-numeric or
/// not positive is rejected before any write happens.
pub fn parse_positive_amount(raw: &str) -> Result<Decimal, String> {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return Err("is required".to_string());
	}
	match Decimal::from_str(trimmed) {
		Ok(amount) if amount > Decimal::ZERO => Ok(amount),
		Ok(_) => Err("must be a positive amount".to_string()),
		Err(_) => Err("must be a number".to_string()),
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use bigdecimal::{BigDecimal as BigDecimalInner, RoundingMode};
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

mod parse;

pub use parse::parse_decimal;

/// An arbitrary-precision decimal number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Decimal(BigDecimalInner);

impl Decimal {
	pub fn new(inner: BigDecimalInner) -> Self {
		Self(inner)
	}

	pub fn zero() -> Self {
		Self(BigDecimalInner::zero())
	}

	pub fn inner(&self) -> &BigDecimalInner {
		&self.0
	}

	pub fn into_inner(self) -> BigDecimalInner {
		self.0
	}

	/// The decimal with the fewest digits that reads back as `value`, so
	/// `0.1` becomes `0.1` rather than its exact binary expansion.
	pub fn from_f64(value: f64) -> Option<Self> {
		if !value.is_finite() {
			return None;
		}
		parse_decimal(&value.to_string()).ok()
	}

	pub fn from_f32(value: f32) -> Option<Self> {
		if !value.is_finite() {
			return None;
		}
		parse_decimal(&value.to_string()).ok()
	}

	pub fn to_f64(&self) -> Option<f64> {
		self.0.to_f64()
	}

	/// Rounds to the nearest integer, ties to even, and returns it if it fits
	/// into an `i128`.
	pub fn round_to_i128(&self) -> Option<i128> {
		if self.0.is_zero() {
			return Some(0);
		}
		// i128::MAX has 39 digits; rounding would otherwise expand huge
		// exponents in full before the range check
		let integer_digits = self.0.digits() as i64 - self.0.fractional_digit_count();
		if integer_digits > 39 {
			return None;
		}
		// below 0.1 in magnitude
		if integer_digits < 0 {
			return Some(0);
		}
		self.0.with_scale_round(0, RoundingMode::HalfEven).to_i128()
	}
}

impl Default for Decimal {
	fn default() -> Self {
		Self::zero()
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl From<BigDecimalInner> for Decimal {
	fn from(inner: BigDecimalInner) -> Self {
		Self(inner)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Self(BigDecimalInner::from(value))
	}
}

impl From<u64> for Decimal {
	fn from(value: u64) -> Self {
		Self(BigDecimalInner::from(value))
	}
}

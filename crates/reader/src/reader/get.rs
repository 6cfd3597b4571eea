// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{FromValue, Result, RowError, return_error};
use tracing::instrument;

use super::RowReader;
use crate::{Field, Row};

impl<R: Row> RowReader<R> {
	/// Reads the field through the row's typed getter. Absent values and
	/// values of another runtime type fail with whatever the row raises.
	#[instrument(name = "reader::get", level = "trace", skip(self))]
	pub fn get<T: FromValue>(&self, field: impl Field) -> Result<T> {
		let position = field.resolve(&self.row)?;
		let expected = T::get_type();
		let value = self.row.get_typed(position, expected)?;
		let actual = value.get_type();

		match T::from_value(value) {
			Some(result) => Ok(result),
			None => return_error!(RowError::TypeMismatch {
				position,
				name: self.row.field_name(position)?.to_string(),
				expected,
				actual,
			}),
		}
	}

	/// Returns `default` when the field is absent, otherwise reads it like
	/// [`RowReader::get`]. The typed getter is never invoked on an absent
	/// field.
	#[instrument(name = "reader::get_or", level = "trace", skip(self, default))]
	pub fn get_or<T: FromValue>(&self, field: impl Field, default: Option<T>) -> Result<Option<T>> {
		let position = field.resolve(&self.row)?;
		if self.row.is_undefined(position)? {
			return Ok(default);
		}
		self.get(position).map(Some)
	}

	pub fn get_opt<T: FromValue>(&self, field: impl Field) -> Result<Option<T>> {
		self.get_or(field, None)
	}

	/// Reads the raw value and returns it only when it is defined and its
	/// runtime type is exactly `T`. Never fails.
	#[instrument(name = "reader::try_get", level = "trace", skip(self))]
	pub fn try_get<T: FromValue>(&self, field: impl Field) -> Option<T> {
		let position = field.resolve(&self.row).ok()?;
		let value = self.row.value(position).ok()?;
		if value.is_undefined() {
			return None;
		}
		T::from_value(value)
	}
}

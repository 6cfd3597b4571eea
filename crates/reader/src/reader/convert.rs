// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{Convert, Enumeration, FormatContext, IntoDiagnostic, Result, Value, convert_value, error};
use tracing::instrument;

use super::RowReader;
use crate::{Field, Row};

impl<R: Row> RowReader<R> {
	/// Reads the raw value and converts it to `T` using the reader's
	/// [`FormatContext`].
	///
	/// An absent value becomes `None` for `Option<_>` targets and
	/// `Value::Undefined` for `Value`; every other target fails with
	/// `CONVERT_003`.
	pub fn convert<T: Convert>(&self, field: impl Field) -> Result<T> {
		self.convert_with(field, &self.format)
	}

	#[instrument(name = "reader::convert", level = "trace", skip(self, ctx))]
	pub fn convert_with<T: Convert>(&self, field: impl Field, ctx: &FormatContext) -> Result<T> {
		let position = field.resolve(&self.row)?;
		let value = self.row.value(position)?;

		match convert_value(value, ctx) {
			Ok(result) => Ok(result),
			Err(err) => {
				let name = self.row.field_name(position)?;
				Err(error!(err.into_diagnostic().with_column(name)))
			}
		}
	}

	/// Maps the field onto a member of `E`: text by member name, anything
	/// else by discriminant.
	pub fn enumeration<E: Enumeration>(&self, field: impl Field) -> Result<E> {
		self.enumeration_with(field, |value| Ok(E::map_value(value, &self.format)?))
	}

	/// Maps the raw value of the field with a caller supplied function.
	#[instrument(name = "reader::enumeration", level = "trace", skip(self, map))]
	pub fn enumeration_with<E, M>(&self, field: impl Field, map: M) -> Result<E>
	where
		M: FnOnce(Value) -> Result<E>,
	{
		let position = field.resolve(&self.row)?;
		let value = self.row.value(position)?;

		match map(value) {
			Ok(result) => Ok(result),
			Err(mut err) => {
				if err.column.is_none() {
					err.column = Some(self.row.field_name(position)?.to_string());
				}
				Err(err)
			}
		}
	}
}

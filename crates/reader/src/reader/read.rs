// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{Result, Value};
use tracing::instrument;

use super::RowReader;
use crate::{Field, Row};

impl<R: Row> RowReader<R> {
	#[instrument(name = "reader::read_bytes", level = "trace", skip(self, buffer))]
	pub fn read_bytes(
		&self,
		field: impl Field,
		source_offset: usize,
		buffer: &mut [u8],
		buffer_offset: usize,
		length: usize,
	) -> Result<usize> {
		let position = field.resolve(&self.row)?;
		self.row.read_bytes(position, source_offset, buffer, buffer_offset, length)
	}

	#[instrument(name = "reader::read_chars", level = "trace", skip(self, buffer))]
	pub fn read_chars(
		&self,
		field: impl Field,
		source_offset: usize,
		buffer: &mut [char],
		buffer_offset: usize,
		length: usize,
	) -> Result<usize> {
		let position = field.resolve(&self.row)?;
		self.row.read_chars(position, source_offset, buffer, buffer_offset, length)
	}

	#[instrument(name = "reader::nested", level = "trace", skip(self))]
	pub fn nested(&self, field: impl Field) -> Result<Box<dyn Row + '_>> {
		let position = field.resolve(&self.row)?;
		self.row.nested(position)
	}

	/// Like [`RowReader::nested`], but `None` when the field is absent.
	pub fn nested_opt(&self, field: impl Field) -> Result<Option<Box<dyn Row + '_>>> {
		let position = field.resolve(&self.row)?;
		if self.row.is_undefined(position)? {
			return Ok(None);
		}
		self.row.nested(position).map(Some)
	}

	/// Copies raw values in position order into `buffer`.
	pub fn values_into(&self, buffer: &mut [Value]) -> Result<usize> {
		self.row.values(buffer)
	}

	/// All raw values of the row, one per field.
	#[instrument(name = "reader::values", level = "trace", skip(self))]
	pub fn values(&self) -> Result<Vec<Value>> {
		let mut result = vec![Value::Undefined; self.row.field_count()];
		self.row.values(&mut result)?;
		Ok(result)
	}
}

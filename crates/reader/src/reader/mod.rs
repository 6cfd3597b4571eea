// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod convert;
mod get;
mod read;

use rowkit_type::{FormatContext, Result, Type};
use tracing::instrument;

use crate::{Cursor, Field, Row};

/// Wraps a [`Row`] and exposes typed accessors over it.
///
/// The reader holds no state besides the wrapped row and the
/// [`FormatContext`] used by the converting accessors. Every call resolves
/// its field and reads through to the row again.
#[derive(Debug)]
pub struct RowReader<R> {
	row: R,
	format: FormatContext,
}

impl<R: Row> RowReader<R> {
	pub fn new(row: R) -> Self {
		Self {
			row,
			format: FormatContext::default(),
		}
	}

	pub fn with_format(row: R, format: FormatContext) -> Self {
		Self {
			row,
			format,
		}
	}

	pub fn format(&self) -> &FormatContext {
		&self.format
	}

	pub fn set_format(&mut self, format: FormatContext) {
		self.format = format;
	}

	pub fn inner(&self) -> &R {
		&self.row
	}

	pub fn inner_mut(&mut self) -> &mut R {
		&mut self.row
	}

	pub fn into_inner(self) -> R {
		self.row
	}

	#[instrument(name = "reader::resolve", level = "trace", skip(self))]
	pub fn resolve(&self, field: impl Field) -> Result<usize> {
		field.resolve(&self.row)
	}

	pub fn field_count(&self) -> usize {
		self.row.field_count()
	}

	pub fn field_name(&self, position: usize) -> Result<&str> {
		self.row.field_name(position)
	}

	pub fn position_of(&self, name: &str) -> Result<usize> {
		self.row.position_of(name)
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.row.position_of(name).is_ok()
	}

	pub fn field_type(&self, field: impl Field) -> Result<Type> {
		let position = field.resolve(&self.row)?;
		self.row.field_type(position)
	}

	pub fn is_undefined(&self, field: impl Field) -> Result<bool> {
		let position = field.resolve(&self.row)?;
		self.row.is_undefined(position)
	}
}

impl<C: Cursor> RowReader<C> {
	#[instrument(name = "reader::advance", level = "trace", skip(self))]
	pub fn advance(&mut self) -> Result<bool> {
		self.row.advance()
	}

	#[instrument(name = "reader::next_result", level = "trace", skip(self))]
	pub fn next_result(&mut self) -> Result<bool> {
		self.row.next_result()
	}

	pub fn close(&mut self) {
		self.row.close()
	}

	pub fn is_closed(&self) -> bool {
		self.row.is_closed()
	}

	pub fn depth(&self) -> usize {
		self.row.depth()
	}

	pub fn records_affected(&self) -> Option<u64> {
		self.row.records_affected()
	}
}

#[cfg(test)]
mod tests {
	use rowkit_type::{FormatContext, Type, Value};

	use crate::{Frame, FrameColumn, FrameRow, RowReader};

	fn frame() -> Frame {
		Frame::new(vec![
			FrameColumn::new("Id", Type::Int4, vec![Value::Int4(1)]),
			FrameColumn::new("Note", Type::Utf8, vec![Value::Undefined]),
		])
	}

	#[test]
	fn test_metadata() {
		let frame = frame();
		let reader = RowReader::new(FrameRow::new(&frame, 0));

		assert_eq!(reader.field_count(), 2);
		assert_eq!(reader.field_name(1).unwrap(), "Note");
		assert_eq!(reader.position_of("Note").unwrap(), 1);
		assert_eq!(reader.field_type("Id").unwrap(), Type::Int4);
		assert!(reader.is_undefined("Note").unwrap());
		assert!(!reader.is_undefined(0usize).unwrap());
		assert!(reader.has_field("Id"));
		assert!(!reader.has_field("id"));
	}

	#[test]
	fn test_resolve() {
		let frame = frame();
		let reader = RowReader::new(FrameRow::new(&frame, 0));

		assert_eq!(reader.resolve("Note").unwrap(), 1);
		assert_eq!(reader.resolve(1usize).unwrap(), 1);
		assert_eq!(reader.resolve(2usize).unwrap_err().code(), "ROW_002");
		assert_eq!(reader.resolve("Missing").unwrap_err().code(), "ROW_001");
	}

	#[test]
	fn test_format_is_replaceable() {
		let frame = frame();
		let mut reader = RowReader::new(FrameRow::new(&frame, 0));
		assert_eq!(reader.format(), &FormatContext::default());

		reader.set_format(FormatContext::new(',', Some('.')));
		assert_eq!(reader.format().decimal_separator, ',');
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{Result, RowError, Type, Value, return_error};

use super::Frame;
use crate::Row;

/// A single record of a [`Frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameRow<'a> {
	frame: &'a Frame,
	index: usize,
}

impl<'a> FrameRow<'a> {
	/// Reading fields of a row past the end of the frame fails with
	/// `ROW_007`.
	pub fn new(frame: &'a Frame, index: usize) -> Self {
		Self {
			frame,
			index,
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn frame(&self) -> &'a Frame {
		self.frame
	}
}

impl Row for FrameRow<'_> {
	fn field_count(&self) -> usize {
		self.frame.columns.len()
	}

	fn field_name(&self, position: usize) -> Result<&str> {
		Ok(&self.frame.column_at(position)?.name)
	}

	fn position_of(&self, name: &str) -> Result<usize> {
		self.frame.position_of(name)
	}

	fn field_type(&self, position: usize) -> Result<Type> {
		Ok(self.frame.column_at(position)?.ty)
	}

	fn value(&self, position: usize) -> Result<Value> {
		self.frame.value_at(self.index, position)
	}

	fn is_undefined(&self, position: usize) -> Result<bool> {
		let column = self.frame.column_at(position)?;
		match column.data.get(self.index) {
			Some(value) => Ok(value.is_undefined()),
			None => return_error!(RowError::NoCurrentRecord),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FrameColumn;

	fn frame() -> Frame {
		Frame::new(vec![
			FrameColumn::new("Id", Type::Int4, vec![Value::Int4(42)]),
			FrameColumn::new("Name", Type::Utf8, vec![Value::Undefined]),
			FrameColumn::new("Legacy", Type::Int4, vec![Value::Uint1(7)]),
		])
	}

	#[test]
	fn test_get_typed() {
		let frame = frame();
		let row = FrameRow::new(&frame, 0);

		assert_eq!(row.get_typed(0, Type::Int4).unwrap(), Value::Int4(42));
		assert_eq!(row.get_typed(0, Type::Any).unwrap(), Value::Int4(42));
		assert_eq!(row.get_typed(1, Type::Utf8).unwrap_err().code(), "ROW_003");
		assert_eq!(row.get_typed(0, Type::Int8).unwrap_err().code(), "ROW_004");
		assert_eq!(row.get_typed(3, Type::Int4).unwrap_err().code(), "ROW_002");
	}

	#[test]
	fn test_declared_type_may_differ_from_stored_value() {
		let frame = frame();
		let row = FrameRow::new(&frame, 0);

		assert_eq!(row.field_type(2).unwrap(), Type::Int4);
		assert_eq!(row.get_typed(2, Type::Int4).unwrap_err().code(), "ROW_004");
		assert_eq!(row.value(2).unwrap(), Value::Uint1(7));
	}

	#[test]
	fn test_past_the_end() {
		let frame = frame();
		let row = FrameRow::new(&frame, 1);

		assert_eq!(row.field_name(0).unwrap(), "Id");
		assert_eq!(row.value(0).unwrap_err().code(), "ROW_007");
		assert_eq!(row.is_undefined(0).unwrap_err().code(), "ROW_007");
	}

	#[test]
	fn test_row_through_pointers() {
		let frame = frame();
		let row = FrameRow::new(&frame, 0);
		let boxed: Box<dyn Row + '_> = Box::new(row);

		assert_eq!((&row).position_of("Name").unwrap(), 1);
		assert_eq!(boxed.value(0).unwrap(), Value::Int4(42));
		assert!(boxed.is_undefined(1).unwrap());
	}
}

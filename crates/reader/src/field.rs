// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::Debug;

use rowkit_type::{Result, RowError, return_error};

use crate::Row;

/// A reference to a field, either by zero-based position or by name.
///
/// Every accessor of [`RowReader`](crate::RowReader) is generic over
/// `Field`, so `reader.get::<i32>(0)` and `reader.get::<i32>("Id")` are the
/// same operation. Resolution is not cached; it runs against the row on
/// every call.
pub trait Field: Debug {
	fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize>;
}

impl Field for usize {
	fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize> {
		let field_count = row.field_count();
		if *self >= field_count {
			return_error!(RowError::PositionOutOfRange {
				position: *self,
				field_count,
			});
		}
		Ok(*self)
	}
}

impl Field for str {
	fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize> {
		row.position_of(self)
	}
}

impl Field for String {
	fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize> {
		row.position_of(self)
	}
}

impl<F: Field + ?Sized> Field for &F {
	fn resolve<R: Row + ?Sized>(&self, row: &R) -> Result<usize> {
		(**self).resolve(row)
	}
}

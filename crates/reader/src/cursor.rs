// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::Result;

use crate::Row;

/// A forward-only cursor over one or more result sets. The [`Row`] methods
/// read the record the cursor is positioned on.
pub trait Cursor: Row {
	/// Moves to the next record of the current result set. Returns `false`
	/// once the result set is exhausted.
	fn advance(&mut self) -> Result<bool>;

	/// Moves to the next result set, before its first record. Returns `false`
	/// when there are no more result sets.
	fn next_result(&mut self) -> Result<bool>;

	fn close(&mut self);

	fn is_closed(&self) -> bool;

	/// Nesting depth of the current record.
	fn depth(&self) -> usize {
		0
	}

	/// Number of records changed by the statement that produced the cursor,
	/// `None` for pure reads.
	fn records_affected(&self) -> Option<u64> {
		None
	}
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
	fn advance(&mut self) -> Result<bool> {
		(**self).advance()
	}

	fn next_result(&mut self) -> Result<bool> {
		(**self).next_result()
	}

	fn close(&mut self) {
		(**self).close()
	}

	fn is_closed(&self) -> bool {
		(**self).is_closed()
	}

	fn depth(&self) -> usize {
		(**self).depth()
	}

	fn records_affected(&self) -> Option<u64> {
		(**self).records_affected()
	}
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
	fn advance(&mut self) -> Result<bool> {
		(**self).advance()
	}

	fn next_result(&mut self) -> Result<bool> {
		(**self).next_result()
	}

	fn close(&mut self) {
		(**self).close()
	}

	fn is_closed(&self) -> bool {
		(**self).is_closed()
	}

	fn depth(&self) -> usize {
		(**self).depth()
	}

	fn records_affected(&self) -> Option<u64> {
		(**self).records_affected()
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{Result, RowError, Type, Value, return_error};

use super::Frame;
use crate::{Cursor, Row};

static EMPTY: Frame = Frame {
	columns: Vec::new(),
	records_affected: None,
};

/// A forward-only [`Cursor`] over a sequence of frames, one result set per
/// frame.
#[derive(Debug, Clone)]
pub struct FrameCursor {
	frames: Vec<Frame>,
	frame: usize,
	// None before the first advance, row_count() once exhausted
	row: Option<usize>,
	closed: bool,
}

impl FrameCursor {
	pub fn new(frames: Vec<Frame>) -> Self {
		Self {
			frames,
			frame: 0,
			row: None,
			closed: false,
		}
	}

	fn schema(&self) -> Result<&Frame> {
		if self.closed {
			return_error!(RowError::CursorClosed);
		}
		Ok(self.frames.get(self.frame).unwrap_or(&EMPTY))
	}

	fn record(&self) -> Result<(&Frame, usize)> {
		let frame = self.schema()?;
		match self.row {
			Some(row) if row < frame.row_count() => Ok((frame, row)),
			_ => return_error!(RowError::NoCurrentRecord),
		}
	}
}

impl From<Frame> for FrameCursor {
	fn from(frame: Frame) -> Self {
		Self::new(vec![frame])
	}
}

impl Row for FrameCursor {
	fn field_count(&self) -> usize {
		self.schema().map_or(0, |frame| frame.columns.len())
	}

	fn field_name(&self, position: usize) -> Result<&str> {
		Ok(&self.schema()?.column_at(position)?.name)
	}

	fn position_of(&self, name: &str) -> Result<usize> {
		self.schema()?.position_of(name)
	}

	fn field_type(&self, position: usize) -> Result<Type> {
		Ok(self.schema()?.column_at(position)?.ty)
	}

	fn value(&self, position: usize) -> Result<Value> {
		let (frame, row) = self.record()?;
		frame.value_at(row, position)
	}
}

impl Cursor for FrameCursor {
	fn advance(&mut self) -> Result<bool> {
		if self.closed {
			return_error!(RowError::CursorClosed);
		}

		let row_count = match self.frames.get(self.frame) {
			Some(frame) => frame.row_count(),
			None => return Ok(false),
		};

		let next = self.row.map_or(0, |row| (row + 1).min(row_count));
		self.row = Some(next);
		Ok(next < row_count)
	}

	fn next_result(&mut self) -> Result<bool> {
		if self.closed {
			return_error!(RowError::CursorClosed);
		}

		self.row = None;
		if self.frame + 1 < self.frames.len() {
			self.frame += 1;
			Ok(true)
		} else {
			self.frame = self.frames.len();
			Ok(false)
		}
	}

	fn close(&mut self) {
		self.closed = true;
	}

	fn is_closed(&self) -> bool {
		self.closed
	}

	/// Sum over all result sets that report a count, saturating at
	/// `u64::MAX`.
	fn records_affected(&self) -> Option<u64> {
		self.frames.iter().filter_map(|f| f.records_affected).reduce(|a, b| a.saturating_add(b))
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! An in-memory row source: named, typed columns of [`Value`]s.

mod cursor;
mod row;

use std::{
	fmt::{self, Display, Formatter},
	ops::{Deref, Index},
};

pub use cursor::FrameCursor;
pub use row::FrameRow;
use rowkit_type::{IntoValue, Result, RowError, Type, Value, return_error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameColumn {
	pub name: String,
	/// The declared type. Stored values are not checked against it.
	pub ty: Type,
	pub data: Vec<Value>,
}

impl FrameColumn {
	/// Native values are accepted as well; `None` becomes
	/// `Value::Undefined`.
	pub fn new<V: IntoValue>(name: impl Into<String>, ty: Type, data: impl IntoIterator<Item = V>) -> Self {
		Self {
			name: name.into(),
			ty,
			data: data.into_iter().map(IntoValue::into_value).collect(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
	pub columns: Vec<FrameColumn>,
	/// Records changed by the statement that produced the frame.
	#[serde(default)]
	pub records_affected: Option<u64>,
}

impl Deref for Frame {
	type Target = [FrameColumn];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Frame {
	type Output = FrameColumn;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Frame {
	pub fn new(columns: Vec<FrameColumn>) -> Self {
		Self {
			columns,
			records_affected: None,
		}
	}

	pub fn with_records_affected(mut self, records_affected: u64) -> Self {
		self.records_affected = Some(records_affected);
		self
	}

	/// Number of records, taken from the shortest column.
	pub fn row_count(&self) -> usize {
		self.columns.iter().map(|c| c.data.len()).min().unwrap_or(0)
	}

	pub fn row(&self, index: usize) -> Option<FrameRow<'_>> {
		if index < self.row_count() {
			Some(FrameRow::new(self, index))
		} else {
			None
		}
	}

	pub fn rows(&self) -> impl Iterator<Item = FrameRow<'_>> {
		(0..self.row_count()).map(move |index| FrameRow::new(self, index))
	}

	pub(crate) fn column_at(&self, position: usize) -> Result<&FrameColumn> {
		match self.columns.get(position) {
			Some(column) => Ok(column),
			None => return_error!(RowError::PositionOutOfRange {
				position,
				field_count: self.columns.len(),
			}),
		}
	}

	pub(crate) fn position_of(&self, name: &str) -> Result<usize> {
		match self.columns.iter().position(|c| c.name == name) {
			Some(position) => Ok(position),
			None => return_error!(RowError::FieldNotFound {
				name: name.to_string(),
			}),
		}
	}

	pub(crate) fn value_at(&self, row: usize, position: usize) -> Result<Value> {
		let column = self.column_at(position)?;
		match column.data.get(row) {
			Some(value) => Ok(value.clone()),
			None => return_error!(RowError::NoCurrentRecord),
		}
	}
}

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn width(s: &str) -> usize {
	s.chars().count()
}

fn centered(text: &str, w: usize) -> String {
	let pad = w - width(text);
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", text, "")
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::with_capacity(self.columns.len());
		for col in &self.columns {
			let header_width = width(&escape_control_chars(&col.name));
			let max_val_width = col
				.data
				.iter()
				.take(row_count)
				.map(|v| width(&escape_control_chars(&v.to_string())))
				.max()
				.unwrap_or(0);
			col_widths.push(header_width.max(max_val_width) + 2);
		}

		let sep: String = if col_widths.is_empty() {
			"++".to_string()
		} else {
			col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+"
		};

		writeln!(f, "{}", sep)?;

		let header: Vec<String> = self
			.columns
			.iter()
			.zip(&col_widths)
			.map(|(col, w)| centered(&escape_control_chars(&col.name), *w))
			.collect();
		writeln!(f, "|{}|", header.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let parts: Vec<String> = self
				.columns
				.iter()
				.zip(&col_widths)
				.map(|(col, w)| centered(&escape_control_chars(&col.data[row_idx].to_string()), *w))
				.collect();
			writeln!(f, "|{}|", parts.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}

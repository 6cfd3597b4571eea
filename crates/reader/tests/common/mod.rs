// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![allow(dead_code)]

use std::cell::Cell;

use rowkit_reader::{Result, Row, RowError, Type, Value};
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// A row that refuses to run its typed getter on an absent value, and counts
/// how often the typed getter ran.
pub struct StubRow {
	fields: Vec<(String, Type, Value)>,
	typed_calls: Cell<usize>,
}

impl StubRow {
	pub fn new(fields: Vec<(&str, Type, Value)>) -> Self {
		Self {
			fields: fields.into_iter().map(|(name, ty, value)| (name.to_string(), ty, value)).collect(),
			typed_calls: Cell::new(0),
		}
	}

	pub fn typed_calls(&self) -> usize {
		self.typed_calls.get()
	}

	fn field(&self, position: usize) -> Result<&(String, Type, Value)> {
		self.fields.get(position).ok_or_else(|| {
			RowError::PositionOutOfRange {
				position,
				field_count: self.fields.len(),
			}
			.into()
		})
	}
}

impl Row for StubRow {
	fn field_count(&self) -> usize {
		self.fields.len()
	}

	fn field_name(&self, position: usize) -> Result<&str> {
		Ok(&self.field(position)?.0)
	}

	fn position_of(&self, name: &str) -> Result<usize> {
		self.fields.iter().position(|(n, _, _)| n == name).ok_or_else(|| {
			RowError::FieldNotFound {
				name: name.to_string(),
			}
			.into()
		})
	}

	fn field_type(&self, position: usize) -> Result<Type> {
		Ok(self.field(position)?.1)
	}

	fn value(&self, position: usize) -> Result<Value> {
		Ok(self.field(position)?.2.clone())
	}

	fn get_typed(&self, position: usize, ty: Type) -> Result<Value> {
		self.typed_calls.set(self.typed_calls.get() + 1);
		let (name, _, value) = self.field(position)?;
		assert!(!value.is_undefined(), "typed getter invoked on absent field '{}'", name);
		if ty != Type::Any && value.get_type() != ty {
			return Err(RowError::TypeMismatch {
				position,
				name: name.clone(),
				expected: ty,
				actual: value.get_type(),
			}
			.into());
		}
		Ok(value.clone())
	}
}

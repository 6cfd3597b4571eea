// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use rowkit_type::{Result, RowError, Type, Value, return_error};

/// The capability set a data source exposes for a single record.
///
/// Positions are zero-based. Only the schema lookups and [`Row::value`] are
/// required; the typed getter, ranged reads and bulk capture have default
/// implementations in terms of them which sources may override.
pub trait Row {
	fn field_count(&self) -> usize;

	fn field_name(&self, position: usize) -> Result<&str>;

	/// Resolves a name to its position. Names match exactly and the first
	/// field with the name wins.
	fn position_of(&self, name: &str) -> Result<usize>;

	/// The declared type of the field, which may differ from the runtime
	/// type of the value it holds.
	fn field_type(&self, position: usize) -> Result<Type>;

	fn is_undefined(&self, position: usize) -> Result<bool> {
		Ok(self.value(position)?.is_undefined())
	}

	/// The raw value, `Value::Undefined` when absent.
	fn value(&self, position: usize) -> Result<Value>;

	/// The strongly typed getter. Fails when the value is absent or when its
	/// runtime type is not `ty`. `Type::Any` accepts every defined value.
	fn get_typed(&self, position: usize, ty: Type) -> Result<Value> {
		let value = self.value(position)?;
		if value.is_undefined() {
			return_error!(RowError::Undefined {
				position,
				name: self.field_name(position)?.to_string(),
			});
		}

		let actual = value.get_type();
		if ty != Type::Any && actual != ty {
			return_error!(RowError::TypeMismatch {
				position,
				name: self.field_name(position)?.to_string(),
				expected: ty,
				actual,
			});
		}

		Ok(value)
	}

	/// Copies up to `length` bytes starting at `source_offset` of a blob or
	/// text field into `buffer[buffer_offset..]`. Returns the number of bytes
	/// copied, which is zero once `source_offset` passes the end.
	fn read_bytes(
		&self,
		position: usize,
		source_offset: usize,
		buffer: &mut [u8],
		buffer_offset: usize,
		length: usize,
	) -> Result<usize> {
		let value = self.get_typed(position, Type::Any)?;
		let source: &[u8] = match &value {
			Value::Blob(blob) => blob.as_bytes(),
			Value::Utf8(text) => text.as_bytes(),
			other => {
				return_error!(RowError::Unsupported {
					operation: "read_bytes",
					name: self.field_name(position)?.to_string(),
					ty: other.get_type(),
				});
			}
		};
		Ok(copy_range(source, source_offset, buffer, buffer_offset, length)?)
	}

	/// Like [`Row::read_bytes`] but counts in chars of a text or char field.
	fn read_chars(
		&self,
		position: usize,
		source_offset: usize,
		buffer: &mut [char],
		buffer_offset: usize,
		length: usize,
	) -> Result<usize> {
		let value = self.get_typed(position, Type::Any)?;
		let source: Vec<char> = match &value {
			Value::Utf8(text) => text.chars().collect(),
			Value::Char(c) => vec![*c],
			other => {
				return_error!(RowError::Unsupported {
					operation: "read_chars",
					name: self.field_name(position)?.to_string(),
					ty: other.get_type(),
				});
			}
		};
		Ok(copy_range(&source, source_offset, buffer, buffer_offset, length)?)
	}

	/// Fills `buffer` with raw values in position order and returns how many
	/// were written: the smaller of the buffer length and the field count.
	fn values(&self, buffer: &mut [Value]) -> Result<usize> {
		let count = buffer.len().min(self.field_count());
		for (position, slot) in buffer.iter_mut().take(count).enumerate() {
			*slot = self.value(position)?;
		}
		Ok(count)
	}

	/// A row nested inside the field. Sources without nested rows keep the
	/// default, which reports the operation as unsupported.
	fn nested(&self, position: usize) -> Result<Box<dyn Row + '_>> {
		return_error!(RowError::Unsupported {
			operation: "nested",
			name: self.field_name(position)?.to_string(),
			ty: self.field_type(position)?,
		});
	}
}

fn copy_range<T: Copy>(
	source: &[T],
	source_offset: usize,
	buffer: &mut [T],
	buffer_offset: usize,
	length: usize,
) -> std::result::Result<usize, RowError> {
	if buffer_offset > buffer.len() || (length > 0 && buffer_offset == buffer.len()) {
		return Err(RowError::BufferOutOfRange {
			buffer_offset,
			length,
			capacity: buffer.len(),
		});
	}

	if source_offset >= source.len() {
		return Ok(0);
	}

	let count = length.min(source.len() - source_offset).min(buffer.len() - buffer_offset);
	buffer[buffer_offset..buffer_offset + count].copy_from_slice(&source[source_offset..source_offset + count]);
	Ok(count)
}

macro_rules! impl_row_for_pointer {
	($($ptr:ty),* $(,)?) => {
		$(
			impl<R: Row + ?Sized> Row for $ptr {
				fn field_count(&self) -> usize {
					(**self).field_count()
				}

				fn field_name(&self, position: usize) -> Result<&str> {
					(**self).field_name(position)
				}

				fn position_of(&self, name: &str) -> Result<usize> {
					(**self).position_of(name)
				}

				fn field_type(&self, position: usize) -> Result<Type> {
					(**self).field_type(position)
				}

				fn is_undefined(&self, position: usize) -> Result<bool> {
					(**self).is_undefined(position)
				}

				fn value(&self, position: usize) -> Result<Value> {
					(**self).value(position)
				}

				fn get_typed(&self, position: usize, ty: Type) -> Result<Value> {
					(**self).get_typed(position, ty)
				}

				fn read_bytes(
					&self,
					position: usize,
					source_offset: usize,
					buffer: &mut [u8],
					buffer_offset: usize,
					length: usize,
				) -> Result<usize> {
					(**self).read_bytes(position, source_offset, buffer, buffer_offset, length)
				}

				fn read_chars(
					&self,
					position: usize,
					source_offset: usize,
					buffer: &mut [char],
					buffer_offset: usize,
					length: usize,
				) -> Result<usize> {
					(**self).read_chars(position, source_offset, buffer, buffer_offset, length)
				}

				fn values(&self, buffer: &mut [Value]) -> Result<usize> {
					(**self).values(buffer)
				}

				fn nested(&self, position: usize) -> Result<Box<dyn Row + '_>> {
					(**self).nested(position)
				}
			}
		)*
	};
}

impl_row_for_pointer!(&R, &mut R, Box<R>);

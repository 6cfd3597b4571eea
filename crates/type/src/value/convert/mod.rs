// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Best-effort coercion of raw values into requested native types.
//!
//! Providers do not always hand back the representation a caller expects: a
//! column declared as a 32-bit integer may arrive as an 8-bit one, a number
//! may arrive as text. [`Convert`] bridges those gaps. Undefined values are
//! only absorbed by targets that can represent them (`Option<T>` and
//! [`Value`]); every other target fails with [`ConvertError::Undefined`].

use tracing::debug;

use crate::{ConvertError, Type, Value};

mod format;
mod number;
mod text;

pub use format::FormatContext;

pub trait Convert: Sized {
	/// The type this conversion produces, used in diagnostics.
	fn target() -> Type;

	/// The result for an undefined source value.
	fn undefined() -> Result<Self, ConvertError> {
		Err(ConvertError::Undefined {
			to: Self::target(),
		})
	}

	/// Converts a defined value. Use [`convert_value`] to also handle
	/// undefined values.
	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError>;
}

pub fn convert_value<T: Convert>(value: Value, ctx: &FormatContext) -> Result<T, ConvertError> {
	if value.is_undefined() {
		return T::undefined();
	}

	let from = value.get_type();
	T::convert(value, ctx).inspect_err(|err| {
		let to = T::target();
		debug!(%from, %to, error = %err, "value conversion failed");
	})
}

impl<T: Convert> Convert for Option<T> {
	fn target() -> Type {
		T::target()
	}

	fn undefined() -> Result<Self, ConvertError> {
		Ok(None)
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		T::convert(value, ctx).map(Some)
	}
}

impl Convert for Value {
	fn target() -> Type {
		Type::Any
	}

	fn undefined() -> Result<Self, ConvertError> {
		Ok(Value::Undefined)
	}

	fn convert(value: Value, _ctx: &FormatContext) -> Result<Self, ConvertError> {
		Ok(value)
	}
}

pub(crate) fn unsupported<T: Convert>(value: &Value) -> ConvertError {
	ConvertError::Unsupported {
		from: value.get_type(),
		to: T::target(),
	}
}

pub(crate) fn out_of_range<T: Convert>(value: &Value) -> ConvertError {
	ConvertError::OutOfRange {
		value: value.to_string(),
		to: T::target(),
	}
}

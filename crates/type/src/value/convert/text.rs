// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Convert, FormatContext, out_of_range, unsupported};
use crate::{Blob, ConvertError, DateTime, Type, Uuid, Value};

impl Convert for String {
	fn target() -> Type {
		Type::Utf8
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::Utf8(v) => Ok(v),
			other => Ok(ctx.format(&other)),
		}
	}
}

impl Convert for char {
	fn target() -> Type {
		Type::Char
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		match &value {
			Value::Char(v) => Ok(*v),
			Value::Utf8(v) => {
				let mut chars = v.chars();
				match (chars.next(), chars.next()) {
					(Some(c), None) => Ok(c),
					_ => Err(ConvertError::InvalidText {
						text: v.clone(),
						to: Type::Char,
					}),
				}
			}
			// integers are code points
			other if other.get_type().is_integer() => {
				let code = <u32 as Convert>::convert(value.clone(), ctx).map_err(|_| out_of_range::<Self>(&value))?;
				char::from_u32(code).ok_or_else(|| out_of_range::<Self>(&value))
			}
			_ => Err(unsupported::<Self>(&value)),
		}
	}
}

impl Convert for DateTime {
	fn target() -> Type {
		Type::DateTime
	}

	fn convert(value: Value, _ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::DateTime(v) => Ok(v),
			Value::Utf8(v) => DateTime::parse(&v).ok_or(ConvertError::InvalidText {
				text: v,
				to: Type::DateTime,
			}),
			other => Err(unsupported::<Self>(&other)),
		}
	}
}

impl Convert for Uuid {
	fn target() -> Type {
		Type::Uuid
	}

	fn convert(value: Value, _ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::Uuid(v) => Ok(v),
			Value::Utf8(v) => Uuid::parse(&v).ok_or(ConvertError::InvalidText {
				text: v,
				to: Type::Uuid,
			}),
			Value::Blob(v) => Uuid::from_slice(v.as_bytes()).ok_or_else(|| ConvertError::InvalidText {
				text: v.to_hex(),
				to: Type::Uuid,
			}),
			other => Err(unsupported::<Self>(&other)),
		}
	}
}

impl Convert for Blob {
	fn target() -> Type {
		Type::Blob
	}

	fn convert(value: Value, _ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::Blob(v) => Ok(v),
			Value::Utf8(v) => Blob::from_hex(&v),
			Value::Uuid(v) => Ok(Blob::from(*v.as_bytes())),
			other => Err(unsupported::<Self>(&other)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::convert::convert_value;

	fn convert<T: Convert>(value: Value) -> Result<T, ConvertError> {
		convert_value(value, &FormatContext::default())
	}

	#[test]
	fn test_string_from_any_defined_value() {
		assert_eq!(convert::<String>(Value::Int4(42)), Ok("42".to_string()));
		assert_eq!(convert::<String>(Value::Boolean(false)), Ok("false".to_string()));
		assert_eq!(convert::<String>(Value::Char('z')), Ok("z".to_string()));
		assert_eq!(
			convert::<String>(Value::DateTime(DateTime::from_ymd(2020, 1, 1).unwrap())),
			Ok("2020-01-01T00:00:00Z".to_string())
		);
	}

	#[test]
	fn test_char_conversions() {
		assert_eq!(convert::<char>(Value::Uint1(b'a')), Ok('a'));
		assert_eq!(convert::<char>(Value::Int4(0x263A)), Ok('\u{263A}'));
		assert!(convert::<char>(Value::Int4(-1)).is_err());
		assert!(convert::<char>(Value::Uint4(0xD800)).is_err());
		assert!(convert::<char>(Value::utf8("ab")).is_err());
		assert!(convert::<char>(Value::utf8("")).is_err());
	}

	#[test]
	fn test_char_from_every_integer_width() {
		assert_eq!(convert::<char>(Value::Int1(65)), Ok('A'));
		assert_eq!(convert::<char>(Value::Int2(65)), Ok('A'));
		assert_eq!(convert::<char>(Value::Uint2(65)), Ok('A'));
		assert_eq!(convert::<char>(Value::Uint8(65)), Ok('A'));
		assert!(matches!(convert::<char>(Value::Int1(-1)), Err(ConvertError::OutOfRange { .. })));
		assert!(matches!(convert::<char>(Value::Float8(65.0)), Err(ConvertError::Unsupported { .. })));
	}

	#[test]
	fn test_datetime_from_invalid_text() {
		assert_eq!(
			convert::<DateTime>(Value::utf8("not a date")),
			Err(ConvertError::InvalidText {
				text: "not a date".to_string(),
				to: Type::DateTime,
			})
		);
	}

	#[test]
	fn test_uuid_blob_roundtrip() {
		let uuid = Uuid::generate();
		let blob = convert::<Blob>(Value::Uuid(uuid)).unwrap();
		assert_eq!(blob.len(), 16);
		assert_eq!(convert::<Uuid>(Value::Blob(blob)), Ok(uuid));
		assert!(convert::<Uuid>(Value::blob(vec![1, 2, 3])).is_err());
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use num_traits::Zero;

use super::{Convert, FormatContext, out_of_range, unsupported};
use crate::{ConvertError, Decimal, GetType, Type, Value};

/// Widens any integral-compatible value to `i128`; floats and decimals are
/// rounded half to even.
fn to_i128<T: Convert>(value: &Value, ctx: &FormatContext) -> Result<i128, ConvertError> {
	match value {
		Value::Boolean(v) => Ok(*v as i128),
		Value::Int1(v) => Ok(*v as i128),
		Value::Int2(v) => Ok(*v as i128),
		Value::Int4(v) => Ok(*v as i128),
		Value::Int8(v) => Ok(*v as i128),
		Value::Uint1(v) => Ok(*v as i128),
		Value::Uint2(v) => Ok(*v as i128),
		Value::Uint4(v) => Ok(*v as i128),
		Value::Uint8(v) => Ok(*v as i128),
		Value::Float4(v) => float_to_i128::<T>(*v as f64, value),
		Value::Float8(v) => float_to_i128::<T>(*v, value),
		Value::Decimal(v) => v.round_to_i128().ok_or_else(|| out_of_range::<T>(value)),
		Value::Char(v) => Ok(*v as u32 as i128),
		Value::Utf8(v) => ctx.parse_integer(v, T::target()),
		_ => Err(unsupported::<T>(value)),
	}
}

fn float_to_i128<T: Convert>(v: f64, value: &Value) -> Result<i128, ConvertError> {
	let rounded = v.round_ties_even();
	if !rounded.is_finite() || rounded < i128::MIN as f64 || rounded >= i128::MAX as f64 {
		return Err(out_of_range::<T>(value));
	}
	Ok(rounded as i128)
}

macro_rules! impl_convert_integer {
	($($t:ty),* $(,)?) => {
		$(
			impl Convert for $t {
				fn target() -> Type {
					<$t as GetType>::get_type()
				}

				fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
					let wide = to_i128::<Self>(&value, ctx)?;
					<$t>::try_from(wide).map_err(|_| out_of_range::<Self>(&value))
				}
			}
		)*
	};
}

impl_convert_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

fn to_f64<T: Convert>(value: &Value, ctx: &FormatContext) -> Result<f64, ConvertError> {
	match value {
		Value::Boolean(v) => Ok(if *v {
			1.0
		} else {
			0.0
		}),
		Value::Int1(v) => Ok(*v as f64),
		Value::Int2(v) => Ok(*v as f64),
		Value::Int4(v) => Ok(*v as f64),
		Value::Int8(v) => Ok(*v as f64),
		Value::Uint1(v) => Ok(*v as f64),
		Value::Uint2(v) => Ok(*v as f64),
		Value::Uint4(v) => Ok(*v as f64),
		Value::Uint8(v) => Ok(*v as f64),
		Value::Float4(v) => Ok(*v as f64),
		Value::Float8(v) => Ok(*v),
		Value::Decimal(v) => v.to_f64().ok_or_else(|| out_of_range::<T>(value)),
		Value::Utf8(v) => ctx.parse_float(v, T::target()),
		_ => Err(unsupported::<T>(value)),
	}
}

impl Convert for f64 {
	fn target() -> Type {
		Type::Float8
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		to_f64::<Self>(&value, ctx)
	}
}

impl Convert for f32 {
	fn target() -> Type {
		Type::Float4
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		if let Value::Float4(v) = value {
			return Ok(v);
		}
		let wide = to_f64::<Self>(&value, ctx)?;
		let narrow = wide as f32;
		if wide.is_finite() && !narrow.is_finite() {
			return Err(out_of_range::<Self>(&value));
		}
		Ok(narrow)
	}
}

impl Convert for Decimal {
	fn target() -> Type {
		Type::Decimal
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::Decimal(v) => Ok(v),
			Value::Boolean(v) => Ok(Decimal::from(v as i64)),
			Value::Int1(v) => Ok(Decimal::from(v as i64)),
			Value::Int2(v) => Ok(Decimal::from(v as i64)),
			Value::Int4(v) => Ok(Decimal::from(v as i64)),
			Value::Int8(v) => Ok(Decimal::from(v)),
			Value::Uint1(v) => Ok(Decimal::from(v as u64)),
			Value::Uint2(v) => Ok(Decimal::from(v as u64)),
			Value::Uint4(v) => Ok(Decimal::from(v as u64)),
			Value::Uint8(v) => Ok(Decimal::from(v)),
			Value::Float4(v) => Decimal::from_f32(v).ok_or_else(|| out_of_range::<Self>(&value)),
			Value::Float8(v) => Decimal::from_f64(v).ok_or_else(|| out_of_range::<Self>(&value)),
			Value::Utf8(ref v) => ctx.parse_decimal(v),
			_ => Err(unsupported::<Self>(&value)),
		}
	}
}

impl Convert for bool {
	fn target() -> Type {
		Type::Boolean
	}

	fn convert(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			Value::Boolean(v) => Ok(v),
			Value::Int1(v) => Ok(v != 0),
			Value::Int2(v) => Ok(v != 0),
			Value::Int4(v) => Ok(v != 0),
			Value::Int8(v) => Ok(v != 0),
			Value::Uint1(v) => Ok(v != 0),
			Value::Uint2(v) => Ok(v != 0),
			Value::Uint4(v) => Ok(v != 0),
			Value::Uint8(v) => Ok(v != 0),
			Value::Float4(v) => Ok(v != 0.0),
			Value::Float8(v) => Ok(v != 0.0),
			Value::Decimal(v) => Ok(!v.inner().is_zero()),
			Value::Utf8(ref v) => ctx.parse_bool(v),
			_ => Err(unsupported::<Self>(&value)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::convert::convert_value;

	#[test]
	fn test_every_integer_width_widens() {
		let ctx = FormatContext::default();
		assert_eq!(convert_value::<i16>(Value::Int1(-8), &ctx), Ok(-8));
		assert_eq!(convert_value::<u16>(Value::Uint1(8), &ctx), Ok(8));
		assert_eq!(convert_value::<u64>(Value::Uint4(u32::MAX), &ctx), Ok(u32::MAX as u64));
		assert_eq!(convert_value::<i64>(Value::Uint4(u32::MAX), &ctx), Ok(u32::MAX as i64));
	}

	#[test]
	fn test_u64_max_does_not_fit_i64() {
		let ctx = FormatContext::default();
		assert!(convert_value::<i64>(Value::Uint8(u64::MAX), &ctx).is_err());
		assert_eq!(convert_value::<u64>(Value::Uint8(u64::MAX), &ctx), Ok(u64::MAX));
	}

	#[test]
	fn test_f32_overflow() {
		let ctx = FormatContext::default();
		assert!(convert_value::<f32>(Value::Float8(1e300), &ctx).is_err());
		assert_eq!(convert_value::<f32>(Value::Float8(0.5), &ctx), Ok(0.5));
	}

	#[test]
	fn test_bool_from_numbers() {
		let ctx = FormatContext::default();
		assert_eq!(convert_value::<bool>(Value::Int4(2), &ctx), Ok(true));
		assert_eq!(convert_value::<bool>(Value::Float8(0.0), &ctx), Ok(false));
		assert_eq!(convert_value::<bool>(Value::Decimal(Decimal::zero()), &ctx), Ok(false));
	}

	#[test]
	fn test_decimal_from_float() {
		let ctx = FormatContext::default();
		assert_eq!(convert_value::<Decimal>(Value::Float8(0.5), &ctx).unwrap().to_string(), "0.5");
		assert!(convert_value::<Decimal>(Value::Float8(f64::INFINITY), &ctx).is_err());
	}

	#[test]
	fn test_decimal_from_float_keeps_significant_digits() {
		let ctx = FormatContext::default();
		assert_eq!(convert_value::<Decimal>(Value::Float8(0.1), &ctx).unwrap().to_string(), "0.1");
		assert_eq!(convert_value::<Decimal>(Value::Float4(0.1), &ctx).unwrap().to_string(), "0.1");
	}

	#[test]
	fn test_huge_decimal_to_integer_is_out_of_range() {
		let ctx = FormatContext::default();
		let huge = crate::value::decimal::parse_decimal("1e200000000").unwrap();
		assert!(matches!(
			convert_value::<i64>(Value::Decimal(huge.clone()), &ctx),
			Err(ConvertError::OutOfRange {
				to: Type::Int8,
				..
			})
		));
		assert!(matches!(convert_value::<u8>(Value::Decimal(huge), &ctx), Err(ConvertError::OutOfRange { .. })));
	}
}

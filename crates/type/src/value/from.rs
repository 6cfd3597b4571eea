// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Blob, DateTime, Decimal, GetType, Uuid, Value};

/// Extracts a native value when the runtime type of a [`Value`] matches
/// exactly. No coercion happens here; see [`Convert`](crate::Convert) for
/// that.
pub trait FromValue: GetType + Sized {
	fn from_value(value: Value) -> Option<Self>;
}

macro_rules! impl_from_value {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl FromValue for $t {
				fn from_value(value: Value) -> Option<Self> {
					match value {
						Value::$variant(v) => Some(v),
						_ => None,
					}
				}
			}
		)*
	};
}

impl_from_value!(
	bool => Boolean,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	f32 => Float4,
	f64 => Float8,
	Decimal => Decimal,
	DateTime => DateTime,
	Uuid => Uuid,
	char => Char,
	String => Utf8,
	Blob => Blob,
);

impl FromValue for Value {
	fn from_value(value: Value) -> Option<Self> {
		Some(value)
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Blob, DateTime, Decimal, Uuid, Value};

pub trait IntoValue {
	fn into_value(self) -> Value;
}

macro_rules! impl_into_value {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl IntoValue for $t {
				fn into_value(self) -> Value {
					Value::$variant(self)
				}
			}

			impl From<$t> for Value {
				fn from(value: $t) -> Self {
					Value::$variant(value)
				}
			}
		)*
	};
}

impl_into_value!(
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

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Utf8(value.to_string())
	}
}

impl IntoValue for Vec<u8> {
	fn into_value(self) -> Value {
		Value::Blob(Blob::new(self))
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(value) => value.into_value(),
			None => Value::Undefined,
		}
	}
}

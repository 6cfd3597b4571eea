// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Blob, DateTime, Decimal, Type, Uuid, Value};

pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $t {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type!(
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
	Value => Any,
);

impl<T: GetType> GetType for Option<T> {
	fn get_type() -> Type {
		T::get_type()
	}
}

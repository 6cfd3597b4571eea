// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;

pub use get::GetType;

/// The declared type of a field or the runtime type of a [`Value`](crate::Value).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Undefined,
	Boolean,
	Int1,
	Int2,
	Int4,
	Int8,
	Uint1,
	Uint2,
	Uint4,
	Uint8,
	Float4,
	Float8,
	Decimal,
	DateTime,
	Uuid,
	Char,
	Utf8,
	Blob,
	/// Accepts a value of any type
	Any,
}

impl Type {
	pub fn is_integer(&self) -> bool {
		matches!(
			self,
			Type::Int1
				| Type::Int2 | Type::Int4
				| Type::Int8 | Type::Uint1
				| Type::Uint2 | Type::Uint4
				| Type::Uint8
		)
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Undefined => f.write_str("Undefined"),
			Type::Boolean => f.write_str("Boolean"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Decimal => f.write_str("Decimal"),
			Type::DateTime => f.write_str("DateTime"),
			Type::Uuid => f.write_str("Uuid"),
			Type::Char => f.write_str("Char"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Blob => f.write_str("Blob"),
			Type::Any => f.write_str("Any"),
		}
	}
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{Convert, ConvertError, FormatContext, Type, Value};

/// A fieldless enum that can be read from a row, either by member name or by
/// discriminant. Implement it with the [`enumeration!`](crate::enumeration)
/// macro.
pub trait Enumeration: Sized {
	const NAME: &'static str;

	/// Case-insensitive lookup by member name.
	fn from_name(name: &str) -> Option<Self>;

	fn from_discriminant(value: i64) -> Option<Self>;

	/// Text is matched against member names, anything else is converted to
	/// `i64` and matched against discriminants.
	fn map_value(value: Value, ctx: &FormatContext) -> Result<Self, ConvertError> {
		match value {
			// the underlying representation of an enumeration is Int8
			Value::Undefined => Err(ConvertError::Undefined {
				to: Type::Int8,
			}),
			Value::Utf8(text) => Self::from_name(text.trim()).ok_or(ConvertError::NoSuchMember {
				enumeration: Self::NAME,
				value: format!("'{}'", text),
			}),
			other => {
				let discriminant = <i64 as Convert>::convert(other, ctx)?;
				Self::from_discriminant(discriminant).ok_or(ConvertError::NoSuchMember {
					enumeration: Self::NAME,
					value: discriminant.to_string(),
				})
			}
		}
	}
}

/// Declares a fieldless enum and implements [`Enumeration`] for it.
///
/// ```
/// rowkit_type::enumeration! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Status {
///         Pending = 0,
///         Active = 1,
///         Closed = 2,
///     }
/// }
/// ```
#[macro_export]
macro_rules! enumeration {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$(
				$(#[$variant_meta:meta])*
				$variant:ident $(= $discriminant:expr)?
			),* $(,)?
		}
	) => {
		$(#[$meta])*
		$vis enum $name {
			$(
				$(#[$variant_meta])*
				$variant $(= $discriminant)?
			),*
		}

		impl $crate::Enumeration for $name {
			const NAME: &'static str = stringify!($name);

			fn from_name(name: &str) -> Option<Self> {
				$(
					if name.eq_ignore_ascii_case(stringify!($variant)) {
						return Some($name::$variant);
					}
				)*
				None
			}

			fn from_discriminant(value: i64) -> Option<Self> {
				$(
					if value == $name::$variant as i64 {
						return Some($name::$variant);
					}
				)*
				None
			}
		}
	};
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, str::FromStr};

use bigdecimal::BigDecimal as BigDecimalInner;

use crate::{ConvertError, Type, value::decimal::Decimal};

pub fn parse_decimal(text: &str) -> Result<Decimal, ConvertError> {
	let invalid = || ConvertError::InvalidText {
		text: text.to_string(),
		to: Type::Decimal,
	};

	let has_underscores = text.as_bytes().contains(&b'_');
	let value = if has_underscores {
		Cow::Owned(text.trim().replace('_', ""))
	} else {
		Cow::Borrowed(text.trim())
	};

	if value.is_empty() {
		return Err(invalid());
	}

	let big_decimal = BigDecimalInner::from_str(&value).map_err(|_| invalid())?;

	Ok(Decimal::new(big_decimal))
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::{
	ConvertError, Decimal, Type, Value,
	value::decimal::parse_decimal,
};

/// Culture-dependent formatting parameters used when converting between text
/// and other types.
///
/// The default is the invariant culture: `.` as decimal separator, no group
/// separator, and `true`/`false` as boolean literals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatContext {
	pub decimal_separator: char,
	pub group_separator: Option<char>,
	/// Matched case-insensitively
	pub true_literals: Vec<String>,
	/// Matched case-insensitively
	pub false_literals: Vec<String>,
}

impl Default for FormatContext {
	fn default() -> Self {
		Self {
			decimal_separator: '.',
			group_separator: None,
			true_literals: vec!["true".to_string()],
			false_literals: vec!["false".to_string()],
		}
	}
}

impl FormatContext {
	pub fn invariant() -> Self {
		Self::default()
	}

	pub fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
		Self {
			decimal_separator,
			group_separator,
			..Self::default()
		}
	}

	pub fn with_boolean_literals<I, S>(mut self, true_literals: I, false_literals: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.true_literals = true_literals.into_iter().map(Into::into).collect();
		self.false_literals = false_literals.into_iter().map(Into::into).collect();
		self
	}

	/// Rewrites culture specific numeric text into the invariant form.
	fn normalize<'a>(&self, text: &'a str) -> Cow<'a, str> {
		let text = text.trim();
		let needs_grouping = self.group_separator.is_some_and(|g| text.contains(g));
		let needs_separator = self.decimal_separator != '.' && text.contains(self.decimal_separator);

		if !needs_grouping && !needs_separator {
			return Cow::Borrowed(text);
		}

		let mut out = String::with_capacity(text.len());
		for c in text.chars() {
			if Some(c) == self.group_separator {
				continue;
			}
			if c == self.decimal_separator {
				out.push('.');
			} else {
				out.push(c);
			}
		}
		Cow::Owned(out)
	}

	pub fn parse_integer(&self, text: &str, to: Type) -> Result<i128, ConvertError> {
		self.normalize(text).parse::<i128>().map_err(|_| ConvertError::InvalidText {
			text: text.to_string(),
			to,
		})
	}

	pub fn parse_float(&self, text: &str, to: Type) -> Result<f64, ConvertError> {
		self.normalize(text).parse::<f64>().map_err(|_| ConvertError::InvalidText {
			text: text.to_string(),
			to,
		})
	}

	pub fn parse_decimal(&self, text: &str) -> Result<Decimal, ConvertError> {
		parse_decimal(&self.normalize(text)).map_err(|_| ConvertError::InvalidText {
			text: text.to_string(),
			to: Type::Decimal,
		})
	}

	pub fn parse_bool(&self, text: &str) -> Result<bool, ConvertError> {
		let text = text.trim();
		if self.true_literals.iter().any(|l| l.eq_ignore_ascii_case(text)) {
			return Ok(true);
		}
		if self.false_literals.iter().any(|l| l.eq_ignore_ascii_case(text)) {
			return Ok(false);
		}
		Err(ConvertError::InvalidText {
			text: text.to_string(),
			to: Type::Boolean,
		})
	}

	/// Renders a value as text using this context.
	pub fn format(&self, value: &Value) -> String {
		match value {
			Value::Float4(_) | Value::Float8(_) | Value::Decimal(_) if self.decimal_separator != '.' => {
				value.to_string().replace('.', &self.decimal_separator.to_string())
			}
			Value::Boolean(true) => self.true_literals.first().cloned().unwrap_or_else(|| value.to_string()),
			Value::Boolean(false) => self.false_literals.first().cloned().unwrap_or_else(|| value.to_string()),
			_ => value.to_string(),
		}
	}
}

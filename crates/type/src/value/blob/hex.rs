// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Blob;
use crate::{ConvertError, Type};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

fn nibble(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

impl Blob {
	/// Parses a hex string, with or without a `0x` prefix.
	pub fn from_hex(text: &str) -> Result<Self, ConvertError> {
		let invalid = || ConvertError::InvalidText {
			text: text.to_string(),
			to: Type::Blob,
		};

		let clean = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text).as_bytes();

		if clean.len() % 2 != 0 {
			return Err(invalid());
		}

		let mut bytes = Vec::with_capacity(clean.len() / 2);
		for pair in clean.chunks_exact(2) {
			let hi = nibble(pair[0]).ok_or_else(invalid)?;
			let lo = nibble(pair[1]).ok_or_else(invalid)?;
			bytes.push(hi << 4 | lo);
		}

		Ok(Blob::new(bytes))
	}

	pub fn to_hex(&self) -> String {
		let mut out = String::with_capacity(2 + self.len() * 2);
		out.push_str("0x");
		for byte in self.as_bytes() {
			out.push(DIGITS[(byte >> 4) as usize] as char);
			out.push(DIGITS[(byte & 0x0f) as usize] as char);
		}
		out
	}
}

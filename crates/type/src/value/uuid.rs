// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// A globally unique identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Uuid(pub uuid::Uuid);

impl Uuid {
	pub fn generate() -> Self {
		Self(uuid::Uuid::new_v4())
	}

	pub fn nil() -> Self {
		Self(uuid::Uuid::nil())
	}

	pub fn parse(text: &str) -> Option<Self> {
		uuid::Uuid::parse_str(text.trim()).ok().map(Self)
	}

	pub fn from_slice(bytes: &[u8]) -> Option<Self> {
		uuid::Uuid::from_slice(bytes).ok().map(Self)
	}
}

impl Default for Uuid {
	fn default() -> Self {
		Self::nil()
	}
}

impl Deref for Uuid {
	type Target = uuid::Uuid;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<uuid::Uuid> for Uuid {
	fn from(value: uuid::Uuid) -> Self {
		Self(value)
	}
}

impl From<Uuid> for uuid::Uuid {
	fn from(value: Uuid) -> Self {
		value.0
	}
}

impl Display for Uuid {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_and_display() {
		let text = "67e55044-10b1-426f-9247-bb680e5fe0c8";
		let uuid = Uuid::parse(text).unwrap();
		assert_eq!(uuid.to_string(), text);
	}

	#[test]
	fn test_parse_invalid() {
		assert!(Uuid::parse("not-a-uuid").is_none());
	}

	#[test]
	fn test_from_slice() {
		let uuid = Uuid::generate();
		assert_eq!(Uuid::from_slice(uuid.as_bytes()), Some(uuid));
		assert!(Uuid::from_slice(&[1, 2, 3]).is_none());
	}
}

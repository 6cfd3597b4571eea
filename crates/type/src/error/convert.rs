// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic};
use crate::Type;

/// Failures raised while coercing a raw value into a requested type.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
	#[error("unsupported conversion from {from} to {to}")]
	Unsupported {
		from: Type,
		to: Type,
	},

	#[error("value {value} is out of range for {to}")]
	OutOfRange {
		value: String,
		to: Type,
	},

	#[error("undefined value cannot be converted to {to}")]
	Undefined {
		to: Type,
	},

	#[error("'{text}' is not a valid {to}")]
	InvalidText {
		text: String,
		to: Type,
	},

	#[error("no member of {enumeration} matches {value}")]
	NoSuchMember {
		enumeration: &'static str,
		value: String,
	},
}

impl IntoDiagnostic for ConvertError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			ConvertError::Unsupported {
				from,
				to,
			} => Diagnostic {
				code: "CONVERT_001".to_string(),
				message,
				column: None,
				label: Some(format!("cannot convert {} to {}", from, to)),
				help: Some("ensure the source and target types are compatible".to_string()),
				notes: vec![
					"supported conversions include: numeric to numeric, text to numeric, text to temporal, boolean to numeric"
						.to_string(),
				],
				cause: None,
			},

			ConvertError::OutOfRange {
				to,
				..
			} => Diagnostic {
				code: "CONVERT_002".to_string(),
				message,
				column: None,
				label: Some(format!("does not fit into {}", to)),
				help: Some("read the field as a wider type".to_string()),
				notes: vec![],
				cause: None,
			},

			ConvertError::Undefined {
				to,
			} => Diagnostic {
				code: "CONVERT_003".to_string(),
				message,
				column: None,
				label: Some(format!("{} cannot represent an undefined value", to)),
				help: Some("convert into an Option to accept undefined values".to_string()),
				notes: vec![],
				cause: None,
			},

			ConvertError::InvalidText {
				to,
				..
			} => Diagnostic {
				code: "CONVERT_004".to_string(),
				message,
				column: None,
				label: Some(format!("failed to parse {}", to)),
				help: Some("check the format context used for the conversion".to_string()),
				notes: vec![],
				cause: None,
			},

			ConvertError::NoSuchMember {
				..
			} => Diagnostic {
				code: "CONVERT_005".to_string(),
				message,
				column: None,
				label: None,
				help: Some("member names are matched case-insensitively; numbers match discriminants"
					.to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

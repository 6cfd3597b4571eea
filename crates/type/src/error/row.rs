// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::{Diagnostic, IntoDiagnostic};
use crate::Type;

/// Failures raised by row sources while resolving or reading fields.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RowError {
	#[error("field '{name}' not found")]
	FieldNotFound {
		name: String,
	},

	#[error("position {position} is out of range for a row with {field_count} fields")]
	PositionOutOfRange {
		position: usize,
		field_count: usize,
	},

	#[error("field '{name}' at position {position} is undefined")]
	Undefined {
		position: usize,
		name: String,
	},

	#[error("field '{name}' at position {position} holds {actual}, not {expected}")]
	TypeMismatch {
		position: usize,
		name: String,
		expected: Type,
		actual: Type,
	},

	#[error("{operation} is not supported for field '{name}' of type {ty}")]
	Unsupported {
		operation: &'static str,
		name: String,
		ty: Type,
	},

	#[error("cannot copy {length} elements at offset {buffer_offset} into a buffer of {capacity}")]
	BufferOutOfRange {
		buffer_offset: usize,
		length: usize,
		capacity: usize,
	},

	#[error("cursor is closed")]
	CursorClosed,

	#[error("cursor is not positioned on a record")]
	NoCurrentRecord,
}

impl IntoDiagnostic for RowError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			RowError::FieldNotFound {
				name,
			} => Diagnostic {
				code: "ROW_001".to_string(),
				message,
				column: Some(name),
				label: Some("unknown field name".to_string()),
				help: Some("check the spelling of the field name; names are matched exactly".to_string()),
				notes: vec!["when several fields share a name, the first one wins".to_string()],
				cause: None,
			},

			RowError::PositionOutOfRange {
				position,
				field_count,
			} => Diagnostic {
				code: "ROW_002".to_string(),
				message,
				column: None,
				label: Some(format!("position {} requested", position)),
				help: Some(if field_count == 0 {
					"the row has no fields".to_string()
				} else {
					format!("valid positions are 0..={}", field_count - 1)
				}),
				notes: vec![],
				cause: None,
			},

			RowError::Undefined {
				name,
				..
			} => Diagnostic {
				code: "ROW_003".to_string(),
				message,
				column: Some(name),
				label: Some("value is undefined".to_string()),
				help: Some("use a nullable accessor to substitute a default for undefined values".to_string()),
				notes: vec![],
				cause: None,
			},

			RowError::TypeMismatch {
				name,
				expected,
				actual,
				..
			} => Diagnostic {
				code: "ROW_004".to_string(),
				message,
				column: Some(name),
				label: Some(format!("expected {}", expected)),
				help: Some(format!("use a converting accessor to read a {} field as {}", actual, expected)),
				notes: vec![],
				cause: None,
			},

			RowError::Unsupported {
				name,
				..
			} => Diagnostic {
				code: "ROW_005".to_string(),
				message,
				column: Some(name),
				label: None,
				help: None,
				notes: vec![],
				cause: None,
			},

			RowError::BufferOutOfRange {
				..
			} => Diagnostic {
				code: "ROW_008".to_string(),
				message,
				column: None,
				label: Some("destination buffer too small".to_string()),
				help: Some("the buffer offset must lie within the destination buffer".to_string()),
				notes: vec![],
				cause: None,
			},

			RowError::CursorClosed => Diagnostic {
				code: "ROW_006".to_string(),
				message,
				column: None,
				label: None,
				help: Some("fields cannot be read after the cursor has been closed".to_string()),
				notes: vec![],
				cause: None,
			},

			RowError::NoCurrentRecord => Diagnostic {
				code: "ROW_007".to_string(),
				message,
				column: None,
				label: None,
				help: Some("advance the cursor before reading fields".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

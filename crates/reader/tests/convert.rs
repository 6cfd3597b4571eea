// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod common;

use common::{StubRow, init_tracing};
use rowkit_reader::{Decimal, FormatContext, RowReader, Type, Value, enumeration};

enumeration! {
	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	pub enum Status {
		Pending = 0,
		Active = 1,
		Closed = 2,
	}
}

fn row() -> StubRow {
	StubRow::new(vec![
		("Small", Type::Uint1, Value::Uint1(7)),
		("Absent", Type::Int4, Value::Undefined),
		("Big", Type::Int8, Value::Int8(i64::MAX)),
		("Flag", Type::Boolean, Value::Boolean(true)),
		("Letter", Type::Char, Value::Char('A')),
		("Text", Type::Utf8, Value::utf8(" 1 234,50 ")),
		("Yes", Type::Utf8, Value::utf8("ja")),
		("StatusName", Type::Utf8, Value::utf8("ACTIVE")),
		("StatusCode", Type::Int2, Value::Int2(2)),
	])
}

#[test]
fn test_widening_is_lossless() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.convert::<i32>("Small").unwrap(), 7);
	assert_eq!(reader.convert::<i64>("Small").unwrap(), 7);
	assert_eq!(reader.convert::<u16>("Small").unwrap(), 7);
	assert_eq!(reader.convert::<Decimal>("Small").unwrap(), Decimal::from(7i64));
	assert_eq!(reader.inner().typed_calls(), 0);
}

#[test]
fn test_narrowing_is_checked() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.convert::<i32>("Big").unwrap_err().code(), "CONVERT_002");
	assert_eq!(reader.convert::<u64>("Big").unwrap(), i64::MAX as u64);
}

#[test]
fn test_absent_into_non_nullable_fails() {
	init_tracing();
	let reader = RowReader::new(row());

	let err = reader.convert::<i32>("Absent").unwrap_err();
	assert_eq!(err.code(), "CONVERT_003");
	assert_eq!(err.column.as_deref(), Some("Absent"));
	assert_eq!(reader.convert::<String>("Absent").unwrap_err().code(), "CONVERT_003");

	assert_eq!(reader.convert::<Option<i32>>("Absent").unwrap(), None);
	assert_eq!(reader.convert::<Option<String>>("Absent").unwrap(), None);
	assert_eq!(reader.convert::<Value>("Absent").unwrap(), Value::Undefined);
}

#[test]
fn test_bool_and_char_to_number() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.convert::<i32>("Flag").unwrap(), 1);
	assert_eq!(reader.convert::<u32>("Letter").unwrap(), 65);
}

#[test]
fn test_culture_sensitive_text() {
	init_tracing();
	let french = FormatContext::new(',', Some(' ')).with_boolean_literals(vec!["ja".to_string()], vec!["nein".to_string()]);
	let reader = RowReader::with_format(row(), french);

	assert_eq!(reader.convert::<f64>("Text").unwrap(), 1234.5);
	assert!(reader.convert::<bool>("Yes").unwrap());
	assert_eq!(reader.convert::<String>("Big").unwrap(), i64::MAX.to_string());

	let reader = RowReader::new(reader.into_inner());
	assert_eq!(reader.convert::<f64>("Text").unwrap_err().code(), "CONVERT_004");
	assert_eq!(reader.convert::<bool>("Yes").unwrap_err().code(), "CONVERT_004");
}

#[test]
fn test_enumeration() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.enumeration::<Status>("StatusName").unwrap(), Status::Active);
	assert_eq!(reader.enumeration::<Status>("StatusCode").unwrap(), Status::Closed);
	assert_eq!(reader.enumeration::<Status>(1usize).unwrap_err().code(), "CONVERT_003");

	let err = reader.enumeration::<Status>("Small").unwrap_err();
	assert_eq!(err.code(), "CONVERT_005");
	assert_eq!(err.column.as_deref(), Some("Small"));
}

#[test]
fn test_enumeration_with_custom_mapping() {
	init_tracing();
	let reader = RowReader::new(row());

	let status = reader
		.enumeration_with("Flag", |value| {
			Ok(match value {
				Value::Boolean(true) => Status::Active,
				_ => Status::Pending,
			})
		})
		.unwrap();
	assert_eq!(status, Status::Active);
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod common;

use common::{StubRow, init_tracing};
use rowkit_reader::{Blob, DateTime, Decimal, RowReader, Type, Uuid, Value};

fn row() -> StubRow {
	StubRow::new(vec![
		("Id", Type::Int4, Value::Int4(42)),
		("Name", Type::Utf8, Value::Undefined),
		("Active", Type::Boolean, Value::Boolean(true)),
		("Score", Type::Float8, Value::Float8(9.5)),
		("Amount", Type::Decimal, Value::decimal(Decimal::from(1250i64))),
		("Key", Type::Uuid, Value::Uuid(Uuid::nil())),
		("Data", Type::Blob, Value::blob(vec![0xcau8, 0xfe])),
		("Initial", Type::Char, Value::Char('R')),
		("Missing", Type::Int8, Value::Undefined),
	])
}

#[test]
fn test_nullable_never_invokes_typed_getter_on_absent() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.get_or::<String>("Name", Some("none".to_string())).unwrap(), Some("none".to_string()));
	assert_eq!(reader.get_opt::<i64>("Missing").unwrap(), None);
	assert_eq!(reader.get_opt::<i64>(8usize).unwrap(), None);
	assert_eq!(reader.inner().typed_calls(), 0);
}

#[test]
fn test_present_values_agree_across_modes() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.get::<i32>("Id").unwrap(), 42);
	assert_eq!(reader.get_opt::<i32>("Id").unwrap(), Some(42));
	assert_eq!(reader.try_get::<i32>("Id"), Some(42));

	assert!(reader.get::<bool>("Active").unwrap());
	assert_eq!(reader.get::<f64>("Score").unwrap(), 9.5);
	assert_eq!(reader.get::<Decimal>("Amount").unwrap(), Decimal::from(1250i64));
	assert_eq!(reader.get::<Uuid>("Key").unwrap(), Uuid::nil());
	assert_eq!(reader.get::<Blob>("Data").unwrap(), Blob::from(vec![0xcau8, 0xfe]));
	assert_eq!(reader.get::<char>("Initial").unwrap(), 'R');
	assert_eq!(reader.inner().typed_calls(), 8);
}

#[test]
fn test_try_get_never_fails() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.try_get::<String>("Name"), None);
	assert_eq!(reader.try_get::<Value>("Missing"), None);
	assert_eq!(reader.try_get::<i64>("Id"), None);
	assert_eq!(reader.try_get::<DateTime>("Id"), None);
	assert_eq!(reader.try_get::<i32>("Unknown"), None);
	assert_eq!(reader.try_get::<i32>(100usize), None);
	assert_eq!(reader.inner().typed_calls(), 0);
}

#[test]
fn test_name_and_position_are_equivalent() {
	init_tracing();
	let reader = RowReader::new(row());

	for (position, name) in ["Id", "Name", "Active", "Score"].iter().enumerate() {
		assert_eq!(reader.position_of(name).unwrap(), position);
		assert_eq!(reader.try_get::<Value>(*name), reader.try_get::<Value>(position));
		assert_eq!(reader.convert::<Value>(*name).unwrap(), reader.convert::<Value>(position).unwrap());
		assert_eq!(reader.is_undefined(*name).unwrap(), reader.is_undefined(position).unwrap());
	}

	let name = String::from("Id");
	assert_eq!(reader.get::<i32>(&name).unwrap(), reader.get::<i32>(0usize).unwrap());
	assert_eq!(reader.get::<i32>(name).unwrap(), 42);
}

#[test]
fn test_unknown_name_fails_with_lookup_error() {
	init_tracing();
	let reader = RowReader::new(row());

	assert_eq!(reader.get::<i32>("Unknown").unwrap_err().code(), "ROW_001");
	assert_eq!(reader.get_opt::<i32>("Unknown").unwrap_err().code(), "ROW_001");
	assert_eq!(reader.convert::<i32>("Unknown").unwrap_err().code(), "ROW_001");
	assert_eq!(reader.convert::<Option<i32>>("Unknown").unwrap_err().code(), "ROW_001");
	assert_eq!(reader.field_type("Unknown").unwrap_err().code(), "ROW_001");

	assert_eq!(reader.get::<i32>(9usize).unwrap_err().code(), "ROW_002");
	assert_eq!(reader.convert::<i32>(9usize).unwrap_err().code(), "ROW_002");
}

#[test]
fn test_direct_get_surfaces_row_errors() {
	init_tracing();
	let reader = RowReader::new(row());

	let err = reader.get::<i64>("Id").unwrap_err();
	assert_eq!(err.code(), "ROW_004");
	assert!(err.to_string().starts_with("ROW_004: field 'Id' at position 0 holds Int4, not Int8"));
}

#[test]
fn test_streaming_reads_pass_through() {
	init_tracing();
	let reader = RowReader::new(row());

	let mut bytes = [0u8; 4];
	assert_eq!(reader.read_bytes("Data", 0, &mut bytes, 1, 4).unwrap(), 2);
	assert_eq!(bytes, [0, 0xca, 0xfe, 0]);
	assert_eq!(reader.read_bytes("Data", 2, &mut bytes, 0, 4).unwrap(), 0);

	let mut chars = ['-'; 2];
	assert_eq!(reader.read_chars("Initial", 0, &mut chars, 0, 2).unwrap(), 1);
	assert_eq!(chars, ['R', '-']);

	assert_eq!(reader.read_chars("Id", 0, &mut chars, 0, 2).unwrap_err().code(), "ROW_005");
	assert_eq!(reader.nested("Id").err().map(|err| err.code().to_string()).as_deref(), Some("ROW_005"));
}

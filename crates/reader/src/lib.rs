// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Typed access to the fields of an external row source.
//!
//! A data source only has to implement [`Row`] (and [`Cursor`] when it can
//! iterate). [`RowReader`] wraps it and adds name-or-position resolution,
//! the nullable, try and converting access modes, enumeration mapping and
//! bulk capture on top.

pub mod cursor;
pub mod field;
pub mod frame;
pub mod reader;
pub mod row;

pub use cursor::Cursor;
pub use field::Field;
pub use frame::{Frame, FrameColumn, FrameCursor, FrameRow};
pub use reader::RowReader;
pub use row::Row;
pub use rowkit_type::{
	Blob, Convert, ConvertError, DateTime, Decimal, Diagnostic, Enumeration, Error, FormatContext, FromValue,
	GetType, IntoValue, Result, RowError, Type, Uuid, Value, enumeration,
};

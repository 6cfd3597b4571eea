// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod error;
pub mod value;

pub use error::{ConvertError, Diagnostic, Error, IntoDiagnostic, RowError};
pub use value::{
	Blob, Convert, DateTime, Decimal, Enumeration, FormatContext, FromValue, GetType, IntoValue, Type, Uuid, Value,
	convert_value,
};

pub type Result<T> = std::result::Result<T, Error>;

// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

const SECONDS_PER_DAY: i64 = 86_400;
const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A date and time in UTC with nanosecond precision.
///
/// Internally stored as seconds since the Unix epoch (1970-01-01T00:00:00Z)
/// plus a nanosecond offset into that second.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
	seconds: i64,
	nanos: u32,
}

// Calendar utilities
impl DateTime {
	#[inline]
	fn is_leap_year(year: i32) -> bool {
		(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
	}

	#[inline]
	fn days_in_month(year: i32, month: u32) -> u32 {
		match month {
			1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
			4 | 6 | 9 | 11 => 30,
			2 => {
				if Self::is_leap_year(year) {
					29
				} else {
					28
				}
			}
			_ => 0,
		}
	}

	/// Convert year/month/day to days since Unix epoch
	fn ymd_to_days_since_epoch(year: i32, month: u32, day: u32) -> Option<i64> {
		if month < 1 || month > 12 || day < 1 || day > Self::days_in_month(year, month) {
			return None;
		}

		// Howard Hinnant's days_from_civil, with March as month 0
		let (y, m) = if month <= 2 {
			(year as i64 - 1, month as i64 + 9)
		} else {
			(year as i64, month as i64 - 3)
		};

		let era = if y >= 0 {
			y
		} else {
			y - 399
		} / 400;
		let yoe = y - era * 400; // [0, 399]
		let doy = (153 * m + 2) / 5 + day as i64 - 1; // [0, 365]
		let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

		Some(era * 146097 + doe - 719468)
	}

	/// Convert days since Unix epoch to year/month/day
	fn days_since_epoch_to_ymd(days: i64) -> (i64, u32, u32) {
		let days_since_ce = days + 719468;

		let era = if days_since_ce >= 0 {
			days_since_ce
		} else {
			days_since_ce - 146096
		} / 146097;
		let doe = days_since_ce - era * 146097; // [0, 146096]
		let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
		let y = yoe + era * 400;
		let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
		let mp = (5 * doy + 2) / 153; // [0, 11]
		let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
		let m = if mp < 10 {
			mp + 3
		} else {
			mp - 9
		}; // [1, 12]
		let year = if m <= 2 {
			y + 1
		} else {
			y
		};

		(year, m as u32, d as u32)
	}
}

impl DateTime {
	pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32, nano: u32) -> Option<Self> {
		if hour > 23 || minute > 59 || second > 59 || nano >= NANOS_PER_SECOND {
			return None;
		}
		let days = Self::ymd_to_days_since_epoch(year, month, day)?;
		let seconds = days * SECONDS_PER_DAY + hour as i64 * 3600 + minute as i64 * 60 + second as i64;
		Some(Self {
			seconds,
			nanos: nano,
		})
	}

	/// Midnight of the given calendar date.
	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		Self::new(year, month, day, 0, 0, 0, 0)
	}

	/// Fails for nanoseconds past one second and for instants whose year
	/// does not fit into an `i32`.
	pub fn from_timestamp(seconds: i64, nanos: u32) -> Option<Self> {
		if nanos >= NANOS_PER_SECOND {
			return None;
		}
		let result = Self {
			seconds,
			nanos,
		};
		i32::try_from(Self::days_since_epoch_to_ymd(result.days()).0).ok()?;
		Some(result)
	}

	pub fn timestamp(&self) -> i64 {
		self.seconds
	}

	pub fn timestamp_nanos(&self) -> u32 {
		self.nanos
	}

	fn days(&self) -> i64 {
		self.seconds.div_euclid(SECONDS_PER_DAY)
	}

	fn seconds_of_day(&self) -> u32 {
		self.seconds.rem_euclid(SECONDS_PER_DAY) as u32
	}

	pub fn year(&self) -> i32 {
		// constructors keep the year within i32
		Self::days_since_epoch_to_ymd(self.days()).0 as i32
	}

	pub fn month(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days()).1
	}

	pub fn day(&self) -> u32 {
		Self::days_since_epoch_to_ymd(self.days()).2
	}

	pub fn hour(&self) -> u32 {
		self.seconds_of_day() / 3600
	}

	pub fn minute(&self) -> u32 {
		self.seconds_of_day() % 3600 / 60
	}

	pub fn second(&self) -> u32 {
		self.seconds_of_day() % 60
	}

	pub fn nanosecond(&self) -> u32 {
		self.nanos
	}

	/// Parses `YYYY-MM-DD`, `YYYY-MM-DD[T ]HH:MM[:SS[.fffffffff]]` with an
	/// optional trailing `Z`.
	pub fn parse(text: &str) -> Option<Self> {
		let text = text.trim();
		let text = text.strip_suffix('Z').or_else(|| text.strip_suffix('z')).unwrap_or(text);

		let (date, time) = match text.find(['T', 't', ' ']) {
			Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
			None => (text, None),
		};

		let (negative, date) = match date.strip_prefix('-') {
			Some(rest) => (true, rest),
			None => (false, date),
		};
		let mut parts = date.split('-');
		let year: i64 = parts.next()?.parse().ok()?;
		let month: u32 = parts.next()?.parse().ok()?;
		let day: u32 = parts.next()?.parse().ok()?;
		if parts.next().is_some() {
			return None;
		}
		let year = i32::try_from(if negative {
			-year
		} else {
			year
		})
		.ok()?;

		let Some(time) = time else {
			return Self::from_ymd(year, month, day);
		};

		let (clock, fraction) = match time.split_once('.') {
			Some((clock, fraction)) => (clock, Some(fraction)),
			None => (time, None),
		};

		let mut parts = clock.split(':');
		let hour: u32 = parts.next()?.parse().ok()?;
		let minute: u32 = parts.next()?.parse().ok()?;
		let second: u32 = match parts.next() {
			Some(s) => s.parse().ok()?,
			None => 0,
		};
		if parts.next().is_some() {
			return None;
		}

		let nano = match fraction {
			Some(f) if !f.is_empty() && f.len() <= 9 && f.bytes().all(|b| b.is_ascii_digit()) => {
				let digits: u32 = f.parse().ok()?;
				digits * 10u32.pow(9 - f.len() as u32)
			}
			Some(_) => return None,
			None => 0,
		};

		Self::new(year, month, day, hour, minute, second, nano)
	}
}

impl Display for DateTime {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = Self::days_since_epoch_to_ymd(self.days());
		if year < 0 {
			write!(f, "-{:04}-{:02}-{:02}", year.unsigned_abs(), month, day)?;
		} else {
			write!(f, "{:04}-{:02}-{:02}", year, month, day)?;
		}
		write!(f, "T{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
		if self.nanos != 0 {
			write!(f, ".{:09}", self.nanos)?;
		}
		f.write_str("Z")
	}
}

impl Serialize for DateTime {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_string())
	}
}

struct DateTimeVisitor;

impl<'de> Visitor<'de> for DateTimeVisitor {
	type Value = DateTime;

	fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
		formatter.write_str("a datetime in ISO 8601 format (YYYY-MM-DDTHH:MM:SSZ)")
	}

	fn visit_str<E>(self, value: &str) -> Result<DateTime, E>
	where
		E: de::Error,
	{
		DateTime::parse(value).ok_or_else(|| E::custom(format!("invalid datetime: {}", value)))
	}
}

impl<'de> Deserialize<'de> for DateTime {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(DateTimeVisitor)
	}
}

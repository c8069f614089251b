use crate::consts::{
    AD_DAYS_IN_MONTH, ALT_DATE_SEPARATOR, CENTURY_CYCLE, DATE_SEPARATOR, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_BS_DAY, MAX_MONTH, MAX_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Error produced when constructing or parsing a date value.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "invalid year {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "invalid month {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// A Gregorian (AD) calendar date.
///
/// Date-only by construction: there is no time-of-day or timezone component,
/// so callers converting from a timezone-aware value must resolve it to a
/// single UTC calendar day before building an `AdDate`. This is the boundary
/// contract that keeps day-offset arithmetic from drifting by ±1 near
/// midnight in non-UTC zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct AdDate {
    year: u16,
    month: u8,
    day: u8,
}

impl AdDate {
    /// Creates an AD date, validating the day against the real Gregorian
    /// month length (leap-year aware).
    ///
    /// # Errors
    /// Returns a `ParseError` naming the offending component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_ad_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Used only for compile-time constants whose validity is established by
    /// the calendar's own tests.
    pub(crate) const fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Julian day number of this date. All day-offset arithmetic in the
    /// conversion engine runs on this integer form.
    pub(crate) fn jdn(self) -> i64 {
        let y = i64::from(self.year);
        let m = i64::from(self.month);
        let d = i64::from(self.day);
        let a = (14 - m) / 12;
        let yy = y + 4800 - a;
        let mm = m + 12 * a - 3;
        d + (153 * mm + 2) / 5 + 365 * yy + yy / 4 - yy / 100 + yy / 400 - 32045
    }

    /// Inverse of [`AdDate::jdn`]. Callers must keep `jdn` within the years
    /// representable by `u16`, which holds for every offset the calendar
    /// table can produce.
    pub(crate) fn from_jdn(jdn: i64) -> Self {
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        debug_assert!(year > 0 && year <= i64::from(MAX_YEAR));
        Self {
            year: year as u16,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Day of the week, `0` = Sunday through `6` = Saturday.
    pub fn day_of_week(self) -> u8 {
        ((self.jdn() + 1) % 7) as u8
    }
}

/// A Bikram Sambat (BS) calendar date.
///
/// The constructor performs range checks only; whether the day actually
/// exists in that BS month is known to the calendar table alone, and is
/// established by [`crate::Calendar::to_ad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct BsDate {
    year: u16,
    month: u8,
    day: u8,
}

impl BsDate {
    /// Creates a BS date from its components.
    ///
    /// # Errors
    /// Returns a `ParseError` if the year is 0 or beyond `MAX_YEAR`, the
    /// month is outside 1-12, or the day is outside 1-32.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year == 0 || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day == 0 || day > MAX_BS_DAY {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Used by the conversion engine for dates it has already proven valid.
    pub(crate) const fn from_ymd_unchecked(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

// --- helpers for Gregorian month lengths ---

pub(crate) const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub(crate) const fn days_in_ad_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        AD_DAYS_IN_MONTH[month as usize]
    }
}

// --- parsing ---

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Splits `YYYY-MM-DD` (or `YYYY/MM/DD`) into numeric components. Both
/// separators are accepted on input; output always renders with '-'.
fn split_ymd(s: &str) -> Result<(u16, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed
        .split([DATE_SEPARATOR, ALT_DATE_SEPARATOR])
        .map(str::trim)
        .collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }

    let year = parse_u16(parts[0])?;
    let month = parse_u8(parts[1])?;
    let day = parse_u8(parts[2])?;
    Ok((year, month, day))
}

impl FromStr for AdDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for BsDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = split_ymd(s)?;
        Self::new(year, month, day)
    }
}

// --- serde: both date kinds travel as their canonical string form ---

impl Serialize for AdDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AdDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for BsDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BsDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

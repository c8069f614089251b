//! Rendering of date values into display strings.
//!
//! Formatting is purely presentational: numeral localization maps digits in
//! an already-formatted string and never participates in conversion
//! arithmetic.

use crate::consts::{
    BS_MONTH_NAMES_EN, BS_MONTH_NAMES_NP, NEPALI_DIGITS, WEEKDAY_NAMES_EN, WEEKDAY_NAMES_NP,
};
use crate::types::{AdDate, BsDate, ParseError};
use std::fmt;
use std::str::FromStr;

/// The fixed set of supported date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    #[default]
    YearMonthDay,
    /// `DD-MM-YYYY`
    DayMonthYear,
    /// `DD/MM/YYYY`
    DayMonthYearSlash,
    /// `YYYY/MM/DD`
    YearMonthDaySlash,
}

impl DateFormat {
    /// The literal template string this layout corresponds to.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::YearMonthDay => "YYYY-MM-DD",
            Self::DayMonthYear => "DD-MM-YYYY",
            Self::DayMonthYearSlash => "DD/MM/YYYY",
            Self::YearMonthDaySlash => "YYYY/MM/DD",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl FromStr for DateFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "YYYY-MM-DD" => Ok(Self::YearMonthDay),
            "DD-MM-YYYY" => Ok(Self::DayMonthYear),
            "DD/MM/YYYY" => Ok(Self::DayMonthYearSlash),
            "YYYY/MM/DD" => Ok(Self::YearMonthDaySlash),
            other => Err(ParseError::InvalidFormat(other.to_owned())),
        }
    }
}

/// Language for month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Nepali,
}

fn render(year: u16, month: u8, day: u8, format: DateFormat) -> String {
    match format {
        DateFormat::YearMonthDay => format!("{year:04}-{month:02}-{day:02}"),
        DateFormat::DayMonthYear => format!("{day:02}-{month:02}-{year:04}"),
        DateFormat::DayMonthYearSlash => format!("{day:02}/{month:02}/{year:04}"),
        DateFormat::YearMonthDaySlash => format!("{year:04}/{month:02}/{day:02}"),
    }
}

/// Formats a BS date with the given layout, always in ASCII digits.
/// Localize afterwards with [`to_nepali_numerals`] if needed.
#[must_use]
pub fn format_bs(date: BsDate, format: DateFormat) -> String {
    render(date.year(), date.month(), date.day(), format)
}

/// Formats an AD date with the given layout.
#[must_use]
pub fn format_ad(date: AdDate, format: DateFormat) -> String {
    render(date.year(), date.month(), date.day(), format)
}

/// Replaces ASCII digits 0-9 with Devanagari digits ०-९. Other characters
/// pass through untouched.
#[must_use]
pub fn to_nepali_numerals(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NEPALI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// Replaces Devanagari digits ०-९ with ASCII digits. Inverse of
/// [`to_nepali_numerals`].
#[must_use]
pub fn to_ascii_numerals(s: &str) -> String {
    s.chars()
        .map(|c| {
            NEPALI_DIGITS
                .iter()
                .position(|&np| np == c)
                .and_then(|i| char::from_digit(i as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Name of a BS month (1 = Baisakh through 12 = Chaitra), or `None` for a
/// month outside 1-12.
#[must_use]
pub fn month_name(month: u8, language: Language) -> Option<&'static str> {
    let names = match language {
        Language::English => &BS_MONTH_NAMES_EN,
        Language::Nepali => &BS_MONTH_NAMES_NP,
    };
    names.get(usize::from(month.checked_sub(1)?)).copied()
}

/// Name of a weekday as returned by [`AdDate::day_of_week`] (0 = Sunday
/// through 6 = Saturday), or `None` for an index outside 0-6.
#[must_use]
pub fn weekday_name(weekday: u8, language: Language) -> Option<&'static str> {
    let names = match language {
        Language::English => &WEEKDAY_NAMES_EN,
        Language::Nepali => &WEEKDAY_NAMES_NP,
    };
    names.get(usize::from(weekday)).copied()
}

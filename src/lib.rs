//! Conversion between the Gregorian (AD) calendar and the Bikram Sambat
//! (BS) lunisolar calendar used in Nepal.
//!
//! BS month lengths vary year to year and follow no fixed rule, so the
//! conversion is table-driven: a per-year table of month lengths plus one
//! epoch anchor (1970-01-01 BS == 1913-04-13 AD) drive exact day-offset
//! arithmetic in both directions. The supported range is BS 1970 through
//! BS 2099 (AD 1913-04-13 through 2043-04-12); dates outside it are
//! rejected with a typed error, never silently substituted.
//!
//! # Examples
//!
//! Converting in both directions:
//!
//! ```
//! use bikram_sambat::{ad_to_bs, bs_to_ad, AdDate, BsDate};
//!
//! let ad = AdDate::new(2024, 1, 28).unwrap();
//! let bs = ad_to_bs(ad).unwrap();
//! assert_eq!("2080-10-15", bs.to_string());
//! assert_eq!(ad, bs_to_ad(bs).unwrap());
//! ```
//!
//! Parsing, formatting, and numeral localization:
//!
//! ```
//! use bikram_sambat::{format_bs, to_nepali_numerals, BsDate, DateFormat};
//!
//! let bs: BsDate = "2080-10-15".parse().unwrap();
//! assert_eq!("15/10/2080", format_bs(bs, DateFormat::DayMonthYearSlash));
//! assert_eq!("२०८०-१०-१५", to_nepali_numerals(&bs.to_string()));
//! ```
//!
//! A [`Calendar`] carries the table and anchor explicitly, so alternate
//! reference data (for example a short synthetic table in tests) can be
//! injected without touching global state.

mod calendar;
mod consts;
mod data;
mod format;
mod prelude;
mod types;

pub use calendar::{Calendar, ConvertError};
pub use consts::{
    ALT_DATE_SEPARATOR, DATE_SEPARATOR, EPOCH_BS_YEAR, MAX_BS_DAY, MAX_MONTH, MAX_YEAR, MIN_DAY,
};
pub use format::{
    format_ad, format_bs, month_name, to_ascii_numerals, to_nepali_numerals, weekday_name,
    DateFormat, Language,
};
pub use types::{AdDate, BsDate, ParseError};

/// Converts an AD date to BS using the canonical calendar.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` for dates outside the supported span.
pub fn ad_to_bs(date: AdDate) -> Result<BsDate, ConvertError> {
    Calendar::bikram_sambat().to_bs(date)
}

/// Converts a BS date to AD using the canonical calendar.
///
/// # Errors
/// Returns `ConvertError::OutOfRange` for years outside the table and
/// `ConvertError::InvalidDay` for a day the BS month does not have.
pub fn bs_to_ad(date: BsDate) -> Result<AdDate, ConvertError> {
    Calendar::bikram_sambat().to_ad(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_round_trip() {
        let ad = AdDate::new(2024, 6, 15).unwrap();
        let bs = ad_to_bs(ad).unwrap();
        assert_eq!(bs, BsDate::new(2081, 3, 2).unwrap());
        assert_eq!(bs_to_ad(bs).unwrap(), ad);
    }

    #[test]
    fn test_convenience_matches_canonical_calendar() {
        let cal = Calendar::bikram_sambat();
        let ad = AdDate::new(2024, 1, 15).unwrap();
        assert_eq!(ad_to_bs(ad).unwrap(), cal.to_bs(ad).unwrap());
        assert_eq!(ad_to_bs(ad).unwrap(), BsDate::new(2080, 10, 2).unwrap());
    }

    #[test]
    fn test_convenience_errors_surface() {
        let before_epoch = AdDate::new(1913, 4, 12).unwrap();
        assert!(matches!(
            ad_to_bs(before_epoch),
            Err(ConvertError::OutOfRange { .. })
        ));
        let bad_day = BsDate::new(2080, 10, 32).unwrap();
        assert!(matches!(bs_to_ad(bad_day), Err(ConvertError::InvalidDay { .. })));
    }

    #[test]
    fn test_parsed_date_converts() {
        let bs: BsDate = "2080/10/15".parse().unwrap();
        let ad = bs_to_ad(bs).unwrap();
        assert_eq!(ad.to_string(), "2024-01-28");
        assert_eq!(
            weekday_name(ad.day_of_week(), Language::English),
            Some("Sunday")
        );
        assert_eq!(month_name(bs.month(), Language::English), Some("Magh"));
    }
}

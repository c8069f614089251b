//! The table-driven conversion engine between AD and BS dates.
//!
//! A [`Calendar`] bundles the two pieces of ground truth: the per-year
//! month-length table and the epoch anchor (the AD date of the table's
//! first BS new year). Conversion in both directions is cumulative day
//! arithmetic against that anchor, so the round trip is exact for every
//! date the table covers.

use crate::consts::{EPOCH_AD_DAY, EPOCH_AD_MONTH, EPOCH_AD_YEAR, EPOCH_BS_YEAR, MAX_MONTH};
use crate::data::BS_MONTH_LENGTHS;
use crate::types::{AdDate, BsDate};

/// Error produced by a conversion.
///
/// Conversions either fully succeed with an exact date or fail with one of
/// these conditions; no partial results, no substituted defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The requested date falls outside the years the table covers, on
    /// either side.
    #[error("date outside the supported range ({first_year} BS through {last_year} BS)")]
    OutOfRange { first_year: u16, last_year: u16 },

    /// The BS day does not exist in that month for that year.
    #[error("invalid day {day} for {year:04}-{month:02} BS (month has {month_length} days)")]
    InvalidDay {
        year: u16,
        month: u8,
        day: u8,
        month_length: u8,
    },
}

/// An immutable table-and-anchor pair.
///
/// Read-only after construction, `Copy` over `'static` data, and freely
/// shareable across threads. Use [`Calendar::bikram_sambat`] for the
/// canonical Nepali calendar; [`Calendar::new`] exists so tests (or callers
/// with their own reference data) can inject an alternate table.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    first_year: u16,
    months: &'static [[u8; 12]],
    epoch: AdDate,
}

impl Calendar {
    /// Builds a calendar from a month-length table and its anchor.
    ///
    /// `epoch` must be the AD date of `first_year`-01-01 in the calendar
    /// being described; every conversion is computed relative to that pair.
    /// Mixing a table with an anchor from a different data source produces
    /// silently shifted dates, not errors.
    #[must_use]
    pub const fn new(first_year: u16, months: &'static [[u8; 12]], epoch: AdDate) -> Self {
        Self {
            first_year,
            months,
            epoch,
        }
    }

    /// The canonical Bikram Sambat calendar: BS years 1970 through 2099,
    /// anchored at 1970-01-01 BS == 1913-04-13 AD (UTC midnight).
    #[must_use]
    pub const fn bikram_sambat() -> Self {
        Self::new(
            EPOCH_BS_YEAR,
            &BS_MONTH_LENGTHS,
            AdDate::from_ymd_unchecked(EPOCH_AD_YEAR, EPOCH_AD_MONTH, EPOCH_AD_DAY),
        )
    }

    /// First supported BS year.
    #[must_use]
    pub const fn first_year(&self) -> u16 {
        self.first_year
    }

    /// Last supported BS year (inclusive).
    #[must_use]
    pub const fn last_year(&self) -> u16 {
        self.first_year + self.months.len() as u16 - 1
    }

    /// The AD date of `first_year`-01-01 BS.
    #[must_use]
    pub const fn epoch(&self) -> AdDate {
        self.epoch
    }

    /// Whether `year` has an entry in the month-length table.
    #[must_use]
    pub fn contains_year(&self, year: u16) -> bool {
        self.year_index(year).is_some()
    }

    /// Number of days in the given BS month.
    ///
    /// # Errors
    /// Returns `OutOfRange` if the year is not covered by the table or the
    /// month is outside 1-12.
    pub fn days_in_month(&self, year: u16, month: u8) -> Result<u8, ConvertError> {
        let index = self.year_index(year).ok_or_else(|| self.out_of_range())?;
        if month == 0 || month > MAX_MONTH {
            return Err(self.out_of_range());
        }
        Ok(self.months[index][usize::from(month) - 1])
    }

    /// Converts an AD date to the equivalent BS date.
    ///
    /// The epoch anchor itself maps to `first_year`-01-01; any earlier AD
    /// date, or one past the last table year, is rejected.
    ///
    /// # Errors
    /// Returns `OutOfRange` when the date falls outside the supported span.
    pub fn to_bs(&self, date: AdDate) -> Result<BsDate, ConvertError> {
        let mut remaining = date.jdn() - self.epoch.jdn();
        if remaining < 0 {
            return Err(self.out_of_range());
        }

        let mut year = self.first_year;
        let mut found = None;
        for entry in self.months {
            let year_days = days_in_year(entry);
            if remaining < year_days {
                found = Some(entry);
                break;
            }
            remaining -= year_days;
            year += 1;
        }
        let Some(entry) = found else {
            return Err(self.out_of_range());
        };

        let mut month = 1u8;
        for &len in entry {
            if remaining < i64::from(len) {
                break;
            }
            remaining -= i64::from(len);
            month += 1;
        }
        // The year guard above bounds `remaining` below the row total, so
        // the month walk cannot exhaust a well-formed 12-entry row.
        debug_assert!(month <= MAX_MONTH);

        Ok(BsDate::from_ymd_unchecked(year, month, remaining as u8 + 1))
    }

    /// Converts a BS date to the equivalent AD date.
    ///
    /// The day is validated against the table's month length: an oversized
    /// day fails with `InvalidDay` rather than silently rolling over into a
    /// later month.
    ///
    /// # Errors
    /// Returns `OutOfRange` for a year outside the table, `InvalidDay` for a
    /// day the month does not have.
    pub fn to_ad(&self, date: BsDate) -> Result<AdDate, ConvertError> {
        let index = self
            .year_index(date.year())
            .ok_or_else(|| self.out_of_range())?;
        let entry = &self.months[index];
        let month_index = usize::from(date.month()) - 1;

        let month_length = entry[month_index];
        if date.day() > month_length {
            return Err(ConvertError::InvalidDay {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                month_length,
            });
        }

        let mut total: i64 = self.months[..index].iter().map(days_in_year).sum();
        total += entry[..month_index]
            .iter()
            .map(|&len| i64::from(len))
            .sum::<i64>();
        total += i64::from(date.day()) - 1;

        Ok(AdDate::from_jdn(self.epoch.jdn() + total))
    }

    fn year_index(&self, year: u16) -> Option<usize> {
        let index = usize::from(year.checked_sub(self.first_year)?);
        (index < self.months.len()).then_some(index)
    }

    fn out_of_range(&self) -> ConvertError {
        ConvertError::OutOfRange {
            first_year: self.first_year,
            last_year: self.last_year(),
        }
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::bikram_sambat()
    }
}

fn days_in_year(entry: &[u8; 12]) -> i64 {
    entry.iter().map(|&len| i64::from(len)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BS_MONTH_LEN, MIN_BS_MONTH_LEN};

    fn ad(year: u16, month: u8, day: u8) -> AdDate {
        AdDate::new(year, month, day).unwrap()
    }

    fn bs(year: u16, month: u8, day: u8) -> BsDate {
        BsDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_epoch_maps_to_first_new_year() {
        let cal = Calendar::bikram_sambat();
        assert_eq!(cal.to_bs(cal.epoch()).unwrap(), bs(1970, 1, 1));
        assert_eq!(cal.to_ad(bs(1970, 1, 1)).unwrap(), cal.epoch());
        assert_eq!(cal.epoch(), ad(1913, 4, 13));
    }

    #[test]
    fn test_before_epoch_rejected() {
        let cal = Calendar::bikram_sambat();
        let result = cal.to_bs(ad(1913, 4, 12));
        assert_eq!(
            result,
            Err(ConvertError::OutOfRange {
                first_year: 1970,
                last_year: 2099
            })
        );
    }

    #[test]
    fn test_past_table_end_rejected() {
        let cal = Calendar::bikram_sambat();
        // 2043-04-12 AD is the last covered day (2099-12-30 BS).
        assert_eq!(cal.to_bs(ad(2043, 4, 12)).unwrap(), bs(2099, 12, 30));
        assert!(matches!(
            cal.to_bs(ad(2043, 4, 13)),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_bs_year_outside_table_rejected() {
        let cal = Calendar::bikram_sambat();
        assert!(matches!(
            cal.to_ad(bs(1969, 1, 1)),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert!(matches!(
            cal.to_ad(bs(2100, 1, 1)),
            Err(ConvertError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_oversized_day_rejected() {
        let cal = Calendar::bikram_sambat();
        // Magh (month 10) of 2080 BS has 29 days.
        assert_eq!(cal.days_in_month(2080, 10).unwrap(), 29);
        assert_eq!(
            cal.to_ad(bs(2080, 10, 30)),
            Err(ConvertError::InvalidDay {
                year: 2080,
                month: 10,
                day: 30,
                month_length: 29
            })
        );
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            bs: (u16, u8, u8),
            ad: (u16, u8, u8),
        }

        let cases = [
            TestCase {
                bs: (1970, 1, 1),
                ad: (1913, 4, 13),
            },
            TestCase {
                bs: (1970, 12, 30),
                ad: (1914, 4, 12),
            },
            TestCase {
                bs: (1999, 9, 17),
                ad: (1942, 12, 31),
            },
            TestCase {
                bs: (2000, 1, 1),
                ad: (1943, 4, 13),
            },
            TestCase {
                bs: (2042, 6, 2),
                ad: (1985, 9, 17),
            },
            TestCase {
                bs: (2059, 3, 15),
                ad: (2002, 6, 28),
            },
            TestCase {
                bs: (2076, 2, 32),
                ad: (2019, 6, 14),
            },
            TestCase {
                bs: (2080, 10, 15),
                ad: (2024, 1, 28),
            },
            TestCase {
                bs: (2080, 10, 2),
                ad: (2024, 1, 15),
            },
            TestCase {
                bs: (2081, 3, 2),
                ad: (2024, 6, 15),
            },
            TestCase {
                bs: (2099, 12, 30),
                ad: (2043, 4, 12),
            },
        ];

        let cal = Calendar::bikram_sambat();
        for case in &cases {
            let (by, bm, bd) = case.bs;
            let (ay, am, ad_day) = case.ad;
            let expected_ad = ad(ay, am, ad_day);
            let expected_bs = bs(by, bm, bd);
            assert_eq!(cal.to_ad(expected_bs).unwrap(), expected_ad, "{expected_bs} BS");
            assert_eq!(cal.to_bs(expected_ad).unwrap(), expected_bs, "{expected_ad} AD");
        }
    }

    #[test]
    fn test_round_trip_and_monotonicity_full_range() {
        // Walk every valid BS date in table order. Each must convert to the
        // AD day exactly one after the previous one, and convert back to
        // itself. This covers the round-trip law, monotonicity, and the
        // strict-less-than boundary behavior in one sweep.
        let cal = Calendar::bikram_sambat();
        let mut expected_jdn_offset = 0i64;
        let epoch_ordinal = cal.epoch().jdn();

        for year in cal.first_year()..=cal.last_year() {
            for month in 1..=12u8 {
                let month_length = cal.days_in_month(year, month).unwrap();
                for day in 1..=month_length {
                    let bs_date = bs(year, month, day);
                    let ad_date = cal.to_ad(bs_date).unwrap();
                    assert_eq!(
                        ad_date.jdn() - epoch_ordinal,
                        expected_jdn_offset,
                        "{bs_date} BS"
                    );
                    assert_eq!(cal.to_bs(ad_date).unwrap(), bs_date, "{ad_date} AD");
                    expected_jdn_offset += 1;
                }
            }
        }
        assert_eq!(expected_jdn_offset, 47_482);
    }

    #[test]
    fn test_table_consistency() {
        let cal = Calendar::bikram_sambat();
        assert_eq!(cal.first_year(), 1970);
        assert_eq!(cal.last_year(), 2099);
        for year in cal.first_year()..=cal.last_year() {
            for month in 1..=12u8 {
                let len = cal.days_in_month(year, month).unwrap();
                assert!(
                    (MIN_BS_MONTH_LEN..=MAX_BS_MONTH_LEN).contains(&len),
                    "{year}-{month:02} BS has implausible length {len}"
                );
            }
        }
    }

    #[test]
    fn test_accessors() {
        let cal = Calendar::bikram_sambat();
        assert!(cal.contains_year(1970));
        assert!(cal.contains_year(2099));
        assert!(!cal.contains_year(1969));
        assert!(!cal.contains_year(2100));
        assert!(matches!(
            cal.days_in_month(2080, 13),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert_eq!(Calendar::default().epoch(), cal.epoch());
    }

    // A two-year synthetic table exercising the engine independently of the
    // real reference data.
    const TINY_TABLE: [[u8; 12]; 2] = [
        [30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30],
        [29, 31, 30, 30, 30, 30, 30, 30, 30, 30, 30, 32],
    ];

    fn tiny() -> Calendar {
        Calendar::new(100, &TINY_TABLE, AdDate::from_ymd_unchecked(2000, 3, 1))
    }

    #[test]
    fn test_injected_table_conversions() {
        let cal = tiny();
        assert_eq!(cal.last_year(), 101);
        assert_eq!(cal.to_bs(ad(2000, 3, 1)).unwrap(), bs(100, 1, 1));
        // Year 100 has 360 days, so its last day is 2001-02-23 AD and
        // 101-01-01 BS lands on 2001-02-24 AD.
        assert_eq!(cal.to_ad(bs(100, 12, 30)).unwrap(), ad(2001, 2, 23));
        assert_eq!(cal.to_bs(ad(2001, 2, 24)).unwrap(), bs(101, 1, 1));
        // Round trip across the uneven second year.
        for (month, day) in [(1u8, 29u8), (2, 31), (12, 32)] {
            let date = bs(101, month, day);
            assert_eq!(cal.to_bs(cal.to_ad(date).unwrap()).unwrap(), date);
        }
    }

    #[test]
    fn test_injected_table_bounds() {
        let cal = tiny();
        assert!(matches!(
            cal.to_bs(ad(2000, 2, 29)),
            Err(ConvertError::OutOfRange { .. })
        ));
        // 360 + 362 days total; first AD day past the table.
        let last = cal.to_ad(bs(101, 12, 32)).unwrap();
        assert!(cal.to_bs(last).is_ok());
        assert!(matches!(
            cal.to_bs(AdDate::from_jdn(last.jdn() + 1)),
            Err(ConvertError::OutOfRange { .. })
        ));
        assert_eq!(
            cal.to_ad(bs(101, 1, 30)),
            Err(ConvertError::InvalidDay {
                year: 101,
                month: 1,
                day: 30,
                month_length: 29
            })
        );
    }
}

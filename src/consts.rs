/// First BS year covered by the calendar table.
pub const EPOCH_BS_YEAR: u16 = 1970;

/// AD date of `EPOCH_BS_YEAR`-01-01 BS, at UTC midnight. This pairing is the
/// sole ground truth linking the two calendars; all conversion is day-offset
/// arithmetic against it.
pub(crate) const EPOCH_AD_YEAR: u16 = 1913;
pub(crate) const EPOCH_AD_MONTH: u8 = 4;
pub(crate) const EPOCH_AD_DAY: u8 = 13;

/// Maximum valid year (inclusive) for either calendar's date values
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December in AD, Chaitra in BS)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number any BS month can hold. A `BsDate` holding a day up to
/// this limit may still be rejected by the calendar table for its month.
pub const MAX_BS_DAY: u8 = 32;

/// Sane bounds for a single BS month length; table rows outside this range
/// indicate corrupt reference data.
pub(crate) const MIN_BS_MONTH_LEN: u8 = 29;
pub(crate) const MAX_BS_MONTH_LEN: u8 = 32;

/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each AD month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const AD_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Canonical date component separator
pub const DATE_SEPARATOR: char = '-';
/// Alternate separator also accepted when parsing
pub const ALT_DATE_SEPARATOR: char = '/';

/// Devanagari digits ०-९, indexed by the ASCII digit they replace.
pub(crate) const NEPALI_DIGITS: [char; 10] =
    ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// BS month names, Baisakh through Chaitra.
pub(crate) const BS_MONTH_NAMES_EN: [&str; 12] = [
    "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Asoj", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

pub(crate) const BS_MONTH_NAMES_NP: [&str; 12] = [
    "वैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुस", "माघ", "फागुन", "चैत",
];

/// Weekday names, Sunday first (matching [`crate::AdDate::day_of_week`]).
pub(crate) const WEEKDAY_NAMES_EN: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

pub(crate) const WEEKDAY_NAMES_NP: [&str; 7] = [
    "आइतबार", "सोमबार", "मङ्गलबार", "बुधबार", "बिहिबार", "शुक्रबार", "शनिबार",
];

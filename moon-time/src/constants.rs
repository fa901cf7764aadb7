//! Calendar and time-scale constants.

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// First Julian Day Number decoded on the Gregorian calendar.
///
/// JD 2299161 begins at noon of 1582 October 15 (Gregorian), the day after
/// 1582 October 4 (Julian).
pub const GREGORIAN_REFORM_JD: f64 = 2_299_161.0;

/// Civil date `(year, month, day)` from which encoding switches to the
/// Gregorian calendar. Anything strictly earlier is read as Julian.
pub const GREGORIAN_REFORM_DATE: (i32, u8, u8) = (1582, 10, 5);

/// Julian Dates accepted by the phase search, about years -278,000 to
/// +269,000. Covers every date a Unix timestamp or ISO-8601 string can name.
pub const MIN_JULIAN_DATE: f64 = -1.0e8;
pub const MAX_JULIAN_DATE: f64 = 1.0e8;

/// Calendar years for which yearly tables are built. Both ends, with their
/// neighbouring years, fall inside [`MIN_JULIAN_DATE`, `MAX_JULIAN_DATE`].
pub const MIN_YEAR: i32 = -270_000;
pub const MAX_YEAR: i32 = 265_000;

pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

pub const SECONDS_TO_DAYS: f64 = 1.0 / SECONDS_PER_DAY_F64;

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

use crate::calendar::{civil_to_julian, day_of_week, julian_to_civil, julian_to_time_of_day};
use crate::constants::{DAY_NAMES, MONTH_NAMES};
use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use std::fmt;
use std::str::FromStr;

/// Broken-down UTC civil date-time with whole seconds.
///
/// Dates before 1582-10-05 are on the Julian calendar, later ones on the
/// Gregorian calendar, matching [`civil_to_julian`]. A value decoded from a
/// Julian Date within half a second of midnight may carry `hour == 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UtcDateTime {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl UtcDateTime {
    /// Checked constructor.
    ///
    /// Only field ranges are validated (month 1-12, day 1-31, hour 0-23,
    /// minute and second 0-59). Nonexistent days such as February 30 pass.
    pub fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> TimeResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::invalid_date(year, month, day, "month must be 1-12"));
        }
        if !(1..=31).contains(&day) {
            return Err(TimeError::invalid_date(year, month, day, "day must be 1-31"));
        }
        if hour > 23 {
            return Err(TimeError::invalid_time(hour, minute, second, "hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::invalid_time(hour, minute, second, "minute must be 0-59"));
        }
        if second > 59 {
            return Err(TimeError::invalid_time(hour, minute, second, "second must be 0-59"));
        }
        Ok(Self::from_ymdhms(year, month, day, hour, minute, second))
    }

    /// Unchecked constructor; the caller vouches for the fields.
    pub const fn from_ymdhms(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn from_julian_date(jd: JulianDate) -> Self {
        let (year, month, day) = julian_to_civil(jd.to_f64());
        let (hour, minute, second) = julian_to_time_of_day(jd.to_f64());
        Self::from_ymdhms(year, month, day, hour, minute, second)
    }

    pub fn to_julian_date(&self) -> JulianDate {
        JulianDate::new(civil_to_julian(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            f64::from(self.second),
        ))
    }

    /// 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        day_of_week(self.to_julian_date().to_f64())
    }

    pub fn weekday_name(&self) -> &'static str {
        DAY_NAMES[usize::from(self.weekday())]
    }

    /// English month name, or `"?"` for a month outside 1-12.
    pub fn month_name(&self) -> &'static str {
        usize::from(self.month)
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i))
            .copied()
            .unwrap_or("?")
    }
}

impl fmt::Display for UtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl FromStr for UtcDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parsing::parse_iso8601(s)
    }
}

use crate::calendar::{civil_to_julian, day_of_week, julian_to_civil, julian_to_time_of_day};
use crate::constants::{SECONDS_TO_DAYS, UNIX_EPOCH_JD};
use std::fmt;

/// Astronomical Julian Date: days since 4713 BC January 1, 12:00 UTC.
///
/// A single `f64` carries the date. At present-day magnitudes that resolves
/// about 40 microseconds, well inside the one-second contract of the
/// civil conversions.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDate(f64);

impl JulianDate {
    pub const fn new(jd: f64) -> Self {
        Self(jd)
    }

    pub fn unix_epoch() -> Self {
        Self(UNIX_EPOCH_JD)
    }

    pub fn from_calendar(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> Self {
        Self(civil_to_julian(year, month, day, hour, minute, second))
    }

    pub fn to_f64(&self) -> f64 {
        self.0
    }

    pub fn add_days(&self, days: f64) -> Self {
        Self(self.0 + days)
    }

    pub fn add_seconds(&self, seconds: f64) -> Self {
        self.add_days(seconds * SECONDS_TO_DAYS)
    }

    /// Julian Date counted from midnight instead of noon.
    pub fn zero_hour_variant(&self) -> f64 {
        self.0 + 0.5
    }

    /// Civil `(year, month, day)`, Julian calendar before the 1582 reform.
    pub fn to_calendar(&self) -> (i32, u8, u8) {
        julian_to_civil(self.0)
    }

    /// `(hour, minute, second)` rounded to the nearest second.
    pub fn time_of_day(&self) -> (u8, u8, u8) {
        julian_to_time_of_day(self.0)
    }

    /// 0 = Sunday through 6 = Saturday.
    pub fn weekday(&self) -> u8 {
        day_of_week(self.0)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.5}", self.0)
    }
}

impl From<f64> for JulianDate {
    fn from(jd: f64) -> Self {
        Self::new(jd)
    }
}

impl From<JulianDate> for f64 {
    fn from(jd: JulianDate) -> Self {
        jd.to_f64()
    }
}

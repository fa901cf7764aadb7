use crate::constants::{GREGORIAN_REFORM_JD, SECONDS_PER_DAY, SECONDS_PER_DAY_F64, UNIX_EPOCH_JD};
use crate::datetime::UtcDateTime;
use crate::julian::JulianDate;
use crate::{TimeError, TimeResult};
use chrono::{DateTime, Datelike, Timelike, Utc};

/// A point in time carried in both of its representations.
///
/// `utc` is always the civil reading of `julian_date` (Julian calendar
/// before the 1582 reform). Instants are plain values and never change after
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    julian_date: JulianDate,
    utc: UtcDateTime,
}

/// 1582-10-15T00:00:00Z, the first Gregorian midnight.
const GREGORIAN_REFORM_MIDNIGHT_JD: f64 = GREGORIAN_REFORM_JD - 0.5;

impl Instant {
    pub fn from_utc(utc: UtcDateTime) -> Self {
        Self {
            julian_date: utc.to_julian_date(),
            utc,
        }
    }

    /// Builds an instant from civil fields without validating them.
    pub fn from_ymdhms(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self::from_utc(UtcDateTime::from_ymdhms(year, month, day, hour, minute, second))
    }

    /// Builds an instant from civil fields, rejecting out-of-range values.
    pub fn try_from_ymdhms(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> TimeResult<Self> {
        UtcDateTime::new(year, month, day, hour, minute, second).map(Self::from_utc)
    }

    pub fn from_julian_date(julian_date: JulianDate) -> Self {
        Self {
            julian_date,
            utc: UtcDateTime::from_julian_date(julian_date),
        }
    }

    /// Builds an instant from seconds since 1970-01-01T00:00:00Z.
    ///
    /// Timestamps from 1582-10-15 onward are decomposed into civil fields
    /// first so the Julian Date is the one [`civil_to_julian`] yields for
    /// that date-time. Earlier timestamps are converted by day count and
    /// labelled on the Julian calendar.
    ///
    /// [`civil_to_julian`]: crate::calendar::civil_to_julian
    pub fn from_timestamp(timestamp: i64) -> TimeResult<Self> {
        let dt = DateTime::<Utc>::from_timestamp(timestamp, 0)
            .ok_or(TimeError::TimestampOutOfRange(timestamp))?;
        let civil = Self::from_utc(utc_from_chrono(&dt));

        if civil.julian_date.to_f64() < GREGORIAN_REFORM_MIDNIGHT_JD {
            let days = timestamp.div_euclid(SECONDS_PER_DAY) as f64
                + timestamp.rem_euclid(SECONDS_PER_DAY) as f64 / SECONDS_PER_DAY_F64;
            Ok(Self::from_julian_date(JulianDate::new(UNIX_EPOCH_JD + days)))
        } else {
            Ok(civil)
        }
    }

    /// The current system time, truncated to whole seconds.
    pub fn now() -> Self {
        Self::from_utc(utc_from_chrono(&Utc::now()))
    }

    /// The given instant, or [`Instant::now`] when none is supplied.
    pub fn resolve(instant: Option<Instant>) -> Self {
        instant.unwrap_or_else(Self::now)
    }

    pub fn julian_date(&self) -> JulianDate {
        self.julian_date
    }

    pub fn utc(&self) -> UtcDateTime {
        self.utc
    }

    /// Seconds since the Unix epoch, rounded to the nearest second.
    ///
    /// `None` when the Julian Date is not finite or the count does not fit
    /// in an `i64`.
    pub fn timestamp(&self) -> Option<i64> {
        let seconds = ((self.julian_date.to_f64() - UNIX_EPOCH_JD) * SECONDS_PER_DAY_F64).round();
        if seconds.is_finite() && seconds.abs() < i64::MAX as f64 {
            Some(seconds as i64)
        } else {
            None
        }
    }
}

impl From<UtcDateTime> for Instant {
    fn from(utc: UtcDateTime) -> Self {
        Self::from_utc(utc)
    }
}

impl From<JulianDate> for Instant {
    fn from(jd: JulianDate) -> Self {
        Self::from_julian_date(jd)
    }
}

pub(crate) fn utc_from_chrono(dt: &DateTime<Utc>) -> UtcDateTime {
    UtcDateTime::from_ymdhms(
        dt.year(),
        dt.month() as u8,
        dt.day() as u8,
        dt.hour() as u8,
        dt.minute() as u8,
        dt.second() as u8,
    )
}

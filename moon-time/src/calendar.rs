//! Civil date-time ⇄ astronomical Julian Date.
//!
//! Algorithms follow Meeus, *Astronomical Algorithms*, chapter 7. Dates
//! before 1582 October 5 are read on the Julian calendar, later dates on the
//! Gregorian calendar. The inverse switches at the equivalent instant,
//! JD 2299161.0.
//!
//! Julian Dates here are astronomical: the integer part changes at 12:00 UTC.
//!
//! ```
//! use moon_time::calendar::{civil_to_julian, julian_to_civil, day_of_week};
//!
//! let jd = civil_to_julian(1582, 10, 4, 12, 0, 0.0);
//! assert_eq!(jd, 2_299_160.0);
//!
//! // The next day is Gregorian 15 October, not 5 October.
//! assert_eq!(julian_to_civil(jd + 1.0), (1582, 10, 15));
//! assert_eq!(day_of_week(jd + 1.0), 5); // Friday
//! ```
//!
//! None of these functions validate their input; callers are expected to
//! pass plausible calendar fields.

use crate::constants::{GREGORIAN_REFORM_DATE, GREGORIAN_REFORM_JD, SECONDS_PER_DAY_F64};

/// Converts a UTC civil date-time to an astronomical Julian Date.
///
/// `month` is 1-12. January and February are handled as months 13 and 14 of
/// the preceding year. The integer truncations are those of the published
/// algorithm and are kept verbatim, including for years before -4716 where
/// truncation toward zero differs from flooring.
pub fn civil_to_julian(year: i32, month: u8, day: u8, hour: u8, minute: u8, second: f64) -> f64 {
    let (mut y, mut m) = (year, i32::from(month));
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    let b = if is_julian_calendar(year, month, day) {
        0
    } else {
        let a = y.div_euclid(100);
        2 - a + a.div_euclid(4)
    };

    let day_number = (365.25 * f64::from(y + 4716)).trunc()
        + (30.6001 * f64::from(m + 1)).trunc()
        + f64::from(day)
        + f64::from(b)
        - 1524.5;

    let seconds = second + 60.0 * f64::from(u32::from(minute) + 60 * u32::from(hour));

    day_number + seconds / SECONDS_PER_DAY_F64
}

/// True for civil dates strictly before the Gregorian reform (1582-10-05).
#[inline]
pub fn is_julian_calendar(year: i32, month: u8, day: u8) -> bool {
    (year, month, day) < GREGORIAN_REFORM_DATE
}

/// Decodes the civil `(year, month, day)` of a Julian Date.
///
/// Day numbers below JD 2299161 are decoded on the Julian calendar.
pub fn julian_to_civil(jd: f64) -> (i32, u8, u8) {
    let td = jd + 0.5;
    let z = td.floor();
    let f = td - z;

    let a = if z < GREGORIAN_REFORM_JD {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = (b - d - (30.6001 * e).floor() + f).trunc() as u8;
    let month = (if e < 14.0 { e - 1.0 } else { e - 13.0 }) as u8;
    let year = (if month > 2 { c - 4716.0 } else { c - 4715.0 }) as i32;

    (year, month, day)
}

/// Extracts `(hour, minute, second)` from the day fraction of a Julian Date.
///
/// Seconds are rounded to the nearest whole second. A fraction within half a
/// second of midnight rounds up to `(24, 0, 0)` while [`julian_to_civil`]
/// still reports the earlier day; callers that need a normalized date-time
/// must carry that over themselves.
pub fn julian_to_time_of_day(jd: f64) -> (u8, u8, u8) {
    let j = jd + 0.5;
    let seconds = ((j - j.floor()) * SECONDS_PER_DAY_F64 + 0.5).trunc() as u32;

    let hour = (seconds / 3600) as u8;
    let minute = ((seconds / 60) % 60) as u8;
    let second = (seconds % 60) as u8;

    (hour, minute, second)
}

/// Day of the week for a Julian Date, 0 = Sunday through 6 = Saturday.
#[inline]
pub fn day_of_week(jd: f64) -> u8 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u8
}

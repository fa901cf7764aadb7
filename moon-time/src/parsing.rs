//! String forms accepted for an [`Instant`].
//!
//! | Input | Example | Parser |
//! |-------|---------|--------|
//! | Unix timestamp | `794886000`, `-1` | [`parse_timestamp`] |
//! | Julian Date | `2449787.569444` | [`parse_julian_date`] |
//! | ISO-8601 date | `1995-03-11` | [`parse_iso8601`] |
//! | ISO-8601 date-time | `1995-03-11T01:40:00`, `1995-03-11 01:40` | [`parse_iso8601`] |
//! | RFC 3339 with offset | `1995-03-11T02:40:00+01:00` | [`parse_iso8601`] |
//!
//! Date-times without an offset are read as UTC. Fractional seconds are
//! truncated. [`parse_instant`] tries the forms in table order.

use crate::constants::{MAX_JULIAN_DATE, MIN_JULIAN_DATE};
use crate::instant::{utc_from_chrono, Instant};
use crate::{JulianDate, TimeError, TimeResult, UtcDateTime};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MAX_INPUT_LENGTH: usize = 40;

const NAIVE_DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M%:z"];

/// Parses an ISO-8601 date or date-time into UTC civil fields.
pub fn parse_iso8601(s: &str) -> TimeResult<UtcDateTime> {
    let s = check_length(s)?;

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(utc_from_chrono(&dt.with_timezone(&Utc)));
    }
    for format in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(utc_from_chrono(&dt.with_timezone(&Utc)));
        }
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, format) {
            return Ok(utc_from_chrono(&dt.and_utc()));
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(naive, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(utc_from_chrono(&midnight.and_utc()));
    }

    Err(TimeError::ParseError(format!(
        "Invalid datetime '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS][Z|±HH:MM]",
        s
    )))
}

/// Parses `[+-]?[0-9]+` as whole seconds since the Unix epoch.
pub fn parse_timestamp(s: &str) -> TimeResult<i64> {
    let s = check_length(s)?;
    if !is_integer(s) {
        return Err(TimeError::ParseError(format!("Invalid timestamp '{}'", s)));
    }
    s.parse::<i64>()
        .map_err(|e| TimeError::ParseError(format!("Invalid timestamp '{}': {}", s, e)))
}

/// Parses a plain decimal number such as `2449787.5` as a Julian Date.
///
/// Exponents, `inf` and `NaN` are rejected, as are dates outside
/// [`MIN_JULIAN_DATE`, `MAX_JULIAN_DATE`].
pub fn parse_julian_date(s: &str) -> TimeResult<JulianDate> {
    let s = check_length(s)?;
    if !is_decimal(s) {
        return Err(TimeError::ParseError(format!("Invalid Julian date '{}'", s)));
    }
    let jd = s
        .parse::<f64>()
        .map_err(|e| TimeError::ParseError(format!("Invalid Julian date '{}': {}", s, e)))?;
    if !(MIN_JULIAN_DATE..=MAX_JULIAN_DATE).contains(&jd) {
        return Err(TimeError::ParseError(format!(
            "Julian date {} outside [{}, {}]",
            s, MIN_JULIAN_DATE, MAX_JULIAN_DATE
        )));
    }
    Ok(JulianDate::new(jd))
}

/// Parses any accepted form into an [`Instant`].
///
/// An integer is a Unix timestamp, other decimal numbers are Julian Dates,
/// everything else must be ISO-8601.
pub fn parse_instant(s: &str) -> TimeResult<Instant> {
    let s = check_length(s)?;
    if is_integer(s) {
        Instant::from_timestamp(parse_timestamp(s)?)
    } else if is_decimal(s) {
        parse_julian_date(s).map(Instant::from_julian_date)
    } else {
        parse_iso8601(s).map(Instant::from_utc)
    }
}

fn check_length(s: &str) -> TimeResult<&str> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TimeError::ParseError("Empty input".to_string()));
    }
    if s.len() > MAX_INPUT_LENGTH {
        return Err(TimeError::ParseError("Input too long".to_string()));
    }
    Ok(s)
}

fn strip_sign(s: &str) -> &str {
    s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s)
}

fn is_integer(s: &str) -> bool {
    let digits = strip_sign(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_decimal(s: &str) -> bool {
    let body = strip_sign(s);
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    !(int_part.is_empty() && frac_part.is_empty()) && all_digits(int_part) && all_digits(frac_part)
}

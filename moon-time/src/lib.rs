//! Civil UTC and Julian Date time handling for the moontool engine.
//!
//! Every computation in the workspace runs on astronomical Julian Dates;
//! this crate converts between those and what people type or read.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`calendar`] | Meeus civil ⇄ Julian Date, time of day, day of week |
//! | [`julian`] | [`JulianDate`] newtype |
//! | [`datetime`] | [`UtcDateTime`] civil fields with checked construction |
//! | [`instant`] | [`Instant`], a point in time carried as both JD and UTC |
//! | [`parsing`] | ISO-8601, Unix timestamp and Julian Date strings |
//! | [`constants`] | Reform date, Unix epoch, day and month names |
//!
//! # Quick Start
//!
//! ```
//! use moon_time::{Instant, UtcDateTime};
//!
//! let instant = Instant::from_timestamp(794_886_000).unwrap();
//! assert_eq!(instant.utc(), UtcDateTime::from_ymdhms(1995, 3, 11, 1, 40, 0));
//! assert!((instant.julian_date().to_f64() - 2_449_787.569_444).abs() < 1e-6);
//! ```
//!
//! Conversions are total. Only parsing and the checked constructors return
//! [`TimeResult`].

pub mod calendar;
pub mod constants;
pub mod datetime;
pub mod instant;
pub mod julian;
pub mod parsing;

pub use datetime::UtcDateTime;
pub use instant::Instant;
pub use julian::JulianDate;
pub use parsing::{parse_instant, parse_iso8601, parse_julian_date, parse_timestamp};

use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    /// Calendar field out of range (month 13, day 0).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: u8,
        day: u8,
        message: String,
    },

    #[error("Invalid time {hour:02}:{minute:02}:{second:02}: {message}")]
    InvalidTime {
        hour: u8,
        minute: u8,
        second: u8,
        message: String,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    /// Unix timestamp outside the representable calendar range.
    #[error("Timestamp {0} out of range")]
    TimestampOutOfRange(i64),
}

impl TimeError {
    pub fn invalid_date(year: i32, month: u8, day: u8, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn invalid_time(hour: u8, minute: u8, second: u8, reason: &str) -> Self {
        Self::InvalidTime {
            hour,
            minute,
            second,
            message: reason.to_string(),
        }
    }
}

//! Phase of the Moon, lunation calendars and solar events.
//!
//! The engine behind `moontool`: a 1980.0-epoch Sun/Moon model for the
//! Moon's phase, age and distance, a search for the principal phases around
//! any date, and year-long new/full moon and equinox/solstice tables.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`phase`] | Position and phase model, [`PhaseInfo`] |
//! | [`hunt`] | Mean and true phase instants, phase-boundary search |
//! | [`snapshot`] | [`MoonPhaseSnapshot`] and the eight-way [`PhaseCategory`] |
//! | [`lunation`] | [`LunationBoundaries`] and Brown Lunation Numbers |
//! | [`yearly`] | [`YearlyMoonCalendar`] with traditional full-moon names |
//! | [`solar`] | Equinoxes and solstices, [`SunCalendar`] |
//!
//! # Entry points
//!
//! ```
//! use moon_ephemeris::{compute_moon_calendar, compute_moon_phase, PhaseCategory};
//! use moon_time::Instant;
//!
//! let instant = Instant::from_timestamp(794_886_000).unwrap();
//!
//! let snapshot = compute_moon_phase(Some(instant));
//! assert_eq!(snapshot.phase, PhaseCategory::WaxingGibbous);
//!
//! let calendar = compute_moon_calendar(Some(instant));
//! assert_eq!(calendar.lunation, 893);
//! ```
//!
//! Passing `None` evaluates at the current system time. Every other function
//! is pure; results depend only on their arguments.

pub mod hunt;
pub mod lunation;
pub mod phase;
pub mod snapshot;
pub mod solar;
pub mod yearly;

pub use hunt::{mean_phase, phase_hunt, true_phase, Quarter};
pub use lunation::{lunation_number, LunationBoundaries};
pub use phase::{evaluate_phase, PhaseInfo};
pub use snapshot::{MoonPhaseSnapshot, PhaseCategory};
pub use solar::{solar_event, SolarEvent, SunCalendar};
pub use yearly::{FullMoon, FullMoonName, YearlyMoonCalendar};

use moon_time::Instant;

/// Phase, age and distances at `instant`, or now.
pub fn compute_moon_phase(instant: Option<Instant>) -> MoonPhaseSnapshot {
    MoonPhaseSnapshot::at(Instant::resolve(instant))
}

/// Principal phases of the lunation containing `instant`, or now.
pub fn compute_moon_calendar(instant: Option<Instant>) -> LunationBoundaries {
    LunationBoundaries::at(Instant::resolve(instant))
}

/// New and full moons of the UTC year of `instant`, or of this year.
pub fn compute_yearly_moon_calendar(instant: Option<Instant>) -> YearlyMoonCalendar {
    YearlyMoonCalendar::for_year(Instant::resolve(instant).utc().year)
}

/// Equinoxes and solstices of the UTC year of `instant`, or of this year.
pub fn compute_sun_calendar(instant: Option<Instant>) -> SunCalendar {
    SunCalendar::for_year(Instant::resolve(instant).utc().year)
}

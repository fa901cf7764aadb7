//! Phase snapshot of one instant and its eight-way phase category.

use crate::phase::evaluate_phase;
use moon_core::constants::{EARTH_RADIUS_KM, SUN_SEMI_MAJOR_AXIS_KM, SYNODIC_MONTH};
use moon_time::{Instant, JulianDate, UtcDateTime};
use std::fmt;

/// Half-width of the exact-phase buckets, as a fraction of a lunation.
///
/// 0.75 day either side of each principal phase.
pub const PHASE_BUCKET_HALF_WIDTH: f64 = 0.75 / SYNODIC_MONTH;

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseCategory {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl PhaseCategory {
    pub const ALL: [PhaseCategory; 8] = [
        PhaseCategory::NewMoon,
        PhaseCategory::WaxingCrescent,
        PhaseCategory::FirstQuarter,
        PhaseCategory::WaxingGibbous,
        PhaseCategory::FullMoon,
        PhaseCategory::WaningGibbous,
        PhaseCategory::LastQuarter,
        PhaseCategory::WaningCrescent,
    ];

    /// Classifies a fraction of lunation in [0, 1).
    ///
    /// The four principal phases own a window of [`PHASE_BUCKET_HALF_WIDTH`]
    /// either side of 0, 0.25, 0.5 and 0.75; the intermediate phases take
    /// the rest. Values past `1 - PHASE_BUCKET_HALF_WIDTH` wrap to new moon.
    pub fn from_fraction(p: f64) -> Self {
        let w = PHASE_BUCKET_HALF_WIDTH;
        if p < 0.00 + w {
            PhaseCategory::NewMoon
        } else if p < 0.25 - w {
            PhaseCategory::WaxingCrescent
        } else if p < 0.25 + w {
            PhaseCategory::FirstQuarter
        } else if p < 0.50 - w {
            PhaseCategory::WaxingGibbous
        } else if p < 0.50 + w {
            PhaseCategory::FullMoon
        } else if p < 0.75 - w {
            PhaseCategory::WaningGibbous
        } else if p < 0.75 + w {
            PhaseCategory::LastQuarter
        } else if p < 1.00 - w {
            PhaseCategory::WaningCrescent
        } else {
            PhaseCategory::NewMoon
        }
    }

    /// Position in [`PhaseCategory::ALL`], 0 = new moon.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            PhaseCategory::NewMoon => "New Moon",
            PhaseCategory::WaxingCrescent => "Waxing Crescent",
            PhaseCategory::FirstQuarter => "First Quarter",
            PhaseCategory::WaxingGibbous => "Waxing Gibbous",
            PhaseCategory::FullMoon => "Full Moon",
            PhaseCategory::WaningGibbous => "Waning Gibbous",
            PhaseCategory::LastQuarter => "Last Quarter",
            PhaseCategory::WaningCrescent => "Waning Crescent",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PhaseCategory::NewMoon => "\u{1f311}",
            PhaseCategory::WaxingCrescent => "\u{1f312}",
            PhaseCategory::FirstQuarter => "\u{1f313}",
            PhaseCategory::WaxingGibbous => "\u{1f314}",
            PhaseCategory::FullMoon => "\u{1f315}",
            PhaseCategory::WaningGibbous => "\u{1f316}",
            PhaseCategory::LastQuarter => "\u{1f317}",
            PhaseCategory::WaningCrescent => "\u{1f318}",
        }
    }
}

impl fmt::Display for PhaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The Moon's phase, age and distances at one instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonPhaseSnapshot {
    pub instant: Instant,
    /// Unix timestamp of `instant`, when representable.
    pub timestamp: Option<i64>,
    /// Days since new moon.
    pub age_days: f64,
    /// 0 = new, 0.5 = full.
    pub fraction_of_lunation: f64,
    pub phase: PhaseCategory,
    pub illuminated_fraction: f64,
    pub moon_distance_km: f64,
    pub moon_distance_earth_radii: f64,
    pub moon_angular_diameter_deg: f64,
    pub sun_distance_km: f64,
    pub sun_distance_au: f64,
    pub sun_angular_diameter_deg: f64,
}

impl MoonPhaseSnapshot {
    pub fn at(instant: Instant) -> Self {
        let info = evaluate_phase(instant.julian_date().to_f64());

        Self {
            instant,
            timestamp: instant.timestamp(),
            age_days: info.age_days,
            fraction_of_lunation: info.fraction_of_lunation,
            phase: PhaseCategory::from_fraction(info.fraction_of_lunation),
            illuminated_fraction: info.illuminated_fraction,
            moon_distance_km: info.moon_distance_km,
            moon_distance_earth_radii: info.moon_distance_km / EARTH_RADIUS_KM,
            moon_angular_diameter_deg: info.moon_angular_diameter_deg,
            sun_distance_km: info.sun_distance_km,
            sun_distance_au: info.sun_distance_km / SUN_SEMI_MAJOR_AXIS_KM,
            sun_angular_diameter_deg: info.sun_angular_diameter_deg,
        }
    }

    pub fn julian_date(&self) -> JulianDate {
        self.instant.julian_date()
    }

    pub fn utc(&self) -> UtcDateTime {
        self.instant.utc()
    }

    pub fn phase_index(&self) -> usize {
        self.phase.index()
    }

    pub fn phase_name(&self) -> &'static str {
        self.phase.name()
    }

    pub fn phase_icon(&self) -> &'static str {
        self.phase.icon()
    }
}

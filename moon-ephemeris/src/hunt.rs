//! Phase-boundary search: mean and true instants of the principal phases.
//!
//! The mean new moon for synodic index `k` comes from a polynomial in time,
//! the true instant of each quarter from a short periodic correction series
//! in the Sun's and Moon's mean anomalies and the Moon's argument of
//! latitude. `k = 0` is the new moon of 1900 January 0.5.
//!
//! ```
//! use moon_ephemeris::hunt::phase_hunt;
//!
//! let phases = phase_hunt(2_449_818.3);
//! assert!(phases[0] <= 2_449_818.3 && 2_449_818.3 < phases[4]);
//! assert!(phases.windows(2).all(|w| w[0] < w[1]));
//! ```

use moon_core::constants::SYNODIC_MONTH;
use moon_core::math::{dcos, dsin};
use moon_time::calendar::julian_to_civil;
use moon_time::constants::{MAX_JULIAN_DATE, MIN_JULIAN_DATE};
use tracing::{debug, warn};

const JD_1900_JAN_0_5: f64 = 2_415_020.0;
const MEAN_NEW_MOON_1900: f64 = 2_415_020.759_33;
const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
const LUNATIONS_PER_CENTURY: f64 = 1_236.85;
const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Selector windows are ±0.01 around each principal phase.
const SELECTOR_TOLERANCE: f64 = 0.01;

/// Days before the target date at which the search starts.
const HUNT_LEAD_DAYS: f64 = 45.0;

/// Upper bound on lunations stepped while bracketing. A few hundred suffice
/// anywhere in the accepted date range.
const HUNT_MAX_STEPS: u32 = 10_000;

/// The four principal phases, as fractions of a lunation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quarter {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [
        Quarter::NewMoon,
        Quarter::FirstQuarter,
        Quarter::FullMoon,
        Quarter::LastQuarter,
    ];

    pub fn selector(self) -> f64 {
        match self {
            Quarter::NewMoon => 0.0,
            Quarter::FirstQuarter => 0.25,
            Quarter::FullMoon => 0.5,
            Quarter::LastQuarter => 0.75,
        }
    }
}

/// Mean instant of new moon for synodic index `k`.
///
/// `date` only sets the time argument of the secular terms; `k` is normally
/// about `(year + fractional_month - 1900) * 12.3685`.
pub fn mean_phase(date: f64, k: f64) -> f64 {
    let t = (date - JD_1900_JAN_0_5) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    MEAN_NEW_MOON_1900 + SYNODIC_MONTH * k + 0.000_117_8 * t2 - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2)
}

/// True, corrected instant of the phase `selector` of lunation `k`.
///
/// # Panics
///
/// If `selector` is not within 0.01 of 0, 0.25, 0.5 or 0.75. Callers inside
/// this crate only pass [`Quarter::selector`] values.
pub fn true_phase(k: f64, selector: f64) -> f64 {
    let k = k + selector;
    let t = k / LUNATIONS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut pt = MEAN_NEW_MOON_1900 + SYNODIC_MONTH * k + 0.000_117_8 * t2
        - 0.000_000_155 * t3
        + 0.000_33 * dsin(166.56 + 132.87 * t - 0.009_173 * t2);

    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mprime = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    if selector.abs() < SELECTOR_TOLERANCE || (selector - 0.5).abs() < SELECTOR_TOLERANCE {
        pt += (0.1734 - 0.000_393 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
            - 0.4068 * dsin(mprime)
            + 0.0161 * dsin(2.0 * mprime)
            - 0.0004 * dsin(3.0 * mprime)
            + 0.0104 * dsin(2.0 * f)
            - 0.0051 * dsin(m + mprime)
            - 0.0074 * dsin(m - mprime)
            + 0.0004 * dsin(2.0 * f + m)
            - 0.0004 * dsin(2.0 * f - m)
            - 0.0006 * dsin(2.0 * f + mprime)
            + 0.0010 * dsin(2.0 * f - mprime)
            + 0.0005 * dsin(m + 2.0 * mprime);
    } else if (selector - 0.25).abs() < SELECTOR_TOLERANCE
        || (selector - 0.75).abs() < SELECTOR_TOLERANCE
    {
        pt += (0.1721 - 0.0004 * t) * dsin(m) + 0.0021 * dsin(2.0 * m)
            - 0.6280 * dsin(mprime)
            + 0.0089 * dsin(2.0 * mprime)
            - 0.0004 * dsin(3.0 * mprime)
            + 0.0079 * dsin(2.0 * f)
            - 0.0119 * dsin(m + mprime)
            - 0.0047 * dsin(m - mprime)
            + 0.0003 * dsin(2.0 * f + m)
            - 0.0004 * dsin(2.0 * f - m)
            - 0.0006 * dsin(2.0 * f + mprime)
            + 0.0021 * dsin(2.0 * f - mprime)
            + 0.0003 * dsin(m + 2.0 * mprime)
            + 0.0004 * dsin(m - 2.0 * mprime)
            - 0.0003 * dsin(2.0 * m + mprime);
        if selector < 0.5 {
            pt += 0.0028 - 0.0004 * dcos(m) + 0.0003 * dcos(mprime);
        } else {
            pt += -0.0028 + 0.0004 * dcos(m) - 0.0003 * dcos(mprime);
        }
    } else {
        panic!("true_phase called with invalid phase selector {selector}");
    }

    pt
}

/// Finds the five principal phases around `date`: the new moon that starts
/// the lunation containing `date`, its two quarters and full moon, and the
/// next new moon.
///
/// A `date` outside [`MIN_JULIAN_DATE`, `MAX_JULIAN_DATE`], or not finite,
/// yields five NaNs.
pub fn phase_hunt(date: f64) -> [f64; 5] {
    if !(MIN_JULIAN_DATE..=MAX_JULIAN_DATE).contains(&date) {
        debug!(date, "phase hunt date out of range");
        return [f64::NAN; 5];
    }

    let adate = date - HUNT_LEAD_DAYS;

    let (year, month, _) = julian_to_civil(adate);
    let mut k1 = ((f64::from(year) + (f64::from(month) - 1.0) * (1.0 / 12.0) - 1900.0)
        * LUNATIONS_PER_YEAR)
        .floor();

    let mut nt1 = mean_phase(adate, k1);
    let mut adate = nt1;
    for _ in 0..HUNT_MAX_STEPS {
        // The k estimate drifts far from 1900 and can start past `date`.
        if nt1 > date {
            k1 -= 1.0;
            adate -= SYNODIC_MONTH;
            nt1 = mean_phase(adate, k1);
            continue;
        }

        adate += SYNODIC_MONTH;
        let k2 = k1 + 1.0;
        let nt2 = mean_phase(adate, k2);
        if nt2 > date {
            debug!(date, k1, "phase hunt bracketed lunation");
            return [
                true_phase(k1, Quarter::NewMoon.selector()),
                true_phase(k1, Quarter::FirstQuarter.selector()),
                true_phase(k1, Quarter::FullMoon.selector()),
                true_phase(k1, Quarter::LastQuarter.selector()),
                true_phase(k2, Quarter::NewMoon.selector()),
            ];
        }
        nt1 = nt2;
        k1 = k2;
    }

    warn!(date, steps = HUNT_MAX_STEPS, "phase hunt hit step cap");
    [f64::NAN; 5]
}

//! Lunation boundaries and Brown Lunation Numbers.
//!
//! [`LunationBoundaries::at`] runs the phase hunt on the 0h Julian Date of
//! an instant and numbers the bracketed cycle.

use crate::hunt::phase_hunt;
use moon_core::constants::{LUNATION_BASE_JD, SYNODIC_MONTH};
use moon_time::{Instant, JulianDate};

/// Brown Lunation Number of the lunation that starts at `new_moon_jd`.
///
/// Lunation 1 began on 1923 January 17. The week of slack absorbs the
/// difference between true and mean new moons.
pub fn lunation_number(new_moon_jd: f64) -> i64 {
    (((new_moon_jd + 7.0) - LUNATION_BASE_JD) / SYNODIC_MONTH).floor() as i64 + 1
}

/// The principal phases of the lunation containing an instant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunationBoundaries {
    pub instant: Instant,
    pub timestamp: Option<i64>,
    /// Brown Lunation Number of the bracketed cycle.
    pub lunation: i64,
    pub last_new_moon: Instant,
    pub first_quarter: Instant,
    pub full_moon: Instant,
    pub last_quarter: Instant,
    pub next_new_moon: Instant,
}

impl LunationBoundaries {
    /// Runs the phase hunt on the 0h Julian Date of `instant`.
    pub fn at(instant: Instant) -> Self {
        let phases = phase_hunt(instant.julian_date().zero_hour_variant());
        let [last_new_moon, first_quarter, full_moon, last_quarter, next_new_moon] =
            phases.map(|jd| Instant::from_julian_date(JulianDate::new(jd)));

        Self {
            instant,
            timestamp: instant.timestamp(),
            lunation: lunation_number(phases[0]),
            last_new_moon,
            first_quarter,
            full_moon,
            last_quarter,
            next_new_moon,
        }
    }

    /// Lunation number that begins at `next_new_moon`.
    pub fn next_lunation(&self) -> i64 {
        self.lunation + 1
    }

    /// The five phase instants in chronological order.
    pub fn phases(&self) -> [Instant; 5] {
        [
            self.last_new_moon,
            self.first_quarter,
            self.full_moon,
            self.last_quarter,
            self.next_new_moon,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moon_core::test_helpers::assert_close;
    use moon_time::UtcDateTime;

    #[test]
    fn test_lunation_number() {
        assert_eq!(lunation_number(2_449_777.993_024_320_3), 893);
        assert_eq!(lunation_number(2_449_807.590_823_359_3), 894);
        assert_eq!(lunation_number(LUNATION_BASE_JD), 1);
    }

    #[test]
    fn test_boundaries_reference() {
        let cal = LunationBoundaries::at(Instant::from_timestamp(794_886_000).unwrap());
        assert_eq!(cal.lunation, 893);
        assert_eq!(cal.next_lunation(), 894);
        assert_eq!(cal.timestamp, Some(794_886_000));

        let expected = [
            (2_449_777.993_024_320_3, (1995, 3, 1, 11, 49, 57), 3),
            (2_449_785.925_942_567_6, (1995, 3, 9, 10, 13, 21), 4),
            (2_449_793.560_731_158_6, (1995, 3, 17, 1, 27, 27), 5),
            (2_449_800.341_072_181_2, (1995, 3, 23, 20, 11, 9), 4),
            (2_449_807.590_823_359_3, (1995, 3, 31, 2, 10, 47), 5),
        ];
        for (phase, (jd, (y, mo, d, h, mi, s), weekday)) in cal.phases().iter().zip(expected) {
            assert_close(phase.julian_date().to_f64(), jd, 1e-8);
            assert_eq!(phase.utc(), UtcDateTime::from_ymdhms(y, mo, d, h, mi, s));
            assert_eq!(phase.utc().weekday(), weekday);
        }
    }

    #[test]
    fn test_phases_strictly_increase() {
        let mut ts = 0_i64;
        while ts < 2_000_000_000 {
            let cal = LunationBoundaries::at(Instant::from_timestamp(ts).unwrap());
            let jds = cal.phases().map(|p| p.julian_date().to_f64());
            assert!(jds.windows(2).all(|w| w[0] < w[1]));
            assert_eq!(lunation_number(jds[4]), cal.next_lunation());
            ts += 12_345_678;
        }
    }
}

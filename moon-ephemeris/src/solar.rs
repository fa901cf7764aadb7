//! Equinoxes and solstices.
//!
//! Meeus, *Astronomical Algorithms*, chapter 27: a mean instant from a
//! quartic in the year, refined by a 24-term periodic series. Good to about
//! a minute for years -1000 to +3000. Results are Julian Ephemeris Days and
//! are used as UTC without a ΔT correction.

use moon_core::math::dcos;
use moon_time::{Instant, JulianDate};
use std::fmt;

const J2000_JD: f64 = 2_451_545.0;

/// Amplitude, phase (degrees) and rate (degrees per Julian century).
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, f64); 24] = [
    (485.0, 324.96,   1_934.136),
    (203.0, 337.23,  32_964.467),
    (199.0, 342.08,      20.186),
    (182.0,  27.85, 445_267.112),
    (156.0,  73.14,  45_036.886),
    (136.0, 171.52,  22_518.443),
    ( 77.0, 222.54,  65_928.934),
    ( 74.0, 296.72,   3_034.906),
    ( 70.0, 243.58,   9_037.513),
    ( 58.0, 119.81,  33_718.147),
    ( 52.0, 297.17,     150.678),
    ( 50.0,  21.02,   2_281.226),
    ( 45.0, 247.54,  29_929.562),
    ( 44.0, 325.15,  31_555.956),
    ( 29.0,  60.93,   4_443.417),
    ( 18.0, 155.12,  67_555.328),
    ( 17.0, 288.79,   4_562.452),
    ( 16.0, 198.04,  62_894.029),
    ( 14.0, 199.76,  31_436.921),
    ( 12.0,  95.39,  14_577.848),
    ( 12.0, 287.11,  31_931.756),
    ( 12.0, 320.81,  34_777.259),
    (  9.0, 227.73,   1_222.114),
    (  8.0,  15.45,  16_859.074),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEvent {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SolarEvent {
    pub const ALL: [SolarEvent; 4] = [
        SolarEvent::MarchEquinox,
        SolarEvent::JuneSolstice,
        SolarEvent::SeptemberEquinox,
        SolarEvent::DecemberSolstice,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolarEvent::MarchEquinox => "March equinox",
            SolarEvent::JuneSolstice => "June solstice",
            SolarEvent::SeptemberEquinox => "September equinox",
            SolarEvent::DecemberSolstice => "December solstice",
        }
    }

    /// Quartic coefficients of the mean instant, years -1000 to +1000.
    #[rustfmt::skip]
    fn early_coefficients(self) -> [f64; 5] {
        match self {
            SolarEvent::MarchEquinox =>
                [1_721_139.291_89, 365_242.137_40,  0.061_34,  0.001_11, -0.000_71],
            SolarEvent::JuneSolstice =>
                [1_721_233.254_01, 365_241.725_62, -0.053_23,  0.009_07,  0.000_25],
            SolarEvent::SeptemberEquinox =>
                [1_721_325.704_55, 365_242.495_58, -0.116_77, -0.002_97,  0.000_74],
            SolarEvent::DecemberSolstice =>
                [1_721_414.399_87, 365_242.882_57, -0.007_69, -0.009_33, -0.000_06],
        }
    }

    /// Quartic coefficients of the mean instant, years +1000 to +3000.
    #[rustfmt::skip]
    fn late_coefficients(self) -> [f64; 5] {
        match self {
            SolarEvent::MarchEquinox =>
                [2_451_623.809_84, 365_242.374_04,  0.051_69, -0.004_11, -0.000_57],
            SolarEvent::JuneSolstice =>
                [2_451_716.567_67, 365_241.626_03,  0.003_25,  0.008_88, -0.000_30],
            SolarEvent::SeptemberEquinox =>
                [2_451_810.217_15, 365_242.017_67, -0.115_75,  0.003_37,  0.000_78],
            SolarEvent::DecemberSolstice =>
                [2_451_900.059_52, 365_242.740_49, -0.062_23, -0.008_23,  0.000_32],
        }
    }
}

impl fmt::Display for SolarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Julian Date of `event` in `year`.
pub fn solar_event(year: i32, event: SolarEvent) -> f64 {
    let (y, c) = if year <= 1000 {
        (f64::from(year) / 1000.0, event.early_coefficients())
    } else {
        ((f64::from(year) - 2000.0) / 1000.0, event.late_coefficients())
    };
    let y2 = y * y;
    let y3 = y2 * y;
    let y4 = y3 * y;
    let jde0 = c[0] + c[1] * y + c[2] * y2 + c[3] * y3 + c[4] * y4;

    let t = (jde0 - J2000_JD) / 36_525.0;
    let w = 35_999.373 * t - 2.47;
    let dl = 1.0 + 0.033_4 * dcos(w) + 0.000_7 * dcos(2.0 * w);

    let s = PERIODIC_TERMS
        .iter()
        .fold(0.0, |acc, &(a, b, rate)| acc + a * dcos(b + rate * t));

    jde0 + (0.000_01 * s) / dl
}

/// The equinoxes and solstices of one year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunCalendar {
    pub year: i32,
    pub march_equinox: Instant,
    pub june_solstice: Instant,
    pub september_equinox: Instant,
    pub december_solstice: Instant,
}

impl SunCalendar {
    pub fn for_year(year: i32) -> Self {
        let at = |event| Instant::from_julian_date(JulianDate::new(solar_event(year, event)));
        Self {
            year,
            march_equinox: at(SolarEvent::MarchEquinox),
            june_solstice: at(SolarEvent::JuneSolstice),
            september_equinox: at(SolarEvent::SeptemberEquinox),
            december_solstice: at(SolarEvent::DecemberSolstice),
        }
    }

    /// `(event, instant)` pairs in calendar order.
    pub fn events(&self) -> [(SolarEvent, Instant); 4] {
        [
            (SolarEvent::MarchEquinox, self.march_equinox),
            (SolarEvent::JuneSolstice, self.june_solstice),
            (SolarEvent::SeptemberEquinox, self.september_equinox),
            (SolarEvent::DecemberSolstice, self.december_solstice),
        ]
    }
}

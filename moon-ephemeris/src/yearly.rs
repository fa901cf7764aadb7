use crate::lunation::LunationBoundaries;
use crate::solar::{solar_event, SolarEvent};
use moon_time::constants::{MAX_YEAR, MIN_YEAR};
use moon_time::{Instant, JulianDate, UtcDateTime};
use std::fmt;
use tracing::{debug, warn};

/// A calendar year plus the day before it spans at most 14 lunations.
const SCAN_MAX_LUNATIONS: usize = 16;

/// Traditional full-moon names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FullMoonName {
    Wolf,
    Snow,
    Worm,
    Pink,
    Flower,
    Strawberry,
    Buck,
    Sturgeon,
    Corn,
    Hunters,
    Beaver,
    Cold,
    /// Second full moon in one calendar month.
    Blue,
    /// Full moon nearest the September equinox.
    Harvest,
}

impl FullMoonName {
    /// Month name for a full moon in `month` (1-12).
    pub fn for_month(month: u8) -> Option<Self> {
        let name = match month {
            1 => FullMoonName::Wolf,
            2 => FullMoonName::Snow,
            3 => FullMoonName::Worm,
            4 => FullMoonName::Pink,
            5 => FullMoonName::Flower,
            6 => FullMoonName::Strawberry,
            7 => FullMoonName::Buck,
            8 => FullMoonName::Sturgeon,
            9 => FullMoonName::Corn,
            10 => FullMoonName::Hunters,
            11 => FullMoonName::Beaver,
            12 => FullMoonName::Cold,
            _ => return None,
        };
        Some(name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FullMoonName::Wolf => "Wolf Moon",
            FullMoonName::Snow => "Snow Moon",
            FullMoonName::Worm => "Worm Moon",
            FullMoonName::Pink => "Pink Moon",
            FullMoonName::Flower => "Flower Moon",
            FullMoonName::Strawberry => "Strawberry Moon",
            FullMoonName::Buck => "Buck Moon",
            FullMoonName::Sturgeon => "Sturgeon Moon",
            FullMoonName::Corn => "Corn Moon",
            FullMoonName::Hunters => "Hunter's Moon",
            FullMoonName::Beaver => "Beaver Moon",
            FullMoonName::Cold => "Cold Moon",
            FullMoonName::Blue => "Blue Moon",
            FullMoonName::Harvest => "Harvest Moon",
        }
    }
}

impl fmt::Display for FullMoonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullMoon {
    pub instant: Instant,
    pub name: FullMoonName,
}

/// Every new moon and full moon whose UTC date falls in one year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearlyMoonCalendar {
    pub year: i32,
    pub new_moons: Vec<Instant>,
    pub full_moons: Vec<FullMoon>,
}

impl YearlyMoonCalendar {
    pub fn for_year(year: i32) -> Self {
        let (new_moons, full_moon_instants) = scan_year(year);
        let names = name_full_moons(year, &full_moon_instants);
        let full_moons = full_moon_instants
            .into_iter()
            .zip(names)
            .map(|(instant, name)| FullMoon { instant, name })
            .collect();

        Self {
            year,
            new_moons,
            full_moons,
        }
    }
}

/// Walks lunation by lunation from 31 December of the previous year.
///
/// Starting a day early guarantees the first `next_new_moon` seen is the
/// first new moon of `year`; moons dated in the previous year are skipped.
/// Years outside [`MIN_YEAR`, `MAX_YEAR`] yield empty lists.
fn scan_year(year: i32) -> (Vec<Instant>, Vec<Instant>) {
    let mut new_moons = Vec::with_capacity(13);
    let mut full_moons = Vec::with_capacity(13);

    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        warn!(year, "year outside supported range, no moons listed");
        return (new_moons, full_moons);
    }

    let mut jd = UtcDateTime::from_ymdhms(year - 1, 12, 31, 0, 0, 0).to_julian_date();
    for _ in 0..SCAN_MAX_LUNATIONS {
        // Whole-second instant, as if the date had been typed in.
        let instant = Instant::from_utc(UtcDateTime::from_julian_date(jd));
        let cal = LunationBoundaries::at(instant);

        let full_moon_year = cal.full_moon.utc().year;
        if full_moon_year == year {
            full_moons.push(cal.full_moon);
        } else if full_moon_year > year {
            break;
        }

        if cal.next_new_moon.utc().year == year {
            new_moons.push(cal.next_new_moon);
        }

        jd = cal.next_new_moon.julian_date().add_days(1.0);
    }

    debug!(
        year,
        new_moons = new_moons.len(),
        full_moons = full_moons.len(),
        "scanned yearly moon calendar"
    );

    (new_moons, full_moons)
}

fn name_full_moons(year: i32, full_moons: &[Instant]) -> Vec<FullMoonName> {
    let mut last_month = 0;
    let mut names: Vec<FullMoonName> = full_moons
        .iter()
        .map(|instant| {
            let month = instant.utc().month;
            let name = if month == last_month {
                FullMoonName::Blue
            } else {
                FullMoonName::for_month(month).unwrap_or(FullMoonName::Blue)
            };
            last_month = month;
            name
        })
        .collect();

    if let Some(i) = harvest_moon_index(year, full_moons) {
        names[i] = FullMoonName::Harvest;
        // The Hunter's Moon follows the Harvest Moon, in November if the
        // Harvest Moon fell in October.
        if let Some(next) = names.get_mut(i + 1) {
            *next = FullMoonName::Hunters;
        }
    }

    names
}

/// Index of the full moon closest to the September equinox.
///
/// Ties go to the earlier moon.
fn harvest_moon_index(year: i32, full_moons: &[Instant]) -> Option<usize> {
    let equinox = JulianDate::new(solar_event(year, SolarEvent::SeptemberEquinox));

    let mut best: Option<(f64, usize)> = None;
    for (i, instant) in full_moons.iter().enumerate() {
        let d = (equinox.to_f64() - instant.julian_date().to_f64()).abs();
        match best {
            Some((min_d, _)) if d >= min_d => {}
            _ => best = Some((d, i)),
        }
    }
    best.map(|(_, i)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moon_core::test_helpers::assert_close;

    fn utc_string(instant: &Instant) -> String {
        instant.utc().to_string()
    }

    #[test]
    fn test_for_month() {
        assert_eq!(FullMoonName::for_month(1), Some(FullMoonName::Wolf));
        assert_eq!(FullMoonName::for_month(12), Some(FullMoonName::Cold));
        assert_eq!(FullMoonName::for_month(0), None);
        assert_eq!(FullMoonName::for_month(13), None);
        assert_eq!(FullMoonName::Hunters.to_string(), "Hunter's Moon");
    }

    #[test]
    fn test_1995() {
        let cal = YearlyMoonCalendar::for_year(1995);
        assert_eq!(cal.new_moons.len(), 13);
        assert_close(
            cal.new_moons[0].julian_date().to_f64(),
            2_449_718.956_136_873_5,
            1e-8,
        );
        assert_eq!(utc_string(&cal.new_moons[0]), "1995-01-01T10:56:50Z");

        assert_eq!(cal.full_moons.len(), 12);
        assert_eq!(cal.full_moons[11].name, FullMoonName::Cold);

        let harvest = cal
            .full_moons
            .iter()
            .position(|m| m.name == FullMoonName::Harvest)
            .unwrap();
        assert_close(
            cal.full_moons[harvest].instant.julian_date().to_f64(),
            2_449_969.650_321_038_4,
            1e-8,
        );
        assert_eq!(
            utc_string(&cal.full_moons[harvest].instant),
            "1995-09-09T03:36:28Z"
        );
        assert_eq!(cal.full_moons[harvest + 1].name, FullMoonName::Hunters);
        assert_eq!(cal.full_moons[harvest + 1].instant.utc().month, 10);
        assert_eq!(cal.full_moons[harvest + 1].instant.utc().day, 8);
    }

    #[test]
    fn test_2023_new_moon_count() {
        assert_eq!(YearlyMoonCalendar::for_year(2023).new_moons.len(), 12);
    }

    #[test]
    fn test_2019_new_moons() {
        let cal = YearlyMoonCalendar::for_year(2019);
        assert_eq!(utc_string(&cal.new_moons[7]), "2019-08-01T03:12:55Z");
        assert_eq!(utc_string(&cal.new_moons[8]), "2019-08-30T10:38:21Z");
    }

    #[test]
    fn test_1999_blue_moons() {
        let cal = YearlyMoonCalendar::for_year(1999);
        let expected = [
            ("1999-01-02T02:51:24Z", FullMoonName::Wolf),
            ("1999-01-31T16:08:16Z", FullMoonName::Blue),
            ("1999-03-02T06:59:52Z", FullMoonName::Worm),
            ("1999-03-31T22:49:59Z", FullMoonName::Blue),
        ];
        for (moon, (utc, name)) in cal.full_moons.iter().zip(expected) {
            assert_eq!(utc_string(&moon.instant), utc);
            assert_eq!(moon.name, name);
        }
    }

    #[test]
    fn test_2001_october_harvest_moon() {
        let cal = YearlyMoonCalendar::for_year(2001);
        let expected = [
            (8, "2001-09-02T21:44:53Z", FullMoonName::Corn),
            (9, "2001-10-02T13:50:48Z", FullMoonName::Harvest),
            (10, "2001-11-01T05:43:10Z", FullMoonName::Hunters),
        ];
        for (i, utc, name) in expected {
            assert_eq!(utc_string(&cal.full_moons[i].instant), utc);
            assert_eq!(cal.full_moons[i].name, name);
        }
    }

    #[test]
    fn test_2020_thirteen_full_moons() {
        let cal = YearlyMoonCalendar::for_year(2020);
        assert_eq!(cal.full_moons.len(), 13);
        assert_eq!(utc_string(&cal.full_moons[9].instant), "2020-10-01T21:06:55Z");
        assert_eq!(cal.full_moons[9].name, FullMoonName::Harvest);
        assert_eq!(utc_string(&cal.full_moons[10].instant), "2020-10-31T14:51:30Z");
        assert_eq!(cal.full_moons[10].name, FullMoonName::Hunters);
    }

    #[test]
    fn test_moons_stay_in_year() {
        for year in [1900, 1969, 2000, 2024, 2100] {
            let cal = YearlyMoonCalendar::for_year(year);
            assert!(cal.new_moons.iter().all(|m| m.utc().year == year));
            assert!(cal.full_moons.iter().all(|m| m.instant.utc().year == year));
            assert!((12..=13).contains(&cal.new_moons.len()));
            assert!((12..=13).contains(&cal.full_moons.len()));
            assert_eq!(
                cal.full_moons
                    .iter()
                    .filter(|m| m.name == FullMoonName::Harvest)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_supported_year_limits() {
        for year in [MIN_YEAR, MAX_YEAR] {
            let cal = YearlyMoonCalendar::for_year(year);
            assert!(!cal.new_moons.is_empty() && cal.new_moons.len() <= 13, "year {}", year);
            assert!(!cal.full_moons.is_empty() && cal.full_moons.len() <= 13, "year {}", year);
            assert!(cal.new_moons.iter().all(|m| m.utc().year == year));
            assert!(cal.full_moons.iter().all(|m| m.instant.utc().year == year));
        }
    }

    #[test]
    fn test_unsupported_years_are_empty() {
        for year in [i32::MIN, MIN_YEAR - 1, MAX_YEAR + 1, i32::MAX] {
            let cal = YearlyMoonCalendar::for_year(year);
            assert_eq!(cal.year, year);
            assert!(cal.new_moons.is_empty());
            assert!(cal.full_moons.is_empty());
        }
    }

    #[test]
    fn test_harvest_moon_index_empty() {
        assert_eq!(harvest_moon_index(2000, &[]), None);
    }
}

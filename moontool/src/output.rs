//! Text and JSON rendering of the engine records.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local, Timelike, Utc};
use moon_ephemeris::{LunationBoundaries, MoonPhaseSnapshot, SunCalendar, YearlyMoonCalendar};
use moon_time::UtcDateTime;
use serde::Serialize;

/// Everything computed for one invocation.
#[derive(Debug, Serialize)]
pub struct Report {
    pub phase: MoonPhaseSnapshot,
    pub calendar: LunationBoundaries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_calendar: Option<YearlyMoonCalendar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sun_calendar: Option<SunCalendar>,
}

pub fn to_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report as JSON")
}

pub fn to_text(report: &Report) -> String {
    let local = report.phase.timestamp.and_then(local_time);

    let mut out = String::new();
    let _ = write!(out, "\n{}\n\n", phase_text(&report.phase, local.as_deref()));
    let _ = writeln!(out, "{}", calendar_text(&report.calendar));
    if let Some(sun) = &report.sun_calendar {
        let _ = writeln!(out, "\n{}", sun_calendar_text(sun));
    }
    if let Some(yearly) = &report.yearly_calendar {
        let _ = writeln!(out, "\n{}", yearly_calendar_text(yearly));
    }
    out
}

/// `Saturday   1:40:00 11 March 1995`
fn long_date_time(weekday: &str, hms: (u32, u32, u32), day: u32, month: &str, year: i32) -> String {
    let (h, m, s) = hms;
    format!("{weekday:<9} {h:>2}:{m:02}:{s:02} {day:>2} {month} {year}")
}

/// `Wednesday 11:49 UTC  1 March 1995`
fn phase_time(utc: &UtcDateTime) -> String {
    format!(
        "{:<9} {:>2}:{:02} UTC {:>2} {} {}",
        utc.weekday_name(),
        utc.hour,
        utc.minute,
        utc.day,
        utc.month_name(),
        utc.year
    )
}

fn local_time(timestamp: i64) -> Option<String> {
    let local = DateTime::<Utc>::from_timestamp(timestamp, 0)?.with_timezone(&Local);
    Some(long_date_time(
        &local.format("%A").to_string(),
        (local.hour(), local.minute(), local.second()),
        local.day(),
        &local.format("%B").to_string(),
        local.year(),
    ))
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

fn age_text(age_days: f64) -> String {
    let frac = age_days - age_days.floor();
    let days = age_days as u32;
    let hours = (24.0 * frac) as u32;
    let minutes = (1440.0 * frac) as u32 % 60;
    format!(
        "{}, {}, {}.",
        plural(days, "day"),
        plural(hours, "hour"),
        plural(minutes, "minute")
    )
}

/// The "Phase" section. `local` is the pre-rendered local time, if known.
pub fn phase_text(snapshot: &MoonPhaseSnapshot, local: Option<&str>) -> String {
    let jd = snapshot.julian_date();
    let utc = snapshot.utc();

    let mut out = String::from("Phase\n=====\n\n");
    let _ = writeln!(
        out,
        "Julian date:\t\t{:.5}   (0h variant: {:.5})",
        jd.to_f64(),
        jd.zero_hour_variant()
    );
    let _ = writeln!(
        out,
        "Universal time:\t\t{}",
        long_date_time(
            utc.weekday_name(),
            (u32::from(utc.hour), u32::from(utc.minute), u32::from(utc.second)),
            u32::from(utc.day),
            utc.month_name(),
            utc.year,
        )
    );
    if let Some(local) = local {
        let _ = writeln!(out, "Local time:\t\t{local}");
    }
    out.push('\n');

    let _ = writeln!(out, "Age of moon:\t\t{}", age_text(snapshot.age_days));
    let _ = writeln!(
        out,
        "Lunation:\t\t{:.2}%   ({} {})",
        snapshot.fraction_of_lunation * 100.0,
        snapshot.phase_icon(),
        snapshot.phase_name()
    );
    let _ = writeln!(
        out,
        "Moon phase:\t\t{:.2}%   (0% = New, 100% = Full)\n",
        snapshot.illuminated_fraction * 100.0
    );

    let _ = writeln!(
        out,
        "Moon's distance:\t{} kilometres, {:.1} Earth radii.",
        snapshot.moon_distance_km as i64,
        snapshot.moon_distance_earth_radii
    );
    let _ = writeln!(
        out,
        "Moon subtends:\t\t{:.4} degrees.\n",
        snapshot.moon_angular_diameter_deg
    );

    let _ = writeln!(
        out,
        "Sun's distance:\t\t{:.0} kilometres, {:.3} astronomical units.",
        snapshot.sun_distance_km, snapshot.sun_distance_au
    );
    let _ = write!(
        out,
        "Sun subtends:\t\t{:.4} degrees.",
        snapshot.sun_angular_diameter_deg
    );
    out
}

/// The "Moon Calendar" section.
pub fn calendar_text(calendar: &LunationBoundaries) -> String {
    let mut out = String::from("Moon Calendar\n=============\n\n");
    let _ = writeln!(
        out,
        "Last new moon:\t\t{}\tLunation: {}",
        phase_time(&calendar.last_new_moon.utc()),
        calendar.lunation
    );
    let _ = writeln!(
        out,
        "First quarter:\t\t{}",
        phase_time(&calendar.first_quarter.utc())
    );
    let _ = writeln!(out, "Full moon:\t\t{}", phase_time(&calendar.full_moon.utc()));
    let _ = writeln!(
        out,
        "Last quarter:\t\t{}",
        phase_time(&calendar.last_quarter.utc())
    );
    let _ = write!(
        out,
        "Next new moon:\t\t{}\tLunation: {}",
        phase_time(&calendar.next_new_moon.utc()),
        calendar.next_lunation()
    );
    out
}

pub fn sun_calendar_text(sun: &SunCalendar) -> String {
    let mut out = String::from("Sun Calendar\n============\n");
    for (event, instant) in sun.events() {
        // "September equinox:" is too wide for a second tab.
        let tabs = if event.name().len() >= 16 { "\t" } else { "\t\t" };
        let _ = write!(out, "\n{}:{tabs}{}", event, phase_time(&instant.utc()));
    }
    out
}

pub fn yearly_calendar_text(yearly: &YearlyMoonCalendar) -> String {
    let new_moons: Vec<String> = yearly
        .new_moons
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!("{:>2}. {:<37}", i + 1, phase_time(&m.utc()))
                .trim_end()
                .to_string()
        })
        .collect();

    let full_moons: Vec<String> = yearly
        .full_moons
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{:>2}. {:<37}   {}", i + 1, phase_time(&m.instant.utc()), m.name))
        .collect();

    format!(
        "New Moons\n=========\n\n{}\n\nFull Moons\n==========\n\n{}",
        new_moons.join("\n"),
        full_moons.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use moon_ephemeris::{compute_moon_calendar, compute_moon_phase};
    use moon_time::Instant;

    fn reference() -> Instant {
        Instant::from_timestamp(794_886_000).unwrap()
    }

    #[test]
    fn test_phase_text() {
        let snapshot = compute_moon_phase(Some(reference()));
        let expected = "Phase\n\
            =====\n\
            \n\
            Julian date:\t\t2449787.56944   (0h variant: 2449788.06944)\n\
            Universal time:\t\tSaturday   1:40:00 11 March 1995\n\
            \n\
            Age of moon:\t\t8 days, 20 hours, 41 minutes.\n\
            Lunation:\t\t30.01%   (\u{1f314} Waxing Gibbous)\n\
            Moon phase:\t\t65.48%   (0% = New, 100% = Full)\n\
            \n\
            Moon's distance:\t402304 kilometres, 63.1 Earth radii.\n\
            Moon subtends:\t\t0.4950 degrees.\n\
            \n\
            Sun's distance:\t\t148602888 kilometres, 0.993 astronomical units.\n\
            Sun subtends:\t\t0.5367 degrees.";
        assert_eq!(phase_text(&snapshot, None), expected);
    }

    #[test]
    fn test_phase_text_with_local_time() {
        let snapshot = compute_moon_phase(Some(reference()));
        let text = phase_text(&snapshot, Some("Saturday   2:40:00 11 March 1995"));
        assert!(text.contains("\nLocal time:\t\tSaturday   2:40:00 11 March 1995\n\nAge of moon:"));
    }

    #[test]
    fn test_calendar_text() {
        let calendar = compute_moon_calendar(Some(reference()));
        let expected = "Moon Calendar\n\
            =============\n\
            \n\
            Last new moon:\t\tWednesday 11:49 UTC  1 March 1995\tLunation: 893\n\
            First quarter:\t\tThursday  10:13 UTC  9 March 1995\n\
            Full moon:\t\tFriday     1:27 UTC 17 March 1995\n\
            Last quarter:\t\tThursday  20:11 UTC 23 March 1995\n\
            Next new moon:\t\tFriday     2:10 UTC 31 March 1995\tLunation: 894";
        assert_eq!(calendar_text(&calendar), expected);
    }

    #[test]
    fn test_age_text_singular_units() {
        let one = 1.0 + 1.0 / 24.0 + 1.5 / 1440.0;
        assert_eq!(age_text(one), "1 day, 1 hour, 1 minute.");
        assert_eq!(age_text(0.0), "0 days, 0 hours, 0 minutes.");
    }

    #[test]
    fn test_sun_calendar_text() {
        let text = sun_calendar_text(&SunCalendar::for_year(1995));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Sun Calendar");
        assert_eq!(lines[2], "March equinox:\t\tTuesday    2:15 UTC 21 March 1995");
        assert_eq!(lines[3], "June solstice:\t\tWednesday 20:35 UTC 21 June 1995");
        assert_eq!(lines[4], "September equinox:\tSaturday  12:14 UTC 23 September 1995");
        assert_eq!(lines[5], "December solstice:\tFriday     8:18 UTC 22 December 1995");
    }

    #[test]
    fn test_yearly_calendar_text() {
        let text = yearly_calendar_text(&YearlyMoonCalendar::for_year(1995));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "New Moons");
        assert_eq!(lines[3], " 1. Sunday    10:56 UTC  1 January 1995");
        assert!(text.contains("\n\nFull Moons\n==========\n\n"));
        assert!(text.contains("Harvest Moon"));
        assert!(lines.last().unwrap().ends_with("Cold Moon"));
    }

    #[test]
    fn test_json_report() {
        let report = Report {
            phase: compute_moon_phase(Some(reference())),
            calendar: compute_moon_calendar(Some(reference())),
            yearly_calendar: None,
            sun_calendar: None,
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["calendar"]["lunation"], 893);
        assert_eq!(value["phase"]["timestamp"], 794_886_000);
        assert!(value.get("yearly_calendar").is_none());
    }

    #[test]
    fn test_text_report_sections() {
        let report = Report {
            phase: compute_moon_phase(Some(reference())),
            calendar: compute_moon_calendar(Some(reference())),
            yearly_calendar: Some(YearlyMoonCalendar::for_year(1995)),
            sun_calendar: Some(SunCalendar::for_year(1995)),
        };
        let text = to_text(&report);
        let phase = text.find("Phase\n=====").unwrap();
        let calendar = text.find("Moon Calendar").unwrap();
        let sun = text.find("Sun Calendar").unwrap();
        let yearly = text.find("New Moons").unwrap();
        assert!(phase < calendar && calendar < sun && sun < yearly);
    }
}

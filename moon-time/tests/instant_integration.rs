use moon_core::test_helpers::{assert_close, assert_float_eq};
use moon_time::calendar::{civil_to_julian, julian_to_civil, julian_to_time_of_day};
use moon_time::{parse_instant, Instant, JulianDate, UtcDateTime};

// --- Round trips ---

#[test]
fn civil_and_julian_round_trip_within_one_second() {
    let mut jd = 2_415_020.123_456;
    while jd < 2_488_070.0 {
        let utc = UtcDateTime::from_julian_date(JulianDate::new(jd));
        if utc.hour < 24 {
            let back = utc.to_julian_date().to_f64();
            assert!(
                (back - jd).abs() * 86_400.0 <= 0.5 + 1e-3,
                "jd={} utc={} back={}",
                jd,
                utc,
                back
            );
        }
        jd += 97.377_777;
    }
}

#[test]
fn instant_views_agree() {
    for ts in [0_i64, 794_886_000, 951_782_400, 1_700_000_000, -86_400 * 365] {
        let instant = Instant::from_timestamp(ts).unwrap();
        let jd = instant.julian_date().to_f64();
        let utc = instant.utc();
        assert_eq!(julian_to_civil(jd), (utc.year, utc.month, utc.day));
        assert_eq!(julian_to_time_of_day(jd), (utc.hour, utc.minute, utc.second));
        assert_eq!(instant.timestamp(), Some(ts));
    }
}

#[test]
fn leap_day_2000() {
    // 951782400 = 2000-02-29T00:00:00Z
    let instant = Instant::from_timestamp(951_782_400).unwrap();
    assert_eq!(instant.utc(), UtcDateTime::from_ymdhms(2000, 2, 29, 0, 0, 0));
    assert_eq!(instant.utc().weekday_name(), "Tuesday");
}

// --- Entry point input forms ---

#[test]
fn all_input_forms_reach_the_same_instant() {
    let reference = Instant::from_ymdhms(1995, 3, 11, 1, 40, 0);
    for text in [
        "794886000",
        "+794886000",
        "1995-03-11T01:40:00Z",
        "1995-03-11T01:40:00",
        "1995-03-11 01:40",
        "1995-03-10T21:40:00-04:00",
    ] {
        let parsed = parse_instant(text).unwrap();
        assert_eq!(parsed.utc(), reference.utc(), "input {}", text);
        assert_float_eq(
            parsed.julian_date().to_f64(),
            reference.julian_date().to_f64(),
            0,
        );
    }

    let from_jd = parse_instant("2449787.5694444445").unwrap();
    assert_eq!(from_jd.utc(), reference.utc());
    assert_close(
        from_jd.julian_date().to_f64(),
        civil_to_julian(1995, 3, 11, 1, 40, 0.0),
        1e-9,
    );
}

#[test]
fn parse_errors_are_reported() {
    for text in ["", "  ", "1995-3", "tomorrow", "1.2.3", "1995-03-11T01:40:00+25:00"] {
        assert!(parse_instant(text).is_err(), "input {:?}", text);
    }
}

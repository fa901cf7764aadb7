//! Sun/Moon position and phase model, epoch 1980.0.
//!
//! A low-precision analytic model: the Sun follows a Keplerian orbit with
//! fixed elements, the Moon a mean orbit corrected by evection, the annual
//! equation, the equation of the centre and variation. Accuracy is a few
//! arcminutes in longitude, ample for phase and age.
//!
//! Reference: Duffett-Smith, *Practical Astronomy with Your Calculator*, 2nd ed.

use moon_core::constants::{
    EARTH_ORBIT_ECCENTRICITY, EPOCH_1980_JD, FULL_CIRCLE_DEG, MOON_ANGULAR_SIZE_DEG,
    MOON_MEAN_LONGITUDE_EPOCH, MOON_NODE_LONGITUDE_EPOCH, MOON_ORBIT_ECCENTRICITY,
    MOON_ORBIT_INCLINATION, MOON_PARALLAX_DEG, MOON_PERIGEE_LONGITUDE_EPOCH,
    MOON_SEMI_MAJOR_AXIS_KM, SUN_ANGULAR_SIZE_DEG, SUN_ECLIPTIC_LONGITUDE_EPOCH,
    SUN_ECLIPTIC_LONGITUDE_PERIGEE, SUN_SEMI_MAJOR_AXIS_KM, SYNODIC_MONTH, TROPICAL_YEAR_DAYS,
};
use moon_core::math::{dcos, dsin, fix_angle, to_degrees};
use moon_core::solve_kepler;

/// Output of [`evaluate_phase`] for one Julian Date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseInfo {
    /// Phase angle as a fraction of a full cycle, in [0, 1). 0 = new, 0.5 = full.
    pub fraction_of_lunation: f64,
    /// Illuminated fraction of the disc, 0..=1.
    pub illuminated_fraction: f64,
    /// Days since new moon, in [0, synodic month).
    pub age_days: f64,
    pub moon_distance_km: f64,
    pub moon_angular_diameter_deg: f64,
    pub sun_distance_km: f64,
    pub sun_angular_diameter_deg: f64,
}

/// Evaluates the phase model at `jd`. Total over all finite inputs.
pub fn evaluate_phase(jd: f64) -> PhaseInfo {
    let day = jd - EPOCH_1980_JD;

    // Sun
    let sun_mean_anomaly = fix_angle(
        fix_angle((FULL_CIRCLE_DEG / TROPICAL_YEAR_DAYS) * day) + SUN_ECLIPTIC_LONGITUDE_EPOCH
            - SUN_ECLIPTIC_LONGITUDE_PERIGEE,
    );
    let e = EARTH_ORBIT_ECCENTRICITY;
    let eccentric_anomaly = solve_kepler(sun_mean_anomaly, e);
    let true_anomaly =
        2.0 * to_degrees((((1.0 + e) / (1.0 - e)).sqrt() * (eccentric_anomaly / 2.0).tan()).atan());
    let sun_longitude = fix_angle(true_anomaly + SUN_ECLIPTIC_LONGITUDE_PERIGEE);

    let distance_factor = (1.0 + e * dcos(true_anomaly)) / (1.0 - e * e);
    let sun_distance_km = SUN_SEMI_MAJOR_AXIS_KM / distance_factor;
    let sun_angular_diameter_deg = distance_factor * SUN_ANGULAR_SIZE_DEG;

    // Moon
    let mean_longitude = fix_angle(13.176_396_6 * day + MOON_MEAN_LONGITUDE_EPOCH);
    let mean_anomaly =
        fix_angle(mean_longitude - 0.111_404_1 * day - MOON_PERIGEE_LONGITUDE_EPOCH);
    let node_mean_longitude = fix_angle(MOON_NODE_LONGITUDE_EPOCH - 0.052_953_9 * day);

    let evection = 1.2739 * dsin(2.0 * (mean_longitude - sun_longitude) - mean_anomaly);
    let annual_equation = 0.1858 * dsin(sun_mean_anomaly);
    let a3 = 0.37 * dsin(sun_mean_anomaly);

    let corrected_anomaly = mean_anomaly + evection - annual_equation - a3;
    let centre_equation = 6.2886 * dsin(corrected_anomaly);
    let a4 = 0.214 * dsin(2.0 * corrected_anomaly);

    let corrected_longitude = mean_longitude + evection + centre_equation - annual_equation + a4;
    let variation = 0.6583 * dsin(2.0 * (corrected_longitude - sun_longitude));
    let true_longitude = corrected_longitude + variation;

    let node_longitude = node_mean_longitude - 0.16 * dsin(sun_mean_anomaly);

    // Ecliptic coordinates; carried for completeness, not reported.
    let y = dsin(true_longitude - node_longitude) * dcos(MOON_ORBIT_INCLINATION);
    let x = dcos(true_longitude - node_longitude);
    let _ecliptic_longitude = to_degrees(y.atan2(x)) + node_longitude;
    let _ecliptic_latitude =
        to_degrees((dsin(true_longitude - node_longitude) * dsin(MOON_ORBIT_INCLINATION)).asin());

    // Phase
    let moon_age_deg = true_longitude - sun_longitude;
    let illuminated_fraction = (1.0 - dcos(moon_age_deg)) / 2.0;

    let moon_distance_km = (MOON_SEMI_MAJOR_AXIS_KM
        * (1.0 - MOON_ORBIT_ECCENTRICITY * MOON_ORBIT_ECCENTRICITY))
        / (1.0 + MOON_ORBIT_ECCENTRICITY * dcos(corrected_anomaly + centre_equation));
    let distance_fraction = moon_distance_km / MOON_SEMI_MAJOR_AXIS_KM;
    let moon_angular_diameter_deg = MOON_ANGULAR_SIZE_DEG / distance_fraction;
    let _parallax_deg = MOON_PARALLAX_DEG / distance_fraction;

    let fraction_of_lunation = fix_angle(moon_age_deg) / FULL_CIRCLE_DEG;

    PhaseInfo {
        fraction_of_lunation,
        illuminated_fraction,
        age_days: SYNODIC_MONTH * fraction_of_lunation,
        moon_distance_km,
        moon_angular_diameter_deg,
        sun_distance_km,
        sun_angular_diameter_deg,
    }
}

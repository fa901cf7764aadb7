//! Orbital elements and physical constants for the 1980.0-epoch Sun/Moon model
//!
//! All elements are referred to the epoch 1980 January 0.0 (JD 2444238.5).
//! They are fixed first-order values; the model built on them is good to
//! roughly ten minutes of time, not to arcseconds.

pub const PI: f64 = std::f64::consts::PI;

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Degrees in a full revolution.
pub const FULL_CIRCLE_DEG: f64 = 360.0;

// Epoch

/// 1980 January 0.0, the epoch of every element below.
pub const EPOCH_1980_JD: f64 = 2_444_238.5;

/// Length of the tropical year in days, used for the Sun's mean motion.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

// Sun's apparent orbit

/// Ecliptic longitude of the Sun at epoch 1980.0, degrees.
pub const SUN_ECLIPTIC_LONGITUDE_EPOCH: f64 = 278.833_540;

/// Ecliptic longitude of the Sun at perigee, degrees.
pub const SUN_ECLIPTIC_LONGITUDE_PERIGEE: f64 = 282.596_403;

/// Eccentricity of Earth's orbit.
pub const EARTH_ORBIT_ECCENTRICITY: f64 = 0.016_718;

/// Semi-major axis of Earth's orbit in kilometres.
///
/// Also used as the kilometre length of one astronomical unit when
/// reporting the Sun's distance.
pub const SUN_SEMI_MAJOR_AXIS_KM: f64 = 1.495_985e8;

/// Sun's angular size in degrees at semi-major axis distance.
pub const SUN_ANGULAR_SIZE_DEG: f64 = 0.533_128;

// Moon's orbit

/// Moon's mean longitude at the epoch, degrees.
pub const MOON_MEAN_LONGITUDE_EPOCH: f64 = 64.975_464;

/// Mean longitude of the perigee at the epoch, degrees.
pub const MOON_PERIGEE_LONGITUDE_EPOCH: f64 = 349.383_063;

/// Mean longitude of the ascending node at the epoch, degrees.
pub const MOON_NODE_LONGITUDE_EPOCH: f64 = 151.950_429;

/// Inclination of the Moon's orbit to the ecliptic, degrees.
pub const MOON_ORBIT_INCLINATION: f64 = 5.145_396;

/// Eccentricity of the Moon's orbit.
pub const MOON_ORBIT_ECCENTRICITY: f64 = 0.054_900;

/// Moon's angular size in degrees at semi-major axis distance.
pub const MOON_ANGULAR_SIZE_DEG: f64 = 0.5181;

/// Semi-major axis of the Moon's orbit in kilometres.
pub const MOON_SEMI_MAJOR_AXIS_KM: f64 = 384_401.0;

/// Moon's horizontal parallax in degrees at semi-major axis distance.
pub const MOON_PARALLAX_DEG: f64 = 0.9507;

/// Mean synodic month (new Moon to new Moon) in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_68;

/// Base date of E. W. Brown's numbered series of lunations.
///
/// Lunation 1 is the new Moon of 1923 January 17 (about 2:41 UTC).
pub const LUNATION_BASE_JD: f64 = 2_423_436.0;

// Earth

/// Equatorial radius of the Earth in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.16;

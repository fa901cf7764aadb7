//! Newton-Raphson solution of Kepler's equation `M = E - e sin E`.
//!
//! The solver starts from `E0 = M` and iterates
//!
//! ```text
//! E <- E - (E - e sin E - M) / (1 - e cos E)
//! ```
//!
//! until the residual of the previous step is within [`KEPLER_TOLERANCE`].
//! For the eccentricities this engine feeds it (Earth ~0.0167, Moon ~0.0549)
//! that takes three or four steps.

use tracing::{trace, warn};

use crate::constants::DEG_TO_RAD;

/// Residual at which the iteration stops, in radians.
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Upper bound on Newton steps. Only non-finite or hyperbolic input gets
/// this far.
pub const KEPLER_MAX_ITERATIONS: u32 = 100;

/// Solves Kepler's equation.
///
/// Takes the mean anomaly in degrees and returns the eccentric anomaly in
/// radians.
///
/// ```
/// use moon_core::kepler::solve_kepler;
///
/// let e = solve_kepler(111.615376, 0.016718);
/// assert!((e - 1.9635011880995301).abs() < 1e-9);
/// ```
pub fn solve_kepler(mean_anomaly_deg: f64, eccentricity: f64) -> f64 {
    let m = mean_anomaly_deg * DEG_TO_RAD;
    let mut e = m;

    for iteration in 1..=KEPLER_MAX_ITERATIONS {
        let delta = e - eccentricity * e.sin() - m;
        e -= delta / (1.0 - eccentricity * e.cos());
        if delta.abs() <= KEPLER_TOLERANCE {
            trace!(iteration, eccentricity, "kepler converged");
            return e;
        }
    }

    warn!(
        mean_anomaly_deg,
        eccentricity,
        iterations = KEPLER_MAX_ITERATIONS,
        "kepler solver hit iteration cap"
    );
    e
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{EARTH_ORBIT_ECCENTRICITY, MOON_ORBIT_ECCENTRICITY};
    use crate::test_helpers::assert_close;

    #[test]
    fn test_reference_value() {
        let e = solve_kepler(111.615376, 0.016718);
        assert_close(e, 1.9635011880995301, 1e-7);
    }

    #[test]
    fn test_circular_orbit_is_identity() {
        for m in [0.0, 45.0, 90.0, 180.0, 270.0] {
            assert_close(solve_kepler(m, 0.0), m * DEG_TO_RAD, 1e-12);
        }
    }

    #[test]
    fn test_satisfies_kepler_equation() {
        for ecc in [EARTH_ORBIT_ECCENTRICITY, MOON_ORBIT_ECCENTRICITY] {
            for step in 0..36 {
                let m_deg = step as f64 * 10.0;
                let e = solve_kepler(m_deg, ecc);
                let residual = e - ecc * e.sin() - m_deg * DEG_TO_RAD;
                assert!(
                    residual.abs() < 1e-9,
                    "M={} e={} residual={}",
                    m_deg,
                    ecc,
                    residual
                );
            }
        }
    }

    #[test]
    fn test_apsides_are_fixed_points() {
        assert_close(solve_kepler(0.0, MOON_ORBIT_ECCENTRICITY), 0.0, 1e-12);
        assert_close(
            solve_kepler(180.0, MOON_ORBIT_ECCENTRICITY),
            std::f64::consts::PI,
            1e-12,
        );
    }

    #[test]
    fn test_non_finite_input_terminates() {
        assert!(solve_kepler(f64::NAN, 0.5).is_nan());
    }
}

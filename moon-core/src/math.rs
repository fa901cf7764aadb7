//! Degree-based trigonometry and angle fixing.
//!
//! The 1980.0 model and the phase-boundary series are written in degrees.
//! These helpers convert at the call boundary so the formulas can be read
//! exactly as they appear in the literature.
//!
//! [`fix_angle`] uses floor semantics, not Rust's `%` remainder, so negative
//! inputs land in [0, 360):
//!
//! ```
//! use moon_core::math::fix_angle;
//!
//! assert_eq!(fix_angle(-350.0), 10.0);
//! assert_eq!(fix_angle(400.0), 40.0);
//! ```

use crate::constants::{DEG_TO_RAD, FULL_CIRCLE_DEG, RAD_TO_DEG};

/// Reduces an angle in degrees to [0, 360).
#[inline]
pub fn fix_angle(a: f64) -> f64 {
    let r = a - FULL_CIRCLE_DEG * libm::floor(a / FULL_CIRCLE_DEG);
    // Tiny negative angles round up to exactly 360.
    if r >= FULL_CIRCLE_DEG {
        0.0
    } else {
        r
    }
}

#[inline]
pub fn to_radians(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

#[inline]
pub fn to_degrees(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

/// Sine of an angle given in degrees.
#[inline]
pub fn dsin(deg: f64) -> f64 {
    to_radians(deg).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn dcos(deg: f64) -> f64 {
    to_radians(deg).cos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::assert_close;

    #[test]
    fn test_fix_angle() {
        assert_close(fix_angle(-400.0), 320.0, 1e-9);
        assert_close(fix_angle(-350.0), 10.0, 1e-9);
        assert_close(fix_angle(-0.0), 0.0, 1e-9);
        assert_close(fix_angle(350.0), 350.0, 1e-9);
        assert_close(fix_angle(400.0), 40.0, 1e-9);
    }

    #[test]
    fn test_fix_angle_range() {
        for a in [
            -1.0e6,
            -720.0,
            -360.0,
            -1e-9,
            -1e-14,
            -f64::MIN_POSITIVE,
            0.0,
            359.999,
            360.0,
            1.0e6,
        ] {
            let fixed = fix_angle(a);
            assert!((0.0..360.0).contains(&fixed), "{} -> {}", a, fixed);
        }
    }

    #[test]
    fn test_fix_angle_tiny_negative_wraps_to_zero() {
        assert_eq!(fix_angle(-1e-14), 0.0);
        assert_eq!(fix_angle(-f64::MIN_POSITIVE), 0.0);
    }

    #[test]
    fn test_radian_conversions() {
        assert_close(to_radians(-400.0), -6.981317007977318, 1e-12);
        assert_close(to_radians(350.0), 6.1086523819801535, 1e-12);
        assert_close(to_degrees(-6.1086523819801535), -350.0, 1e-9);
        assert_close(to_degrees(6.981317007977318), 400.0, 1e-9);
    }

    #[test]
    fn test_dsin() {
        assert_close(dsin(-400.0), -0.6427876096865393, 1e-12);
        assert_close(dsin(-350.0), 0.1736481776669304, 1e-12);
        assert_close(dsin(-0.0), 0.0, 1e-12);
        assert_close(dsin(350.0), -0.1736481776669304, 1e-12);
        assert_close(dsin(400.0), 0.6427876096865393, 1e-12);
    }

    #[test]
    fn test_dcos() {
        assert_close(dcos(-400.0), 0.7660444431189781, 1e-12);
        assert_close(dcos(-350.0), 0.984807753012208, 1e-12);
        assert_close(dcos(-0.0), 1.0, 1e-12);
        assert_close(dcos(350.0), 0.984807753012208, 1e-12);
        assert_close(dcos(400.0), 0.7660444431189781, 1e-12);
    }
}

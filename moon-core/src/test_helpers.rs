//! Float assertions shared by the workspace test suites.

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

/// Asserts `a` and `b` are within `max_ulp` units in the last place.
#[track_caller]
pub fn assert_float_eq(a: f64, b: f64, max_ulp: u64) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite());
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        actual.is_finite() && expected.is_finite(),
        "non-finite value: actual={} expected={}",
        actual,
        expected
    );
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "actual={} expected={} diff={:e} exceeds tolerance {:e}",
        actual,
        expected,
        diff,
        tol
    );
}

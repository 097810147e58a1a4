//! Standard normal CDF from a truncated Maclaurin series for erf.
//!
//! The series is summed over a fixed [`ERF_TERMS`] terms, it does not adapt
//! to the argument. Each term is derived from the previous one, which keeps
//! `i!` and `z^(2i+1)` from overflowing on their own, but the alternating sum
//! still cancels badly as |z| grows: [`phi_cdf`] is accurate to about 1e-9
//! for |x| <= [`SERIES_VALID_RANGE`], drifts past it and is meaningless past
//! |x| ~ 9. Nothing is clamped and no error is raised; callers needing the far
//! tail should not rely on it.

use crate::consts::{ERF_TERMS, SERIES_VALID_RANGE};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_2_SQRT_PI};

/// `erf(z) = 2/sqrt(pi) * sum_{i<ERF_TERMS} (-1)^i z^(2i+1) / (i! (2i+1))`
pub fn erf(z: f64) -> f64 {
    let neg_z2 = -z * z;
    // (-1)^i z^(2i+1) / i!
    let mut term = z;
    let mut sum = z;
    for i in 1..ERF_TERMS {
        term *= neg_z2 / i as f64;
        sum += term / (2 * i + 1) as f64;
    }
    FRAC_2_SQRT_PI * sum
}

/// Standard normal CDF, `0.5 * (1 + erf(x / sqrt(2)))`.
#[inline]
pub fn phi_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x * FRAC_1_SQRT_2))
}

/// Whether `x` lies inside the range where [`phi_cdf`] is trustworthy.
#[inline]
pub fn in_series_range(x: f64) -> bool {
    x.abs() <= SERIES_VALID_RANGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_phi_at_zero() {
        assert_abs_diff_eq!(phi_cdf(0.0), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_phi_reference_values() {
        assert_abs_diff_eq!(phi_cdf(1.0), 0.841_344_746_068_543, epsilon = 1e-9);
        assert_abs_diff_eq!(phi_cdf(-1.96), 0.024_997_895_148_220, epsilon = 1e-9);
        assert_abs_diff_eq!(phi_cdf(3.0), 0.998_650_101_968_370, epsilon = 1e-9);
    }

    #[test]
    fn test_phi_symmetry() {
        for &x in &[0.25, 0.5, 1.0, 2.0, 3.5, 5.0] {
            assert_abs_diff_eq!(phi_cdf(x) + phi_cdf(-x), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_phi_monotone() {
        let mut prev = phi_cdf(-5.0);
        for k in 1..=200 {
            let x = -5.0 + 0.05 * k as f64;
            let p = phi_cdf(x);
            assert!(p >= prev - 1e-10, "Phi({}) = {} < {}", x, p, prev);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn test_erf_odd() {
        assert_eq!(erf(0.0), 0.0);
        assert_abs_diff_eq!(erf(0.5), 0.520_499_877_813_047, epsilon = 1e-12);
        assert_abs_diff_eq!(erf(-0.5), -erf(0.5), epsilon = 1e-15);
    }

    #[test]
    fn test_series_range() {
        assert!(in_series_range(-6.0));
        assert!(in_series_range(4.0));
        assert!(!in_series_range(6.5));
        assert!(!in_series_range(f64::NAN));
    }
}

use crate::consts::FRAC_1_SQRT_2PI;

/// Exponential density `rate * exp(-rate * x)`. Meaningful for `x >= 0`,
/// `rate > 0`; other inputs are evaluated as-is.
#[inline]
pub fn expo(x: f64, rate: f64) -> f64 {
    rate * (-rate * x).exp()
}

/// Standard normal density.
#[inline]
pub fn phi(x: f64) -> f64 {
    (-0.5 * x * x).exp() * FRAC_1_SQRT_2PI
}

/// Inverse CDF of `Exponential(rate)`, for `u` in `[0, 1)`.
#[inline]
pub fn inverse_expo(u: f64, rate: f64) -> f64 {
    -(1.0 - u).ln() / rate
}

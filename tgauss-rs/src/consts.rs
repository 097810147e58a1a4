/// Number of Maclaurin terms summed by [`crate::cdf::erf`].
pub const ERF_TERMS: usize = 125;

/// |x| beyond which [`crate::cdf::phi_cdf`] loses its accuracy.
pub const SERIES_VALID_RANGE: f64 = 6.0;

pub const SQRT_TWO_PI: f64 = 2.506_628_274_631_000_5;
pub const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Upper bound on the rates evaluated by [`crate::proposal::sweep_rates`].
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

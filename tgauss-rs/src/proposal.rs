//! Exponential proposal tuning for the Gaussian tail above `c`.
//!
//! The proposal is `c + Exponential(rate)`. `rate = (c + sqrt(c^2 + 4)) / 2`
//! minimises the expected number of rejections per accepted sample, and the
//! normalizing constant is the supremum of `phi(x + c) / expo(x, rate)` over
//! `x >= 0`.

use crate::{
    cdf::phi_cdf,
    consts::{MAX_SWEEP_POINTS, SQRT_TWO_PI},
    error::{Result, SamplerError},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProposalParameters {
    /// Exponential rate, positive for every finite `c`
    pub rate: f64,
    /// `1 - Phi(c)`
    pub tail: f64,
    /// Envelope bound `b` of the normalised target over the proposal
    pub bound: f64,
    /// `tail * bound`
    pub normalizing_constant: f64,
}

impl ProposalParameters {
    /// True when the parameters can drive a rejection loop.
    pub fn is_usable(&self) -> bool {
        self.rate.is_finite()
            && self.rate > 0.0
            && self.normalizing_constant.is_finite()
            && self.normalizing_constant > 0.0
    }
}

#[inline]
pub fn optimal_rate(c: f64) -> f64 {
    (c + (c * c + 4.0).sqrt()) / 2.0
}

/// Tune the proposal for truncation point `c`.
///
/// No validation: for large `c` the series value of `1 - Phi(c)` collapses
/// and the result carries NaN or infinity. See
/// [`crate::TruncatedGaussian::new`] for the checked path.
pub fn tune(c: f64) -> ProposalParameters {
    let tail = 1.0 - phi_cdf(c);
    let rate = optimal_rate(c);
    let bound = ((rate * rate - 2.0 * rate * c) / 2.0).exp() / (SQRT_TWO_PI * rate * tail);
    ProposalParameters {
        rate,
        tail,
        bound,
        normalizing_constant: tail * bound,
    }
}

#[inline]
fn objective(rate: f64, c: f64, tail: f64) -> f64 {
    SQRT_TWO_PI * rate * tail / ((rate * rate - 2.0 * rate * c) / 2.0).exp()
}

/// Acceptance probability `1 / b` of a proposal with the given `rate` at `c`.
/// Maximised at [`optimal_rate`].
pub fn rejection_objective(rate: f64, c: f64) -> f64 {
    objective(rate, c, 1.0 - phi_cdf(c))
}

/// Evaluate [`rejection_objective`] on `start, start + step, ...` up to but
/// excluding `stop`, returning `(rate, objective)` pairs. At most
/// [`MAX_SWEEP_POINTS`] rates are evaluated; denser ranges are rejected.
pub fn sweep_rates(c: f64, start: f64, stop: f64, step: f64) -> Result<Vec<(f64, f64)>> {
    if !(step.is_finite() && step > 0.0 && start.is_finite() && stop.is_finite())
        || stop < start
    {
        return Err(SamplerError::InvalidSweep { start, stop, step });
    }
    let tail = 1.0 - phi_cdf(c);
    let count = ((stop - start) / step).ceil();
    if count > MAX_SWEEP_POINTS as f64 {
        return Err(SamplerError::InvalidSweep { start, stop, step });
    }
    let count = count as usize;
    Ok((0..count)
        .map(|i| start + i as f64 * step)
        .take_while(|&rate| rate < stop)
        .map(|rate| (rate, objective(rate, c, tail)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::{expo, phi};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_tune_at_zero() {
        let p = tune(0.0);
        assert_eq!(p.rate, 1.0);
        assert_abs_diff_eq!(p.tail, 0.5, epsilon = 1e-9);
        // exp(1/2) / sqrt(2 pi)
        assert_relative_eq!(
            p.normalizing_constant,
            0.5f64.exp() / SQRT_TWO_PI,
            max_relative = 1e-9
        );
        assert!(p.is_usable());
    }

    #[test]
    fn test_rate_positive() {
        for &c in &[-50.0, -8.0, -1.0, 0.0, 0.5, 3.0, 8.0, 50.0] {
            let rate = optimal_rate(c);
            assert!(rate > 0.0, "rate({}) = {}", c, rate);
            assert!(rate >= c);
        }
    }

    #[test]
    fn test_constant_is_envelope_supremum() {
        for &c in &[-2.0, 0.0, 1.0, 2.5, 4.0] {
            let p = tune(c);
            // The ratio peaks at x = rate - c
            let x = p.rate - c;
            let peak = phi(x + c) / expo(x, p.rate);
            assert_relative_eq!(peak, p.normalizing_constant, max_relative = 1e-6);
            for k in 0..100 {
                let x = 0.1 * k as f64;
                assert!(phi(x + c) / expo(x, p.rate) <= p.normalizing_constant * (1.0 + 1e-9));
            }
        }
    }

    #[test]
    fn test_objective_inverse_of_bound() {
        let c = 1.5;
        let p = tune(c);
        assert_relative_eq!(
            rejection_objective(p.rate, c),
            1.0 / p.bound,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_sweep_peaks_at_optimal_rate() {
        let c = 0.0;
        let curve = sweep_rates(c, 0.0, 2.0, 0.01).unwrap();
        assert_eq!(curve.len(), 200);
        assert_eq!(curve[0], (0.0, 0.0));
        let (best, _) = curve
            .iter()
            .copied()
            .fold((0.0, f64::MIN), |acc, p| if p.1 > acc.1 { p } else { acc });
        assert_abs_diff_eq!(best, optimal_rate(c), epsilon = 0.011);
    }

    #[test]
    fn test_sweep_rejects_bad_range() {
        assert!(matches!(
            sweep_rates(0.0, 0.0, 2.0, 0.0),
            Err(SamplerError::InvalidSweep { .. })
        ));
        assert!(sweep_rates(0.0, 2.0, 1.0, 0.1).is_err());
        assert!(sweep_rates(0.0, 0.0, f64::INFINITY, 0.1).is_err());
        assert!(sweep_rates(0.0, 1.0, 1.0, 0.1).unwrap().is_empty());
        // Valid step, far too many points
        assert!(matches!(
            sweep_rates(0.0, 0.0, 2.0, 1e-300),
            Err(SamplerError::InvalidSweep { .. })
        ));
        let curve = sweep_rates(0.0, 0.0, 1.0, 1e-5).unwrap();
        assert!(curve.len() <= MAX_SWEEP_POINTS);
        assert!(curve.len() >= 99_999);
    }

    #[test]
    fn test_tune_degenerates_far_in_tail() {
        // The series value of Phi is no longer usable this far out
        let p = tune(40.0);
        assert!(!p.is_usable());
    }
}

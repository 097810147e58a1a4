use crate::{
    cdf::in_series_range,
    density::{expo, inverse_expo, phi},
    error::{Result, SamplerError},
    proposal::{ProposalParameters, tune},
};
use rand::{
    Rng,
    distr::{Distribution, Uniform},
};
use tracing::{debug, warn};

/// Counters for one sampling call.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    pub proposed: u64,
    pub accepted: usize,
}

impl SampleStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            return 0.0;
        }
        self.accepted as f64 / self.proposed as f64
    }
}

/// Standard normal restricted to `x > c`, sampled by acceptance-rejection
/// from `c + Exponential(rate)`.
///
/// The proposal is tuned once in [`TruncatedGaussian::new`]. Sampling loops
/// until enough candidates are accepted, which happens almost surely; an
/// optional iteration cap turns a runaway loop into
/// [`SamplerError::IterationLimit`].
#[derive(Clone, Debug)]
pub struct TruncatedGaussian {
    c: f64,
    params: ProposalParameters,
    uniform: Uniform<f64>,
    max_iterations: Option<u64>,
}

impl TruncatedGaussian {
    pub fn new(c: f64) -> Result<Self> {
        if !c.is_finite() {
            return Err(SamplerError::InvalidTruncation(c));
        }
        let params = tune(c);
        if !params.is_usable() {
            return Err(SamplerError::DegenerateProposal {
                c,
                rate: params.rate,
                normalizing_constant: params.normalizing_constant,
            });
        }
        if !in_series_range(c) {
            warn!(c, tail = params.tail, "truncation point outside the Phi series range");
        }
        debug!(
            c,
            rate = params.rate,
            tail = params.tail,
            normalizing_constant = params.normalizing_constant,
            "tuned exponential proposal"
        );
        Ok(Self {
            c,
            params,
            uniform: Uniform::new(0.0, 1.0)?,
            max_iterations: None,
        })
    }

    /// Give up after `limit` proposals in a single call.
    pub fn with_max_iterations(mut self, limit: u64) -> Self {
        self.max_iterations = Some(limit);
        self
    }

    #[inline]
    pub fn truncation(&self) -> f64 {
        self.c
    }

    #[inline]
    pub fn params(&self) -> &ProposalParameters {
        &self.params
    }

    /// Probability of accepting the proposal `c + x`, in `[0, 1]` for `x >= 0`.
    ///
    /// Clamped at 1: near the peak `x = rate - c` rounding lands a few ULP
    /// above it. NaN is passed through.
    #[inline]
    pub fn acceptance_ratio(&self, x: f64) -> f64 {
        let r = phi(x + self.c) / expo(x, self.params.rate) / self.params.normalizing_constant;
        if r > 1.0 { 1.0 } else { r }
    }

    /// One proposal and coin flip.
    #[inline]
    fn propose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<f64> {
        let x = inverse_expo(self.uniform.sample(rng), self.params.rate);
        let r = self.acceptance_ratio(x);

        #[cfg(feature = "debug")]
        assert!(
            (0.0..=1.0).contains(&r),
            "acceptance ratio {} out of [0, 1] at x = {}, c = {}",
            r,
            x,
            self.c
        );

        let coin = self.uniform.sample(rng);
        (coin < r).then_some(x + self.c)
    }

    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        self.sample_with_stats(n, rng).map(|(samples, _)| samples)
    }

    pub fn sample_with_stats<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<(Vec<f64>, SampleStats)> {
        let mut samples = Vec::with_capacity(n);
        let mut stats = SampleStats::default();

        while samples.len() < n {
            if let Some(limit) = self.max_iterations {
                if stats.proposed >= limit {
                    warn!(limit, accepted = samples.len(), requested = n, "iteration limit reached");
                    return Err(SamplerError::IterationLimit {
                        limit,
                        accepted: samples.len(),
                        requested: n,
                    });
                }
            }
            stats.proposed += 1;
            if let Some(s) = self.propose(rng) {
                samples.push(s);
            }
        }
        stats.accepted = samples.len();

        debug!(
            c = self.c,
            proposed = stats.proposed,
            accepted = stats.accepted,
            acceptance = stats.acceptance_rate(),
            "sampling done"
        );
        Ok((samples, stats))
    }
}

impl Distribution<f64> for TruncatedGaussian {
    /// Ignores the iteration cap.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        loop {
            if let Some(s) = self.propose(rng) {
                return s;
            }
        }
    }
}

/// Draw `n` samples above `c` from the thread-local generator.
pub fn sample(n: usize, c: f64) -> Result<Vec<f64>> {
    sample_with(n, c, &mut rand::rng())
}

/// Draw `n` samples above `c` from `rng`.
pub fn sample_with<R: Rng + ?Sized>(n: usize, c: f64, rng: &mut R) -> Result<Vec<f64>> {
    TruncatedGaussian::new(c)?.sample(n, rng)
}

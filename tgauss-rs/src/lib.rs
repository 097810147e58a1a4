//! # tgauss: Gaussian tail sampling
//!
//! Draws i.i.d. samples from the standard normal distribution truncated to
//! `x > c` by acceptance-rejection from a shifted exponential proposal whose
//! rate is tuned to `c`.
//!
//! ```no_run
//! use rand::{SeedableRng, rngs::StdRng};
//! use tgauss_rs::TruncatedGaussian;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let tail = TruncatedGaussian::new(4.0)?;
//! let xs = tail.sample(1000, &mut rng)?;
//! assert!(xs.iter().all(|&x| x >= 4.0));
//! # Ok::<(), tgauss_rs::SamplerError>(())
//! ```

pub mod cdf;
pub mod consts;
pub mod density;
mod error;
pub mod proposal;
mod sampler;

pub use error::{Result, SamplerError};
pub use proposal::{ProposalParameters, rejection_objective, sweep_rates, tune};
pub use sampler::{SampleStats, TruncatedGaussian, sample, sample_with};

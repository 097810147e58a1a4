use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Truncation point must be finite, got {0}")]
    InvalidTruncation(f64),

    #[error(
        "Degenerate proposal at c = {c}: rate = {rate}, normalizing constant = {normalizing_constant}"
    )]
    DegenerateProposal {
        c: f64,
        rate: f64,
        normalizing_constant: f64,
    },

    #[error("Iteration limit {limit} reached with {accepted} of {requested} samples accepted")]
    IterationLimit {
        limit: u64,
        accepted: usize,
        requested: usize,
    },

    #[error("Invalid rate sweep: start = {start}, stop = {stop}, step = {step}")]
    InvalidSweep { start: f64, stop: f64, step: f64 },

    #[error("Uniform distribution error: {0}")]
    Uniform(#[from] rand::distr::uniform::Error),
}

pub type Result<T> = std::result::Result<T, SamplerError>;

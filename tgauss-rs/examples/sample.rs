use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tgauss_rs::TruncatedGaussian;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Sample the standard normal above c", long_about = None)]
struct Args {
    /// Number of samples
    #[arg(short, long, default_value_t = 1)]
    n: usize,

    /// Truncation point
    #[arg(short, long, default_value_t = 4.0, allow_hyphen_values = true)]
    c: f64,

    /// Seed for a reproducible stream
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many proposals
    #[arg(short, long)]
    max_iterations: Option<u64>,
}

fn main() -> tgauss_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut sampler = TruncatedGaussian::new(args.c)?;
    if let Some(limit) = args.max_iterations {
        sampler = sampler.with_max_iterations(limit);
    }

    let (samples, stats) = match args.seed {
        Some(seed) => sampler.sample_with_stats(args.n, &mut StdRng::seed_from_u64(seed))?,
        None => sampler.sample_with_stats(args.n, &mut rand::rng())?,
    };

    for x in &samples {
        println!("{}", x);
    }
    eprintln!(
        "{} accepted of {} proposed ({:.4})",
        stats.accepted,
        stats.proposed,
        stats.acceptance_rate()
    );
    Ok(())
}

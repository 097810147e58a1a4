use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use tgauss_rs::{TruncatedGaussian, cdf::phi_cdf, density::phi};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Histogram of tail samples against the target density", long_about = None)]
struct Args {
    /// Truncation point
    #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
    c: f64,

    /// Number of samples
    #[arg(short, long, default_value_t = 100_000)]
    n: usize,

    /// Number of histogram bins
    #[arg(short, long, default_value_t = 50)]
    bins: usize,

    /// Seed for a reproducible stream
    #[arg(short, long, default_value_t = 17)]
    seed: u64,
}

fn main() -> tgauss_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);
    let samples = TruncatedGaussian::new(args.c)?.sample(args.n, &mut rng)?;

    let nbins = args.bins.max(1);
    let maxv = samples.iter().copied().fold(args.c, f64::max);
    let binwidth = (maxv - args.c) / nbins as f64;
    let mut bin = vec![0usize; nbins];
    for &v in &samples {
        // guard against the max edge
        let j = (((v - args.c) / binwidth).floor() as usize).min(nbins - 1);
        bin[j] += 1;
    }

    // Expected count per bin under phi(x) / (1 - Phi(c)) on x > c
    let scale = args.n as f64 * binwidth / (1.0 - phi_cdf(args.c));
    for (i, count) in bin.iter().enumerate() {
        let x = args.c + binwidth * (i as f64 + 0.5);
        println!("{} {} {}", x, count, scale * phi(x));
    }
    Ok(())
}

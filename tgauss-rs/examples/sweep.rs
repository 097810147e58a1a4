use clap::Parser;
use tgauss_rs::{proposal::optimal_rate, sweep_rates};

#[derive(Parser, Debug)]
#[command(version, about = "Acceptance objective over candidate exponential rates", long_about = None)]
struct Args {
    /// Truncation point
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    c: f64,

    /// First rate
    #[arg(long, default_value_t = 0.0)]
    start: f64,

    /// Rates stop below this value
    #[arg(long, default_value_t = 2.0)]
    stop: f64,

    /// Rate increment
    #[arg(long, default_value_t = 0.01)]
    step: f64,
}

fn main() -> tgauss_rs::Result<()> {
    let args = Args::parse();
    let curve = sweep_rates(args.c, args.start, args.stop, args.step)?;

    // gnuplot-friendly columns
    println!("# c = {}, optimal rate = {}", args.c, optimal_rate(args.c));
    for (rate, objective) in curve {
        println!("{} {}", rate, objective);
    }
    Ok(())
}

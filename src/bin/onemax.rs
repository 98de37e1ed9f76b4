use anyhow::{Context, Result};
use tracing::Level;
use u_bitga::ga::{GaConfig, GaRunner};
use u_bitga::onemax::{count_ones, OneMax};

const DEFAULT_SEED: u64 = 64;

// Runs the classic OneMax setup: 100 bits, 300 individuals, 40 generations.
// An optional first argument overrides the seed.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid seed {arg:?}: expected an unsigned integer"))?,
        None => DEFAULT_SEED,
    };

    let problem = OneMax::default();
    let config = GaConfig::default().with_seed(seed);
    let result = GaRunner::run(&problem, &config).context("OneMax run failed")?;

    println!("Best individual is {}", result.best);
    println!(
        "Ones: {}/{} after {} generations, {} evaluations",
        count_ones(result.best.genome()),
        result.best.len(),
        result.generations,
        result.evaluations
    );
    Ok(())
}

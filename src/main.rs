use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use lints_failure::{render_failure_boxplot, run_experiments, ExperimentConfig};

/// Simulate the first example of a LinTS failure.
#[derive(Parser)]
#[command(name = "lints-failure", version, about)]
struct Cli {
    /// Number of iterations (trials) per block-count setting.
    #[arg(long = "n-iter", default_value_t = 50)]
    n_iter: usize,

    /// Prior standard deviation.
    #[arg(long, default_value_t = 1.0)]
    sigma: f64,

    /// Noise standard deviation.
    #[arg(long, default_value_t = 0.0)]
    tau: f64,

    /// Initial random seed.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Output path for the box plot.
    #[arg(long, default_value = lints_failure::DEFAULT_PLOT_PATH)]
    out: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .init();

    let cfg = ExperimentConfig {
        n_iter: cli.n_iter,
        sigma: cli.sigma,
        tau: cli.tau,
        seed: cli.seed,
    };
    tracing::info!(
        n_iter = cfg.n_iter,
        sigma = cfg.sigma,
        tau = cfg.tau,
        seed = cfg.seed,
        "starting sweep"
    );

    let started = Instant::now();
    let (summaries, matrix) = run_experiments(&cfg);
    tracing::info!(
        settings = summaries.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "sweep finished"
    );

    render_failure_boxplot(&cli.out, &matrix)
        .map_err(|e| anyhow!("{e}"))
        .with_context(|| format!("rendering box plot to {}", cli.out.display()))?;
    tracing::info!(out = %cli.out.display(), "box plot written");

    Ok(())
}

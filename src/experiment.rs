//! Experiment driver: sweep block counts, aggregate failure proxies.

use crate::state::StateFactory;
use crate::stats::median;
use crate::trial::{compute_prob, TrialParams};

/// Number of block-count settings swept: `n_block = 2^0 .. 2^17`.
pub const N_SETTINGS: usize = 18;

/// Experiment configuration, mirroring the CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct ExperimentConfig {
    /// Independent trials per block-count setting.
    pub n_iter: usize,
    /// Prior standard deviation.
    pub sigma: f64,
    /// Noise standard deviation.
    pub tau: f64,
    /// Base seed for the random-state factory.
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            n_iter: 50,
            sigma: 1.0,
            tau: 0.0,
            seed: 1,
        }
    }
}

/// Aggregated statistics for one block-count setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockSummary {
    /// Number of blocks in this setting.
    pub n_block: usize,
    /// Fraction of trials where action 0 was objectively suboptimal, in `[0, 1]`.
    pub subopt_share: f64,
    /// Median failure-count proxy (`1 / prob`) across the setting's trials.
    pub median_failures: f64,
}

/// Failure proxies per setting: `N_SETTINGS` columns of length `n_iter`.
pub type FailureMatrix = Vec<Vec<f64>>;

/// Run the full sweep, printing one summary line per block-count setting.
///
/// Returns the per-setting summaries alongside the raw failure matrix so the
/// caller can render the box plot or inspect the distributions directly.
/// Identical configurations produce identical output.
pub fn run_experiments(cfg: &ExperimentConfig) -> (Vec<BlockSummary>, FailureMatrix) {
    let mut factory = StateFactory::new(cfg.seed);
    let mut summaries = Vec::with_capacity(N_SETTINGS);
    let mut matrix: FailureMatrix = Vec::with_capacity(N_SETTINGS);

    for i in 0..N_SETTINGS {
        let n_block = 1usize << i;
        let params = TrialParams {
            n_block,
            sigma: cfg.sigma,
            tau: cfg.tau,
        };

        let mut failures = Vec::with_capacity(cfg.n_iter);
        let mut n_subopt = 0usize;
        for _ in 0..cfg.n_iter {
            let r = compute_prob(params, &mut factory);
            failures.push(1.0 / r.prob);
            n_subopt += usize::from(r.subopt);
        }

        let summary = BlockSummary {
            n_block,
            subopt_share: n_subopt as f64 / cfg.n_iter as f64,
            median_failures: median(&failures),
        };

        println!(
            "Number of blocks = {:7} -- proportion of times 0 is suboptimal = {:.2} -- \
             Median # steps TS selects the suboptimal action = {:.1}",
            summary.n_block, summary.subopt_share, summary.median_failures
        );
        tracing::debug!(
            n_block = summary.n_block,
            subopt_share = summary.subopt_share,
            median_failures = summary.median_failures,
            "setting done"
        );

        summaries.push(summary);
        matrix.push(failures);
    }

    (summaries, matrix)
}

//! `lints-failure`: a Monte Carlo demonstration of a LinTS failure mode.
//!
//! A linear Thompson sampler is run on a problem made of `n_block`
//! independent two-armed sub-problems that share one latent direction of
//! interest. Each [`compute_prob`] trial simulates a single posterior update
//! step and then evaluates, in closed form, the probability that the sampler
//! picks the globally suboptimal direction. [`run_experiments`] sweeps block
//! counts `2^0 .. 2^17`, prints one summary line per setting, and
//! [`render_failure_boxplot`] draws the distribution of failure-count proxies
//! (`1 / prob`) on a log scale — the proxies grow with the block count, which
//! is the failure mode the experiment exists to show.
//!
//! **Goals:**
//! - **Deterministic**: one base seed reproduces the whole run, bit for bit.
//! - **Single-shot**: no persistence or services; stdout lines plus one SVG.
//! - **Inspectable**: the driver returns summaries and the raw failure
//!   matrix, so tests and callers never need to scrape stdout.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use lints_failure::{run_experiments, render_failure_boxplot, ExperimentConfig};
//! use std::path::Path;
//!
//! let (summaries, matrix) = run_experiments(&ExperimentConfig::default());
//! assert_eq!(summaries.len(), lints_failure::N_SETTINGS);
//! render_failure_boxplot(Path::new("plots/example-1.svg"), &matrix).unwrap();
//! ```
//!
//! **Non-goals:** not a bandit framework — no regret accounting, no policy
//! abstraction, no parallelism. One experiment, one plot.

mod state;
pub use state::*;

mod stats;
pub use stats::*;

mod trial;
pub use trial::*;

mod experiment;
pub use experiment::*;

mod plot;
pub use plot::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::models::ConstraintSet;
use crate::sweep::evaluation::{evaluate_weights, pareto_frontier, select_balanced, SweepPoint};

/// Configuration for a weight sweep.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Log-spaced grid points between the ratio bounds (inclusive).
    pub grid_steps: usize,
    /// Extra ratios drawn uniformly in log space.
    pub samples: usize,
    pub seed: u64,
    /// log10 bounds of the calorie/vitamin C weight ratio.
    pub log_ratio_range: (f64, f64),
    /// Solver settings shared by every point; weights are overridden.
    pub solver: SolverConfig,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid_steps: 17,
            samples: 0,
            seed: 123,
            log_ratio_range: (-4.0, 4.0),
            solver: SolverConfig::default(),
        }
    }
}

/// Results from a sweep.
pub struct SweepResults {
    /// Points ordered by increasing calorie/vitamin C weight ratio.
    pub points: Vec<SweepPoint>,
    /// Indices of Pareto-optimal (non-dominated) points.
    pub frontier: Vec<usize>,
    /// Index of the frontier point with the smallest normalized deviation.
    pub balanced: Option<usize>,
}

/// Weights summing to 1 for a given log10 ratio.
pub fn weights_for_log_ratio(log_ratio: f64) -> (f64, f64) {
    let ratio = 10f64.powf(log_ratio);
    (ratio / (1.0 + ratio), 1.0 / (1.0 + ratio))
}

/// Grid ratios plus seeded random ratios, in log10 space.
fn log_ratios(config: &SweepConfig) -> Vec<f64> {
    let (lo, hi) = config.log_ratio_range;
    let mut ratios = Vec::with_capacity(config.grid_steps + config.samples);

    match config.grid_steps {
        0 => {}
        1 => ratios.push((lo + hi) / 2.0),
        n => {
            let step = (hi - lo) / (n - 1) as f64;
            ratios.extend((0..n).map(|i| lo + step * i as f64));
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    for _ in 0..config.samples {
        ratios.push(if lo < hi { rng.gen_range(lo..=hi) } else { lo });
    }

    ratios.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    ratios
}

/// Evaluate the allocator across weight ratios.
pub fn run_sweep(
    config: &SweepConfig,
    catalog: &FoodCatalog,
    constraints: &ConstraintSet,
) -> Result<SweepResults> {
    let ratios = log_ratios(config);
    info!(points = ratios.len(), seed = config.seed, "starting weight sweep");

    let mut points = Vec::with_capacity(ratios.len());
    for log_ratio in ratios {
        let (calorie_weight, vitamin_c_weight) = weights_for_log_ratio(log_ratio);
        points.push(evaluate_weights(
            &config.solver,
            calorie_weight,
            vitamin_c_weight,
            catalog,
            constraints,
        )?);
    }

    let frontier = pareto_frontier(&points);
    let balanced = select_balanced(&points, &frontier, constraints);

    info!(
        frontier = frontier.len(),
        balanced = ?balanced,
        "weight sweep complete"
    );

    Ok(SweepResults {
        points,
        frontier,
        balanced,
    })
}

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::models::{ConstraintSet, StopReason};
use crate::planner::Allocator;

/// Allocation outcome for one weight pair.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub calorie_weight: f64,
    pub vitamin_c_weight: f64,
    pub total_calories: f64,
    pub total_vitamin_c: f64,
    /// Absolute distance from the calorie target.
    pub calorie_deviation: f64,
    /// Absolute distance from the vitamin C target.
    pub vitamin_c_deviation: f64,
    pub iterations: usize,
    pub stop_reason: StopReason,
}

impl SweepPoint {
    /// Sum of deviations, each scaled by its target (targets below 1 count as 1).
    pub fn normalized_deviation(&self, constraints: &ConstraintSet) -> f64 {
        self.calorie_deviation / constraints.target_calories().max(1.0)
            + self.vitamin_c_deviation / constraints.target_vitamin_c().max(1.0)
    }

    /// True if `other` is at least as close on both targets and strictly closer on one.
    pub fn is_dominated_by(&self, other: &SweepPoint) -> bool {
        let no_worse = other.calorie_deviation <= self.calorie_deviation
            && other.vitamin_c_deviation <= self.vitamin_c_deviation;
        let better = other.calorie_deviation < self.calorie_deviation
            || other.vitamin_c_deviation < self.vitamin_c_deviation;
        no_worse && better
    }

    /// Calorie weight over vitamin C weight.
    pub fn weight_ratio(&self) -> f64 {
        if self.vitamin_c_weight > 0.0 {
            self.calorie_weight / self.vitamin_c_weight
        } else {
            f64::INFINITY
        }
    }
}

/// Run the allocator with the given weights.
pub fn evaluate_weights(
    base: &SolverConfig,
    calorie_weight: f64,
    vitamin_c_weight: f64,
    catalog: &FoodCatalog,
    constraints: &ConstraintSet,
) -> Result<SweepPoint> {
    let config = base.clone().with_weights(calorie_weight, vitamin_c_weight);
    let result = Allocator::new(config)?.allocate(catalog, constraints)?;

    Ok(SweepPoint {
        calorie_weight,
        vitamin_c_weight,
        total_calories: result.total_calories,
        total_vitamin_c: result.total_vitamin_c,
        calorie_deviation: result.calorie_gap().abs(),
        vitamin_c_deviation: result.vitamin_c_gap().abs(),
        iterations: result.stats.iterations,
        stop_reason: result.stats.stop_reason,
    })
}

/// Indices of points not dominated by any other point.
pub fn pareto_frontier(points: &[SweepPoint]) -> Vec<usize> {
    (0..points.len())
        .filter(|&i| !points.iter().any(|other| points[i].is_dominated_by(other)))
        .collect()
}

/// Frontier point with the smallest normalized deviation.
pub fn select_balanced(
    points: &[SweepPoint],
    frontier: &[usize],
    constraints: &ConstraintSet,
) -> Option<usize> {
    frontier.iter().copied().min_by(|&a, &b| {
        points[a]
            .normalized_deviation(constraints)
            .partial_cmp(&points[b].normalized_deviation(constraints))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

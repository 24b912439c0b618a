use std::time::Instant;

use tracing::{debug, info, trace};

use crate::catalog::FoodCatalog;
use crate::config::SolverConfig;
use crate::error::{PlannerError, Result};
use crate::models::{
    Allocation, AllocationEntry, AllocationResult, ConstraintSet, SolveStats, StopReason,
};
use crate::planner::constants::PROGRESS_INTERVAL;
use crate::planner::objective::Objective;

/// Allocate quantities with the default solver configuration.
pub fn allocate(catalog: &FoodCatalog, constraints: &ConstraintSet) -> Result<AllocationResult> {
    Allocator::default().allocate(catalog, constraints)
}

/// Projected gradient descent allocator.
///
/// Holds no per-solve state; every call owns its own working vectors,
/// so one allocator can serve any number of requests.
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    config: SolverConfig,
}

impl Allocator {
    /// Create an allocator, validating the configuration.
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute non-negative quantities for every eligible item.
    ///
    /// Fails with `NoEligibleItems` when the constraints exclude the whole
    /// catalog. Running out of iterations is not an error.
    pub fn allocate(
        &self,
        catalog: &FoodCatalog,
        constraints: &ConstraintSet,
    ) -> Result<AllocationResult> {
        self.solve(catalog, constraints, None)
    }

    /// Like [`Allocator::allocate`], also returning the objective value at
    /// the starting point followed by its value after each iteration.
    pub fn allocate_with_history(
        &self,
        catalog: &FoodCatalog,
        constraints: &ConstraintSet,
    ) -> Result<(AllocationResult, Vec<f64>)> {
        let mut history = Vec::with_capacity(self.config.max_iterations.saturating_add(1).min(1 << 16));
        let result = self.solve(catalog, constraints, Some(&mut history))?;
        Ok((result, history))
    }

    fn solve(
        &self,
        catalog: &FoodCatalog,
        constraints: &ConstraintSet,
        mut history: Option<&mut Vec<f64>>,
    ) -> Result<AllocationResult> {
        self.config.validate()?;

        let eligible = catalog.eligible(constraints);
        if eligible.is_empty() {
            return Err(PlannerError::NoEligibleItems);
        }

        let objective = Objective::new(&eligible, constraints, &self.config);
        let step = objective.step_size();
        let deadline = self
            .config
            .time_limit()
            .and_then(|limit| Instant::now().checked_add(limit));

        info!(
            event = "solve_start",
            items = objective.dim(),
            target_calories = constraints.target_calories(),
            target_vitamin_c = constraints.target_vitamin_c(),
            step_size = step
        );

        let mut q = vec![0.0; objective.dim()];
        let mut grad = vec![0.0; objective.dim()];
        let mut f_prev = objective.value(&q);
        let mut best_q = q.clone();
        let mut best_f = f_prev;
        if let Some(h) = history.as_deref_mut() {
            h.push(f_prev);
        }

        let mut iterations = 0;
        let mut stop_reason = StopReason::IterationBudget;

        while iterations < self.config.max_iterations {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                stop_reason = StopReason::Deadline;
                break;
            }

            objective.gradient_into(&q, &mut grad);
            for (qi, gi) in q.iter_mut().zip(&grad) {
                *qi = (*qi - step * gi).max(0.0);
            }
            iterations += 1;

            let f_new = objective.value(&q);
            if let Some(h) = history.as_deref_mut() {
                h.push(f_new);
            }
            if f_new <= best_f {
                best_f = f_new;
                best_q.copy_from_slice(&q);
            }

            if iterations % PROGRESS_INTERVAL == 0 {
                trace!(iteration = iterations, objective = f_new, "solver progress");
            }

            if has_converged(f_prev, f_new, self.config.tolerance) {
                stop_reason = StopReason::Converged;
                break;
            }
            f_prev = f_new;
        }

        let (total_calories, total_vitamin_c) = objective.totals(&best_q);

        info!(
            event = "solve_end",
            iterations = iterations,
            stop_reason = stop_reason.label(),
            objective = best_f,
            total_calories = total_calories,
            total_vitamin_c = total_vitamin_c
        );

        let entries = eligible
            .iter()
            .zip(&best_q)
            .map(|(item, &quantity)| {
                debug!(food = %item.name, quantity = quantity, "allocated");
                AllocationEntry {
                    name: item.name.clone(),
                    quantity,
                }
            })
            .collect();

        Ok(AllocationResult {
            allocation: Allocation::from_entries(entries),
            target_calories: constraints.target_calories(),
            target_vitamin_c: constraints.target_vitamin_c(),
            total_calories,
            total_vitamin_c,
            calories_met: total_calories >= constraints.target_calories(),
            vitamin_c_met: total_vitamin_c >= constraints.target_vitamin_c(),
            stats: SolveStats {
                iterations,
                stop_reason,
                objective: best_f,
            },
        })
    }
}

/// Relative decrease below tolerance. A zero objective is already optimal.
fn has_converged(f_prev: f64, f_new: f64, tolerance: f64) -> bool {
    if f_prev <= 0.0 {
        return true;
    }
    (f_prev - f_new) / f_prev < tolerance
}

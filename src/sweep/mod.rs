pub mod evaluation;
pub mod output;
pub mod search;

pub use evaluation::{evaluate_weights, pareto_frontier, select_balanced, SweepPoint};
pub use output::{print_frontier, write_best_json, write_csv};
pub use search::{run_sweep, weights_for_log_ratio, SweepConfig, SweepResults};

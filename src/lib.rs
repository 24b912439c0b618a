pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod sweep;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{Allocation, AllocationResult, ConstraintSet, FoodItem};
pub use planner::{allocate, Allocator};

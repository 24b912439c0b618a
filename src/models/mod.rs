mod allocation;
mod constraints;
mod food;

pub use allocation::{Allocation, AllocationEntry, AllocationResult, SolveStats, StopReason};
pub use constraints::ConstraintSet;
pub use food::{canonical_key, FoodItem};

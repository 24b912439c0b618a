pub mod allocator;
pub mod constants;
pub mod objective;

pub use allocator::{allocate, Allocator};
pub use constants::*;
pub use objective::Objective;

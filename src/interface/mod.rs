pub mod prompts;
pub mod render;

pub use prompts::{
    collect_constraints, prompt_exclusions, prompt_target_calories, prompt_target_vitamin_c,
    prompt_yes_no,
};
pub use render::{display_allocation, display_catalog, render, render_catalog, render_json};

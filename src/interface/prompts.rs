use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;
use tracing::debug;

use crate::catalog::{FoodCatalog, SUGGESTION_THRESHOLD};
use crate::error::{PlannerError, Result};
use crate::models::ConstraintSet;
use crate::planner::constants::{DEFAULT_TARGET_CALORIES, DEFAULT_TARGET_VITAMIN_C};

/// Maximum fuzzy matches offered for an unknown name.
const MAX_SUGGESTIONS: usize = 5;

/// Prompt for a non-negative numeric target.
fn prompt_target(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format!("{}", default))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: {}", input)))?;

    if value < 0.0 {
        return Err(PlannerError::InvalidConstraint(format!(
            "target must be >= 0 (got {})",
            value
        )));
    }
    Ok(value)
}

/// Prompt for the daily calorie target.
pub fn prompt_target_calories() -> Result<f64> {
    prompt_target("Calorie target (kcal)", DEFAULT_TARGET_CALORIES)
}

/// Prompt for the daily vitamin C target.
pub fn prompt_target_vitamin_c() -> Result<f64> {
    prompt_target("Vitamin C target (mg)", DEFAULT_TARGET_VITAMIN_C)
}

/// Catalog names ranked by similarity to `input`.
fn fuzzy_matches(catalog: &FoodCatalog, input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    let mut scored: Vec<(f64, &str)> = catalog
        .all()
        .map(|f| (jaro_winkler(&needle, &f.key()), f.name.as_str()))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}

/// Prompt for foods to avoid, with fuzzy matching against the catalog.
pub fn prompt_exclusions(catalog: &FoodCatalog) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a food to avoid (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Ok(food) = catalog.get(input) {
            excluded.push(food.name.clone());
            println!("Avoiding: {}", food.name);
            continue;
        }

        let options = fuzzy_matches(catalog, input);
        if options.is_empty() {
            println!("No catalog match found for '{}'", input);
            continue;
        }

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            excluded.push(options[selection].clone());
            println!("Avoiding: {}", options[selection]);
        }
    }

    debug!(count = excluded.len(), "collected exclusions");
    Ok(excluded)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all planning constraints interactively.
pub fn collect_constraints(catalog: &FoodCatalog) -> Result<ConstraintSet> {
    let calories = prompt_target_calories()?;
    let vitamin_c = prompt_target_vitamin_c()?;
    let excluded = prompt_exclusions(catalog)?;

    ConstraintSet::new(calories, vitamin_c, excluded)
}

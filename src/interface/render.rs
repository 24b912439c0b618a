use std::fmt::Write;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::AllocationResult;
use crate::planner::constants::QUANTITY_DISPLAY_THRESHOLD;

/// Render an allocation as a human-readable report.
pub fn render(result: &AllocationResult) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "=== Recommended Quantities ===");
    let _ = writeln!(out);

    let max_name_len = result
        .allocation
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in result.allocation.iter().enumerate() {
        let quantity = if entry.quantity < QUANTITY_DISPLAY_THRESHOLD {
            0.0
        } else {
            entry.quantity
        };
        let _ = writeln!(
            out,
            "{:>3}. {:<width$} - {:>8.2} units",
            i + 1,
            entry.name,
            quantity,
            width = max_name_len
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "--- Targets ---");
    let _ = writeln!(
        out,
        "Calories:  {:>10.1} / {:<10.1} {}",
        result.total_calories,
        result.target_calories,
        verdict(result.calories_met)
    );
    let _ = writeln!(
        out,
        "Vitamin C: {:>10.1} / {:<10.1} {}",
        result.total_vitamin_c,
        result.target_vitamin_c,
        verdict(result.vitamin_c_met)
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Solver: {} after {} iterations (objective {:.6e})",
        result.stats.stop_reason.label(),
        result.stats.iterations,
        result.stats.objective
    );

    out
}

fn verdict(met: bool) -> &'static str {
    if met { "[met]" } else { "[not met]" }
}

/// Render the allocation result as pretty JSON.
pub fn render_json(result: &AllocationResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render catalog contents as an aligned list.
pub fn render_catalog(catalog: &FoodCatalog) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        let _ = writeln!(out, "Catalog: (empty)");
        return out;
    }

    let _ = writeln!(out, "=== Catalog ({} items) ===", catalog.len());
    let _ = writeln!(out);

    let max_name_len = catalog.all().map(|f| f.name.len()).max().unwrap_or(10);
    for food in catalog.all() {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>7.1} kcal  {:>7.1} mg vitamin C",
            food.name,
            food.calories_per_unit,
            food.vitamin_c_per_unit,
            width = max_name_len
        );
    }

    out
}

/// Print an allocation report to stdout.
pub fn display_allocation(result: &AllocationResult) {
    println!();
    print!("{}", render(result));
    println!();
}

/// Print catalog contents to stdout.
pub fn display_catalog(catalog: &FoodCatalog) {
    println!();
    print!("{}", render_catalog(catalog));
    println!();
}

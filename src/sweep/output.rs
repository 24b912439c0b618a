use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::ConstraintSet;
use crate::sweep::evaluation::SweepPoint;
use crate::sweep::search::SweepResults;

/// Round a float to n decimal places.
fn truncate(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write all sweep points to a CSV file.
pub fn write_csv(results: &SweepResults, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "index",
        "calorie_weight",
        "vitamin_c_weight",
        "total_calories",
        "total_vitamin_c",
        "calorie_deviation",
        "vitamin_c_deviation",
        "iterations",
        "stop_reason",
        "pareto",
    ])?;

    for (i, point) in results.points.iter().enumerate() {
        wtr.write_record([
            i.to_string(),
            format!("{:.6}", point.calorie_weight),
            format!("{:.6}", point.vitamin_c_weight),
            format!("{:.2}", point.total_calories),
            format!("{:.2}", point.total_vitamin_c),
            format!("{:.2}", point.calorie_deviation),
            format!("{:.2}", point.vitamin_c_deviation),
            point.iterations.to_string(),
            point.stop_reason.label().to_string(),
            results.frontier.contains(&i).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the balanced point to a JSON file, ready to paste into a solver config.
pub fn write_best_json(best: &SweepPoint, path: &Path) -> Result<()> {
    let json = serde_json::json!({
        "solver": {
            "calorie_weight": truncate(best.calorie_weight, 6),
            "vitamin_c_weight": truncate(best.vitamin_c_weight, 6),
        },
        "metrics": {
            "total_calories": truncate(best.total_calories, 2),
            "total_vitamin_c": truncate(best.total_vitamin_c, 2),
            "calorie_deviation": truncate(best.calorie_deviation, 2),
            "vitamin_c_deviation": truncate(best.vitamin_c_deviation, 2),
            "iterations": best.iterations,
            "stop_reason": best.stop_reason,
        },
    });

    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&json)?.as_bytes())?;
    Ok(())
}

/// Print the Pareto frontier with the balanced pick highlighted.
pub fn print_frontier(results: &SweepResults, constraints: &ConstraintSet) {
    println!(
        "\n=== Pareto Frontier ({} of {} points) ===\n",
        results.frontier.len(),
        results.points.len()
    );

    for (rank, &idx) in results.frontier.iter().enumerate() {
        let point = &results.points[idx];
        let label = if results.balanced == Some(idx) {
            " ★ BALANCED"
        } else {
            ""
        };

        println!(
            "#{}: ratio={:.4} cal={:.1} (Δ{:.1}) vitC={:.1} (Δ{:.1}) score={:.4}{}",
            rank + 1,
            point.weight_ratio(),
            point.total_calories,
            point.calorie_deviation,
            point.total_vitamin_c,
            point.vitamin_c_deviation,
            point.normalized_deviation(constraints),
            label
        );
    }
    println!();
}

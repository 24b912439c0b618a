use std::path::PathBuf;

use clap::Parser;

use meal_planner_rs::catalog::{load_catalog, FoodCatalog};
use meal_planner_rs::config::SolverConfig;
use meal_planner_rs::error::Result;
use meal_planner_rs::logging;
use meal_planner_rs::models::ConstraintSet;
use meal_planner_rs::sweep::{print_frontier, run_sweep, write_best_json, write_csv, SweepConfig};

#[derive(Parser, Debug)]
#[command(name = "sweep")]
#[command(about = "Explore calorie / vitamin C weight trade-offs for the meal planner")]
struct Args {
    /// Path to the food catalog (JSON or CSV); built-in catalog if omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Solver configuration TOML file (weights are overridden)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Calorie target (kcal)
    #[arg(long, default_value = "2000")]
    calories: f64,

    /// Vitamin C target (mg)
    #[arg(long = "vitamin-c", default_value = "90")]
    vitamin_c: f64,

    /// Food to avoid (repeatable)
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Log-spaced grid points
    #[arg(long, default_value = "17")]
    grid: usize,

    /// Additional random weight ratios
    #[arg(long, default_value = "0")]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Output CSV file for all points
    #[arg(long, default_value = "sweep_results.csv")]
    csv: PathBuf,

    /// Output JSON file for the balanced point
    #[arg(long, default_value = "sweep_best.json")]
    json: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: Args) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => FoodCatalog::builtin(),
    };
    println!("Loaded {} foods", catalog.len());

    let solver = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };

    let constraints = ConstraintSet::new(args.calories, args.vitamin_c, &args.exclude)?;

    let config = SweepConfig {
        grid_steps: args.grid,
        samples: args.samples,
        seed: args.seed,
        solver,
        ..SweepConfig::default()
    };

    println!(
        "Sweeping {} weight ratios (targets: {:.0} kcal, {:.0} mg vitamin C)",
        config.grid_steps + config.samples,
        constraints.target_calories(),
        constraints.target_vitamin_c()
    );

    let results = run_sweep(&config, &catalog, &constraints)?;
    print_frontier(&results, &constraints);

    write_csv(&results, &args.csv)?;
    println!("Wrote all points to {:?}", args.csv);

    match results.balanced {
        Some(idx) => {
            write_best_json(&results.points[idx], &args.json)?;
            println!("Wrote balanced point to {:?}", args.json);
        }
        None => println!("No points evaluated; nothing written to {:?}", args.json),
    }

    Ok(())
}

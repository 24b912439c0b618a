use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Meal planner: recommends food quantities that meet calorie and vitamin C targets.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON, or CSV by extension).
    #[arg(short, long, global = true, default_value = "food_catalog.json")]
    pub catalog: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute recommended quantities for the given targets.
    Plan(PlanArgs),

    /// List the foods in the catalog.
    Catalog,

    /// Add a food to the catalog file.
    AddItem {
        /// Food name (unique, case-insensitive).
        #[arg(long)]
        name: String,

        /// Calories per unit.
        #[arg(long)]
        calories: f64,

        /// Vitamin C per unit (mg).
        #[arg(long = "vitamin-c")]
        vitamin_c: f64,

        /// Overwrite the catalog file without asking.
        #[arg(short, long)]
        yes: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Calorie target (kcal).
    #[arg(long, default_value_t = 2000.0, allow_negative_numbers = true)]
    pub calories: f64,

    /// Vitamin C target (mg).
    #[arg(long = "vitamin-c", default_value_t = 90.0, allow_negative_numbers = true)]
    pub vitamin_c: f64,

    /// Food to avoid (repeatable).
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Solver configuration TOML file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Prompt for targets and exclusions instead of using flags.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            vitamin_c: 90.0,
            exclude: Vec::new(),
            config: None,
            interactive: false,
            json: false,
        }
    }
}

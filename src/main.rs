use clap::Parser;
use std::path::Path;
use tracing::warn;

use meal_planner_rs::catalog::{load_catalog, save_catalog, FoodCatalog};
use meal_planner_rs::cli::{Cli, Command, PlanArgs};
use meal_planner_rs::config::SolverConfig;
use meal_planner_rs::error::Result;
use meal_planner_rs::interface::{
    collect_constraints, display_allocation, display_catalog, prompt_yes_no, render_json,
};
use meal_planner_rs::logging;
use meal_planner_rs::models::{ConstraintSet, FoodItem};
use meal_planner_rs::planner::Allocator;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan(args) => cmd_plan(&cli.catalog, &args),
        Command::Catalog => cmd_catalog(&cli.catalog),
        Command::AddItem {
            name,
            calories,
            vitamin_c,
            yes,
        } => cmd_add_item(&cli.catalog, FoodItem::new(name, calories, vitamin_c), yes),
    }
}

/// Load the catalog file, falling back to the built-in catalog when it is missing.
fn open_catalog(path: &Path) -> Result<FoodCatalog> {
    if path.exists() {
        load_catalog(path)
    } else {
        warn!(path = %path.display(), "catalog file not found, using built-in catalog");
        Ok(FoodCatalog::builtin())
    }
}

/// Compute and display an allocation.
fn cmd_plan(catalog_path: &Path, args: &PlanArgs) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;

    let config = match &args.config {
        Some(path) => SolverConfig::load(path)?,
        None => SolverConfig::default(),
    };
    let allocator = Allocator::new(config)?;

    let constraints = if args.interactive {
        collect_constraints(&catalog)?
    } else {
        for name in &args.exclude {
            if !catalog.contains(name) {
                match catalog.suggest(name) {
                    Some(suggestion) => {
                        warn!(exclude = %name, "not in catalog; did you mean '{}'?", suggestion)
                    }
                    None => warn!(exclude = %name, "not in catalog"),
                }
            }
        }
        ConstraintSet::new(args.calories, args.vitamin_c, &args.exclude)?
    };

    let result = allocator.allocate(&catalog, &constraints)?;

    if args.json {
        println!("{}", render_json(&result)?);
    } else {
        display_allocation(&result);
    }

    Ok(())
}

/// List catalog contents.
fn cmd_catalog(catalog_path: &Path) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    display_catalog(&catalog);
    Ok(())
}

/// Add an item and save the catalog.
fn cmd_add_item(catalog_path: &Path, item: FoodItem, yes: bool) -> Result<()> {
    let mut catalog = open_catalog(catalog_path)?;
    let name = item.name.clone();
    catalog.add(item)?;

    if !yes {
        let save = prompt_yes_no(
            &format!("Save {} items to {}?", catalog.len(), catalog_path.display()),
            true,
        )?;
        if !save {
            println!("Catalog not saved.");
            return Ok(());
        }
    }

    save_catalog(catalog_path, &catalog)?;
    println!("Added {}. Catalog saved.", name);
    Ok(())
}

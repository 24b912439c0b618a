#[macro_use]
extern crate assert_float_eq;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use meal_planner_rs::catalog::FoodCatalog;
use meal_planner_rs::config::SolverConfig;
use meal_planner_rs::error::PlannerError;
use meal_planner_rs::models::{ConstraintSet, FoodItem, StopReason};
use meal_planner_rs::planner::{allocate, Allocator};

fn reference_catalog() -> FoodCatalog {
    FoodCatalog::from_items(vec![
        FoodItem::new("Apple", 52.0, 5.0),
        FoodItem::new("Banana", 89.0, 10.0),
        FoodItem::new("Chicken", 239.0, 0.0),
    ])
    .unwrap()
}

fn random_catalog(rng: &mut StdRng, size: usize) -> FoodCatalog {
    let items = (0..size).map(|i| {
        FoodItem::new(
            format!("Food {}", i),
            rng.gen_range(0.0..400.0),
            rng.gen_range(0.0..80.0),
        )
    });
    FoodCatalog::from_items(items).unwrap()
}

#[test]
fn test_reference_totals_match_quantities() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::targets(2000.0, 2000.0).unwrap();
    let result = allocate(&catalog, &constraints).unwrap();

    assert_eq!(result.allocation.len(), 3);

    let vitamin_c: f64 = result
        .allocation
        .iter()
        .map(|e| e.quantity * catalog.get(&e.name).unwrap().vitamin_c_per_unit)
        .sum();
    let calories: f64 = result
        .allocation
        .iter()
        .map(|e| e.quantity * catalog.get(&e.name).unwrap().calories_per_unit)
        .sum();

    assert_float_absolute_eq!(result.total_vitamin_c, vitamin_c, 1e-6);
    assert_float_absolute_eq!(result.total_calories, calories, 1e-6);
    assert_eq!(result.calories_met, result.total_calories >= 2000.0);
    assert_eq!(result.vitamin_c_met, result.total_vitamin_c >= 2000.0);
    assert!(result.stats.iterations <= 1000);
}

#[test]
fn test_excluded_item_never_allocated() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::new(2000.0, 2000.0, ["Chicken"]).unwrap();
    let result = allocate(&catalog, &constraints).unwrap();

    assert!(!result.allocation.contains("Chicken"));
    assert_eq!(result.allocation.quantity("Chicken"), 0.0);
    assert_eq!(result.allocation.len(), 2);
}

#[test]
fn test_exclusion_invariant_for_every_subset() {
    let catalog = reference_catalog();
    let names = ["Apple", "Banana", "Chicken"];

    // Every proper subset; the full set is covered by the no-eligible test.
    for mask in 0u8..7 {
        let excluded: Vec<&str> = names
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, n)| *n)
            .collect();
        let constraints = ConstraintSet::new(1500.0, 60.0, &excluded).unwrap();
        let result = allocate(&catalog, &constraints).unwrap();

        for name in &excluded {
            assert!(!result.allocation.contains(name), "{} allocated", name);
        }
        assert_eq!(result.allocation.len(), names.len() - excluded.len());
    }
}

#[test]
fn test_all_excluded_fails() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::new(2000.0, 90.0, ["apple", "BANANA", "Chicken"]).unwrap();

    let err = allocate(&catalog, &constraints).unwrap_err();
    assert!(matches!(err, PlannerError::NoEligibleItems));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_empty_catalog_fails() {
    let constraints = ConstraintSet::targets(2000.0, 90.0).unwrap();
    let err = allocate(&FoodCatalog::new(), &constraints).unwrap_err();
    assert!(matches!(err, PlannerError::NoEligibleItems));
}

#[test]
fn test_negative_calorie_target_fails() {
    let err = ConstraintSet::targets(-1.0, 90.0).unwrap_err();
    assert!(matches!(err, PlannerError::InvalidConstraint(_)));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_inert_single_item_terminates() {
    let catalog = FoodCatalog::from_items(vec![FoodItem::new("Water", 0.0, 0.0)]).unwrap();
    let constraints = ConstraintSet::targets(2000.0, 90.0).unwrap();
    let result = allocate(&catalog, &constraints).unwrap();

    assert!(result.stats.iterations <= 1000);
    assert_eq!(result.allocation.quantity("Water"), 0.0);
    assert_eq!(result.total_calories, 0.0);
    assert!(!result.calories_met);
    assert!(!result.vitamin_c_met);
    assert!(result.stats.objective.is_finite());
}

#[test]
fn test_deterministic() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::new(1800.0, 75.0, ["banana"]).unwrap();

    let first = allocate(&catalog, &constraints).unwrap();
    let second = allocate(&catalog, &constraints).unwrap();
    assert_eq!(first, second);

    for (a, b) in first.allocation.iter().zip(second.allocation.iter()) {
        assert_eq!(a.quantity.to_bits(), b.quantity.to_bits());
    }
}

#[test]
fn test_objective_never_increases() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::targets(2000.0, 2000.0).unwrap();
    let (result, history) = Allocator::default()
        .allocate_with_history(&catalog, &constraints)
        .unwrap();

    assert_eq!(history.len(), result.stats.iterations + 1);
    for w in history.windows(2) {
        let slack = 1e-9 * w[0].abs().max(1.0);
        assert!(w[1] <= w[0] + slack, "objective rose: {} -> {}", w[0], w[1]);
    }
    let best = history.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(result.stats.objective, best);
}

#[test]
fn test_random_catalogs_non_negative_and_monotone() {
    let mut rng = StdRng::seed_from_u64(42);
    let allocator = Allocator::default();

    for _ in 0..20 {
        let size = rng.gen_range(1..8);
        let catalog = random_catalog(&mut rng, size);
        let constraints =
            ConstraintSet::targets(rng.gen_range(0.0..3000.0), rng.gen_range(0.0..200.0))
                .unwrap();

        let (result, history) = allocator
            .allocate_with_history(&catalog, &constraints)
            .unwrap();

        assert!(result.allocation.iter().all(|e| e.quantity >= 0.0));
        assert!(history[0] >= *history.last().unwrap());
        for w in history.windows(2) {
            assert!(w[1] <= w[0] + 1e-9 * w[0].abs().max(1.0));
        }
    }
}

#[test]
fn test_separable_catalog_reaches_targets() {
    let catalog = FoodCatalog::from_items(vec![
        FoodItem::new("Orange", 0.0, 50.0),
        FoodItem::new("Rice", 100.0, 0.0),
    ])
    .unwrap();
    let constraints = ConstraintSet::targets(200.0, 100.0).unwrap();
    let result = allocate(&catalog, &constraints).unwrap();

    assert_eq!(result.stats.stop_reason, StopReason::Converged);
    assert_float_absolute_eq!(result.allocation.quantity("Rice"), 2.0, 1e-4);
    assert_float_absolute_eq!(result.allocation.quantity("Orange"), 2.0, 1e-4);
    assert_float_absolute_eq!(result.total_calories, 200.0, 1e-2);
    assert_float_absolute_eq!(result.total_vitamin_c, 100.0, 1e-2);
}

#[test]
fn test_zero_targets_allocate_nothing() {
    let catalog = reference_catalog();
    let constraints = ConstraintSet::targets(0.0, 0.0).unwrap();
    let result = allocate(&catalog, &constraints).unwrap();

    assert_eq!(result.stats.stop_reason, StopReason::Converged);
    assert!(result.allocation.iter().all(|e| e.quantity == 0.0));
    assert!(result.all_met());
}

#[test]
fn test_expired_deadline_returns_start_point() {
    let config = SolverConfig {
        time_limit_ms: Some(0),
        ..SolverConfig::default()
    };
    let allocator = Allocator::new(config).unwrap();
    let constraints = ConstraintSet::targets(2000.0, 90.0).unwrap();
    let result = allocator.allocate(&reference_catalog(), &constraints).unwrap();

    assert_eq!(result.stats.stop_reason, StopReason::Deadline);
    assert_eq!(result.stats.iterations, 0);
    assert!(result.allocation.iter().all(|e| e.quantity == 0.0));
}

#[test]
fn test_zero_vitamin_weight_ignores_vitamin_target() {
    let catalog = FoodCatalog::from_items(vec![
        FoodItem::new("Orange", 0.0, 50.0),
        FoodItem::new("Rice", 100.0, 0.0),
    ])
    .unwrap();
    let constraints = ConstraintSet::targets(200.0, 100.0).unwrap();

    let calorie_only = Allocator::new(SolverConfig::default().with_weights(1.0, 0.0))
        .unwrap()
        .allocate(&catalog, &constraints)
        .unwrap();

    assert_float_absolute_eq!(calorie_only.allocation.quantity("Rice"), 2.0, 1e-4);
    assert!(calorie_only.allocation.quantity("Orange") < 1e-9);
    assert!(!calorie_only.vitamin_c_met);
}

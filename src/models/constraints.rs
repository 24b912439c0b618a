use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::{PlannerError, Result};
use crate::models::food::canonical_key;

/// Nutrient targets and avoided items for a single planning request.
///
/// Fields are private so a constructed set is always valid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintSet {
    target_calories: f64,
    target_vitamin_c: f64,
    /// Canonical (lowercase) names.
    excluded: BTreeSet<String>,
}

impl ConstraintSet {
    /// Build a constraint set, rejecting negative or non-finite targets.
    pub fn new<I, S>(target_calories: f64, target_vitamin_c: f64, excluded: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_target("calorie", target_calories)?;
        check_target("vitamin C", target_vitamin_c)?;

        let excluded = excluded
            .into_iter()
            .map(|name| canonical_key(name.as_ref()))
            .filter(|key| !key.is_empty())
            .collect();

        Ok(Self {
            target_calories,
            target_vitamin_c,
            excluded,
        })
    }

    /// Constraint set with no exclusions.
    pub fn targets(target_calories: f64, target_vitamin_c: f64) -> Result<Self> {
        Self::new(target_calories, target_vitamin_c, std::iter::empty::<&str>())
    }

    pub fn target_calories(&self) -> f64 {
        self.target_calories
    }

    pub fn target_vitamin_c(&self) -> f64 {
        self.target_vitamin_c
    }

    /// Case-insensitive exclusion check.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(&canonical_key(name))
    }

    /// Excluded names in canonical form, sorted.
    pub fn excluded(&self) -> impl Iterator<Item = &str> {
        self.excluded.iter().map(String::as_str)
    }
}

fn check_target(label: &str, value: f64) -> Result<()> {
    if value.is_nan() {
        return Err(PlannerError::InvalidConstraint(format!(
            "{} target is NaN",
            label
        )));
    }
    if !value.is_finite() {
        return Err(PlannerError::InvalidConstraint(format!(
            "{} target must be finite",
            label
        )));
    }
    if value < 0.0 {
        return Err(PlannerError::InvalidConstraint(format!(
            "{} target must be >= 0 (got {})",
            label, value
        )));
    }
    Ok(())
}

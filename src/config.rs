//! Solver configuration.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! overrides:
//!
//! ```
//! use meal_planner_rs::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     vitamin_c_weight = 50.0
//!     max_iterations = 5000
//!     time_limit_ms = 250
//! "#).unwrap();
//!
//! assert_eq!(config.calorie_weight, 1.0);
//! assert_eq!(config.max_iterations, 5000);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::{
    DEFAULT_CALORIE_WEIGHT, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
    DEFAULT_VITAMIN_C_WEIGHT,
};

/// Tunable parameters of the allocator.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Weight on squared calorie deviation.
    pub calorie_weight: f64,

    /// Weight on squared vitamin C deviation.
    pub vitamin_c_weight: f64,

    /// L2 regularization strength; must be > 0.
    pub epsilon: f64,

    /// Iteration budget.
    pub max_iterations: usize,

    /// Relative objective decrease that counts as converged.
    pub tolerance: f64,

    /// Optional wall-clock limit for a single solve.
    pub time_limit_ms: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            calorie_weight: DEFAULT_CALORIE_WEIGHT,
            vitamin_c_weight: DEFAULT_VITAMIN_C_WEIGHT,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            time_limit_ms: None,
        }
    }
}

impl SolverConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with different nutrient weights.
    pub fn with_weights(mut self, calorie_weight: f64, vitamin_c_weight: f64) -> Self {
        self.calorie_weight = calorie_weight;
        self.vitamin_c_weight = vitamin_c_weight;
        self
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Check the invariants the solver relies on.
    pub fn validate(&self) -> Result<()> {
        check_weight("calorie_weight", self.calorie_weight)?;
        check_weight("vitamin_c_weight", self.vitamin_c_weight)?;

        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "epsilon must be a finite value > 0 (got {})",
                self.epsilon
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(PlannerError::InvalidConfig(format!(
                "tolerance must be a finite value >= 0 (got {})",
                self.tolerance
            )));
        }
        Ok(())
    }
}

fn check_weight(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::InvalidConfig(format!(
            "{} must be a finite value >= 0 (got {})",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.calorie_weight, 1.0);
        assert_eq!(config.vitamin_c_weight, 1.0);
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tolerance, 1e-9);
        assert_eq!(config.time_limit(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = SolverConfig::from_toml_str(
            r#"
            calorie_weight = 0.5
            time_limit_ms = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.calorie_weight, 0.5);
        assert_eq!(config.vitamin_c_weight, 1.0);
        assert_eq!(config.time_limit(), Some(Duration::from_millis(30)));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SolverConfig::from_toml_str("").unwrap(), SolverConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SolverConfig::from_toml_str("learning_rate = 0.1").unwrap_err();
        assert!(matches!(err, PlannerError::Toml(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SolverConfig::from_toml_str("epsilon = 0.0").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));

        let err = SolverConfig::from_toml_str("vitamin_c_weight = -2.0").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidConfig(_)));

        let config = SolverConfig {
            tolerance: f64::NAN,
            ..SolverConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

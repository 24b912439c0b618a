use serde::{Deserialize, Serialize};

/// A food item with its per-unit nutrient values.
///
/// One unit is whatever basis the catalog uses (a portion, 100 g, ...);
/// allocated quantities are expressed in the same unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories_per_unit: f64,

    #[serde(rename = "VitaminC")]
    pub vitamin_c_per_unit: f64,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, calories_per_unit: f64, vitamin_c_per_unit: f64) -> Self {
        Self {
            name: name.into(),
            calories_per_unit,
            vitamin_c_per_unit,
        }
    }

    /// Non-empty name and finite, non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.calories_per_unit.is_finite()
            && self.calories_per_unit >= 0.0
            && self.vitamin_c_per_unit.is_finite()
            && self.vitamin_c_per_unit >= 0.0
    }

    /// True when the item contributes nothing to either nutrient.
    #[inline]
    pub fn is_inert(&self) -> bool {
        self.calories_per_unit == 0.0 && self.vitamin_c_per_unit == 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} kcal, {} mg vitamin C",
            self.name, self.calories_per_unit, self.vitamin_c_per_unit
        )
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        canonical_key(&self.name)
    }
}

/// Canonical, case-insensitive form of a food name.
pub fn canonical_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(FoodItem::new("Apple", 52.0, 5.0).is_valid());
        assert!(FoodItem::new("Water", 0.0, 0.0).is_valid());
        assert!(!FoodItem::new("Apple", -1.0, 5.0).is_valid());
        assert!(!FoodItem::new("Apple", 52.0, f64::NAN).is_valid());
        assert!(!FoodItem::new("  ", 52.0, 5.0).is_valid());
    }

    #[test]
    fn test_is_inert() {
        assert!(FoodItem::new("Water", 0.0, 0.0).is_inert());
        assert!(!FoodItem::new("Chicken", 239.0, 0.0).is_inert());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let a = FoodItem::new("Apple", 52.0, 5.0);
        let b = FoodItem::new("APPLE", 10.0, 1.0);
        assert_eq!(a, b);
        assert_eq!(a.key(), "apple");
    }

    #[test]
    fn test_serde_field_names() {
        let json = r#"{"Name": "Banana", "Calories": 89, "VitaminC": 10}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Banana");
        assert_eq!(item.calories_per_unit, 89.0);
        assert_eq!(item.vitamin_c_per_unit, 10.0);
    }
}

use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::models::{canonical_key, ConstraintSet, FoodItem};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Ordered set of food items, unique by case-insensitive name.
///
/// Items are never modified once added.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
    /// Lowercase name to position in `items`.
    index: HashMap<String, usize>,
}

impl FoodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, failing on the first duplicate or invalid item.
    pub fn from_items<I: IntoIterator<Item = FoodItem>>(items: I) -> Result<Self> {
        let mut catalog = Self::new();
        for item in items {
            catalog.add(item)?;
        }
        Ok(catalog)
    }

    /// Reference catalog used when no catalog file is available.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for item in [
            FoodItem::new("Apple", 52.0, 5.0),
            FoodItem::new("Banana", 89.0, 10.0),
            FoodItem::new("Chicken", 239.0, 0.0),
        ] {
            let key = item.key();
            catalog.index.insert(key, catalog.items.len());
            catalog.items.push(item);
        }
        catalog
    }

    /// Add an item. Names are unique case-insensitively.
    pub fn add(&mut self, item: FoodItem) -> Result<()> {
        if !item.is_valid() {
            return Err(PlannerError::InvalidInput(format!(
                "invalid food item ({})",
                item.debug_string()
            )));
        }

        let key = item.key();
        if self.index.contains_key(&key) {
            return Err(PlannerError::DuplicateItem(item.name));
        }

        self.index.insert(key, self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Look up an item by name (case-insensitive).
    pub fn get(&self, name: &str) -> Result<&FoodItem> {
        self.index
            .get(&canonical_key(name))
            .map(|&i| &self.items[i])
            .ok_or_else(|| PlannerError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&canonical_key(name))
    }

    /// All items in insertion order. The iterator is `Clone`, so it can be restarted.
    pub fn all(&self) -> std::slice::Iter<'_, FoodItem> {
        self.items.iter()
    }

    /// Items not excluded by `constraints`, in catalog order.
    pub fn eligible(&self, constraints: &ConstraintSet) -> Vec<&FoodItem> {
        let eligible: Vec<&FoodItem> = self
            .items
            .iter()
            .filter(|item| !constraints.is_excluded(&item.name))
            .collect();

        debug!(
            total = self.items.len(),
            eligible = eligible.len(),
            "filtered catalog by exclusions"
        );
        eligible
    }

    /// Closest catalog name to `name`, if similar enough.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let needle = canonical_key(name);
        self.items
            .iter()
            .map(|item| (item, jaro_winkler(&needle, &item.key())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(item, _)| item.name.as_str())
    }

    /// Count of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a FoodCatalog {
    type Item = &'a FoodItem;
    type IntoIter = std::slice::Iter<'a, FoodItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicate_case_insensitive() {
        let mut catalog = FoodCatalog::builtin();
        let err = catalog.add(FoodItem::new("APPLE", 10.0, 1.0)).unwrap_err();
        assert!(matches!(err, PlannerError::DuplicateItem(name) if name == "APPLE"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_add_rejects_negative_nutrients() {
        let mut catalog = FoodCatalog::new();
        let err = catalog.add(FoodItem::new("Bad", -5.0, 1.0)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_get_case_insensitive() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.get("banana").unwrap().calories_per_unit, 89.0);
        assert_eq!(catalog.get("BANANA").unwrap().name, "Banana");

        let err = catalog.get("Kiwi").unwrap_err();
        assert!(matches!(err, PlannerError::NotFound(name) if name == "Kiwi"));
    }

    #[test]
    fn test_all_is_ordered_and_restartable() {
        let catalog = FoodCatalog::builtin();
        let iter = catalog.all();
        let first: Vec<&str> = iter.clone().map(|f| f.name.as_str()).collect();
        let second: Vec<&str> = iter.map(|f| f.name.as_str()).collect();
        assert_eq!(first, vec!["Apple", "Banana", "Chicken"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_eligible_respects_exclusions() {
        let catalog = FoodCatalog::builtin();
        let constraints = ConstraintSet::new(2000.0, 90.0, ["chicken"]).unwrap();
        let names: Vec<&str> = catalog
            .eligible(&constraints)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_suggest() {
        let catalog = FoodCatalog::builtin();
        assert_eq!(catalog.suggest("Bananna"), Some("Banana"));
        assert_eq!(catalog.suggest("chiken"), Some("Chicken"));
        assert_eq!(catalog.suggest("Zucchini"), None);
    }

    #[test]
    fn test_from_items_duplicate() {
        let result = FoodCatalog::from_items(vec![
            FoodItem::new("Rice", 130.0, 0.0),
            FoodItem::new("rice", 130.0, 0.0),
        ]);
        assert!(matches!(result, Err(PlannerError::DuplicateItem(_))));
    }
}

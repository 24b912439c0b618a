use serde::Serialize;

use crate::models::food::canonical_key;

/// Recommended quantity for one catalog item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationEntry {
    pub name: String,
    pub quantity: f64,
}

/// Item name to quantity, in catalog order.
///
/// Holds only eligible (non-excluded) catalog items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Allocation {
    entries: Vec<AllocationEntry>,
}

impl Allocation {
    pub(crate) fn from_entries(entries: Vec<AllocationEntry>) -> Self {
        Self { entries }
    }

    /// Quantity for `name`, or 0 when the item is not part of the allocation.
    pub fn quantity(&self, name: &str) -> f64 {
        self.get(name).map(|e| e.quantity).unwrap_or(0.0)
    }

    /// Entry for `name` (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&AllocationEntry> {
        let key = canonical_key(name);
        self.entries.iter().find(|e| canonical_key(&e.name) == key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Allocation {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Relative objective decrease fell below tolerance.
    Converged,
    /// Iteration budget exhausted.
    IterationBudget,
    /// Wall-clock deadline passed.
    Deadline,
}

impl StopReason {
    pub fn label(&self) -> &'static str {
        match self {
            StopReason::Converged => "converged",
            StopReason::IterationBudget => "iteration budget exhausted",
            StopReason::Deadline => "deadline reached",
        }
    }
}

/// Solver bookkeeping attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolveStats {
    pub iterations: usize,
    pub stop_reason: StopReason,
    /// Objective value at the returned quantities.
    pub objective: f64,
}

/// Outcome of a single allocation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationResult {
    pub allocation: Allocation,
    pub target_calories: f64,
    pub target_vitamin_c: f64,
    pub total_calories: f64,
    pub total_vitamin_c: f64,
    pub calories_met: bool,
    pub vitamin_c_met: bool,
    pub stats: SolveStats,
}

impl AllocationResult {
    /// Both targets reached or exceeded.
    pub fn all_met(&self) -> bool {
        self.calories_met && self.vitamin_c_met
    }

    /// Signed calorie deviation from target.
    pub fn calorie_gap(&self) -> f64 {
        self.total_calories - self.target_calories
    }

    /// Signed vitamin C deviation from target.
    pub fn vitamin_c_gap(&self) -> f64 {
        self.total_vitamin_c - self.target_vitamin_c
    }
}

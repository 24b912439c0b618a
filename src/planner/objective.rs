use crate::config::SolverConfig;
use crate::models::{ConstraintSet, FoodItem};

/// Regularized weighted least-squares objective over item quantities.
///
/// `f(q) = wc (Σ q_i c_i - Tc)² + wv (Σ q_i v_i - Tv)² + ε Σ q_i²`
///
/// Per-item nutrient vectors are copied once at construction so the
/// solver loop touches only contiguous slices.
#[derive(Debug, Clone)]
pub struct Objective {
    calories: Vec<f64>,
    vitamin_c: Vec<f64>,
    target_calories: f64,
    target_vitamin_c: f64,
    calorie_weight: f64,
    vitamin_c_weight: f64,
    epsilon: f64,
}

impl Objective {
    pub fn new(items: &[&FoodItem], constraints: &ConstraintSet, config: &SolverConfig) -> Self {
        Self {
            calories: items.iter().map(|f| f.calories_per_unit).collect(),
            vitamin_c: items.iter().map(|f| f.vitamin_c_per_unit).collect(),
            target_calories: constraints.target_calories(),
            target_vitamin_c: constraints.target_vitamin_c(),
            calorie_weight: config.calorie_weight,
            vitamin_c_weight: config.vitamin_c_weight,
            epsilon: config.epsilon,
        }
    }

    /// Number of decision variables.
    pub fn dim(&self) -> usize {
        self.calories.len()
    }

    /// Total calories and vitamin C delivered by `q`.
    pub fn totals(&self, q: &[f64]) -> (f64, f64) {
        (dot(q, &self.calories), dot(q, &self.vitamin_c))
    }

    pub fn value(&self, q: &[f64]) -> f64 {
        let (cal, vit) = self.totals(q);
        let cal_gap = cal - self.target_calories;
        let vit_gap = vit - self.target_vitamin_c;

        self.calorie_weight * cal_gap * cal_gap
            + self.vitamin_c_weight * vit_gap * vit_gap
            + self.epsilon * dot(q, q)
    }

    /// Write `∇f(q)` into `grad`.
    pub fn gradient_into(&self, q: &[f64], grad: &mut [f64]) {
        let (cal, vit) = self.totals(q);
        let cal_term = 2.0 * self.calorie_weight * (cal - self.target_calories);
        let vit_term = 2.0 * self.vitamin_c_weight * (vit - self.target_vitamin_c);

        for (i, g) in grad.iter_mut().enumerate() {
            *g = cal_term * self.calories[i]
                + vit_term * self.vitamin_c[i]
                + 2.0 * self.epsilon * q[i];
        }
    }

    /// Upper bound on the gradient's Lipschitz constant.
    ///
    /// The Hessian is `2 (wc c cᵀ + wv v vᵀ + ε I)`; its largest eigenvalue
    /// is at most `2 (wc |c|² + wv |v|² + ε)`.
    pub fn lipschitz_bound(&self) -> f64 {
        2.0 * (self.calorie_weight * dot(&self.calories, &self.calories)
            + self.vitamin_c_weight * dot(&self.vitamin_c, &self.vitamin_c)
            + self.epsilon)
    }

    /// Step size `1 / L`. Finite because ε > 0.
    pub fn step_size(&self) -> f64 {
        1.0 / self.lipschitz_bound()
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

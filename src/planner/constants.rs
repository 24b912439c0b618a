/// L2 regularization strength. Keeps the objective strictly convex when
/// nutrient vectors are collinear or items outnumber targets.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Weight on squared calorie deviation.
pub const DEFAULT_CALORIE_WEIGHT: f64 = 1.0;

/// Weight on squared vitamin C deviation.
pub const DEFAULT_VITAMIN_C_WEIGHT: f64 = 1.0;

/// Maximum projected-gradient iterations per solve.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Relative objective decrease below which the solve is considered converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Iterations between trace-level progress events.
pub const PROGRESS_INTERVAL: usize = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Interactive defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Suggested daily calorie target.
pub const DEFAULT_TARGET_CALORIES: f64 = 2000.0;

/// Suggested daily vitamin C target (mg).
pub const DEFAULT_TARGET_VITAMIN_C: f64 = 90.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Quantities below this are shown as zero in reports.
pub const QUANTITY_DISPLAY_THRESHOLD: f64 = 0.005;

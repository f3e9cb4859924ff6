/// Body weight used when no configuration overrides it (kg).
pub const DEFAULT_WEIGHT_KG: f64 = 80.0;

/// Calorie target used for the default macro breakdown (kcal/day).
pub const DEFAULT_CALORIE_TARGET: f64 = 3000.0;

// ─────────────────────────────────────────────────────────────────────────────
// Slope thresholds, as fractions of body weight per 14-day window
// ─────────────────────────────────────────────────────────────────────────────

/// Lower bound (exclusive) of the moderate-gain band.
pub const MODERATE_GAIN_LOWER: f64 = 0.006;

/// Upper bound (exclusive) of the moderate-gain band; above it gain is too fast.
pub const FAST_GAIN_THRESHOLD: f64 = 0.01;

/// Ceiling checked together with a flat slope.
pub const STAGNATION_CEILING: f64 = 0.004;

// ─────────────────────────────────────────────────────────────────────────────
// Calorie adjustments (kcal/day)
// ─────────────────────────────────────────────────────────────────────────────

pub const MODERATE_GAIN_CUT: f64 = 50.0;
pub const FAST_GAIN_CUT: f64 = 150.0;
pub const STAGNATION_BUMP: f64 = 100.0;
pub const WEIGHT_LOSS_BUMP: f64 = 150.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy densities and per-kg coefficients
// ─────────────────────────────────────────────────────────────────────────────

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARBS: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Protein grams per kg of body weight for the fixed breakdown.
pub const PROTEIN_G_PER_KG: f64 = 2.0;

/// Fat grams per kg of body weight for the fixed breakdown.
pub const FAT_G_PER_KG: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// Goal-based coaching
// ─────────────────────────────────────────────────────────────────────────────

/// Lean mass share of body weight (Cunningham estimate).
pub const LEAN_MASS_SHARE_MALE: f64 = 0.85;
pub const LEAN_MASS_SHARE_FEMALE: f64 = 0.75;

/// Cunningham BMR: `BMR_BASE + BMR_PER_KG_LEAN * lean_mass`.
pub const BMR_BASE: f64 = 500.0;
pub const BMR_PER_KG_LEAN: f64 = 22.0;

/// Protein grams per kg while losing, maintaining and gaining.
pub const PROTEIN_G_PER_KG_LOSE: f64 = 2.2;
pub const PROTEIN_G_PER_KG_MAINTAIN: f64 = 2.0;
pub const PROTEIN_G_PER_KG_GAIN: f64 = 1.8;

/// Share of calories targeted from fat.
pub const FAT_CALORIE_SHARE: f64 = 0.275;

/// Minimum fat grams for anyone under `MIN_FAT_HEIGHT_CM`.
pub const MIN_FAT_BASE_G: f64 = 30.0;
pub const MIN_FAT_HEIGHT_CM: f64 = 150.0;
/// Extra minimum fat grams per cm above `MIN_FAT_HEIGHT_CM`.
pub const MIN_FAT_G_PER_CM: f64 = 0.5;

/// Energy stored in one kg of body mass.
pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

pub const DAYS_PER_WEEK: f64 = 7.0;

/// Calorie targets are clamped to this range.
pub const MIN_CALORIE_TARGET: f64 = 1200.0;
pub const MAX_CALORIE_TARGET: f64 = 5000.0;

/// Weeks of averages needed before the TDEE is re-estimated.
pub const TDEE_WINDOW_WEEKS: usize = 3;

/// Largest TDEE change applied in one adjustment.
pub const MAX_TDEE_CHANGE: f64 = 300.0;

use tracing::debug;

use crate::coach::constants::*;
use crate::models::MacroBreakdown;

/// Body parameters shared by the calorie adjuster and the macro calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoachConfig {
    pub weight_kg: f64,
}

impl CoachConfig {
    pub fn new(weight_kg: f64) -> Self {
        Self { weight_kg }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            weight_kg: DEFAULT_WEIGHT_KG,
        }
    }
}

/// Adjust a daily calorie target from the 14-day weight slope.
///
/// Thresholds are fractions of body weight, checked in order, first match wins:
/// - moderate gain, strictly between 0.6% and 1%: -50
/// - fast gain, strictly above 1%: -150
/// - flat slope: +100
/// - losing weight: +150
///
/// Anything else, including both band edges, leaves the target unchanged.
pub fn adjust_calorie_target(slope: f64, current_target: f64, config: &CoachConfig) -> f64 {
    let weight = config.weight_kg;

    let (label, new_target) =
        if slope > weight * MODERATE_GAIN_LOWER && slope < weight * FAST_GAIN_THRESHOLD {
            ("moderate gain", current_target - MODERATE_GAIN_CUT)
        } else if slope > weight * FAST_GAIN_THRESHOLD {
            ("fast gain", current_target - FAST_GAIN_CUT)
        } else if slope == 0.0 && slope < weight * STAGNATION_CEILING {
            ("stagnation", current_target + STAGNATION_BUMP)
        } else if slope < 0.0 {
            ("weight loss", current_target + WEIGHT_LOSS_BUMP)
        } else {
            ("on track", current_target)
        };

    debug!(slope, weight, current_target, new_target, trend = label, "adjusted calorie target");
    new_target
}

/// Split a calorie target into protein, carbohydrate and fat grams.
///
/// Protein and fat are fixed per kg of body weight; carbohydrates take the
/// remaining energy. Each amount is truncated toward zero.
pub fn macro_breakdown(calorie_target: f64, config: &CoachConfig) -> MacroBreakdown {
    let protein = config.weight_kg * PROTEIN_G_PER_KG;
    let fat = config.weight_kg * FAT_G_PER_KG;
    let carbohydrate =
        (calorie_target - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT) / KCAL_PER_G_CARBS;

    let breakdown = MacroBreakdown {
        protein: protein as i64,
        carbohydrate: carbohydrate as i64,
        fat: fat as i64,
    };

    debug!(calorie_target, ?breakdown, "computed macro breakdown");
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weight() {
        assert_eq!(CoachConfig::default().weight_kg, 80.0);
    }

    #[test]
    fn test_macro_breakdown_reference_value() {
        crate::logging::init_test();
        let macros = macro_breakdown(3000.0, &CoachConfig::default());
        assert_eq!(macros.protein, 160);
        assert_eq!(macros.fat, 64);
        // (3000 - 640 - 576) / 4
        assert_eq!(macros.carbohydrate, 446);
    }

    #[test]
    fn test_carbs_truncate_toward_zero() {
        let config = CoachConfig::default();
        // 1784 + 3 leftover kcal -> 446.75 -> 446
        assert_eq!(macro_breakdown(3003.0, &config).carbohydrate, 446);
        // (1000 - 1216) / 4 = -54
        assert_eq!(macro_breakdown(1000.0, &config).carbohydrate, -54);
        // (1214 - 1216) / 4 = -0.5 -> 0
        assert_eq!(macro_breakdown(1214.0, &config).carbohydrate, 0);
    }

    #[test]
    fn test_fractional_weight_truncates() {
        let config = CoachConfig::new(72.7);
        let macros = macro_breakdown(2500.0, &config);
        // 145.4 g protein, 58.16 g fat
        assert_eq!(macros.protein, 145);
        assert_eq!(macros.fat, 58);
    }

    #[test]
    fn test_adjust_branches() {
        crate::logging::init_test();
        let config = CoachConfig::default();
        // 80 kg: band is (0.48, 0.8)
        assert_eq!(adjust_calorie_target(0.6, 2500.0, &config), 2450.0);
        assert_eq!(adjust_calorie_target(1.2, 2500.0, &config), 2350.0);
        assert_eq!(adjust_calorie_target(0.0, 2500.0, &config), 2600.0);
        assert_eq!(adjust_calorie_target(-0.3, 2500.0, &config), 2650.0);
        assert_eq!(adjust_calorie_target(0.2, 2500.0, &config), 2500.0);
    }

    #[test]
    fn test_adjust_does_not_validate_target() {
        let config = CoachConfig::default();
        assert_eq!(adjust_calorie_target(-1.0, -200.0, &config), -50.0);
    }

    #[test]
    fn test_negative_zero_slope_counts_as_flat() {
        let config = CoachConfig::default();
        assert_eq!(adjust_calorie_target(-0.0, 2000.0, &config), 2100.0);
    }
}

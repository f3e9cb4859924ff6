use assert_float_eq::*;

use nutri_coach_rs::coach::{
    FAST_GAIN_THRESHOLD, MODERATE_GAIN_LOWER, STAGNATION_CEILING, adjust_calorie_target,
    macro_breakdown,
};
use nutri_coach_rs::CoachConfig;

const TARGET: f64 = 2800.0;

fn config() -> CoachConfig {
    CoachConfig::new(80.0)
}

#[test]
fn test_macros_for_3000_kcal() {
    let macros = macro_breakdown(3000.0, &config());
    assert_eq!(macros.protein, 160);
    assert_eq!(macros.fat, 64);
    assert_eq!(macros.carbohydrate, 446);
    assert_eq!(
        macros.to_string(),
        r#"{"Protein": 160, "Kohlenhydrate": 446, "Fett": 64}"#
    );
}

#[test]
fn test_macros_idempotent() {
    let config = config();
    let first = macro_breakdown(2650.0, &config);
    let second = macro_breakdown(2650.0, &config);
    assert_eq!(first, second);
}

#[test]
fn test_protein_and_fat_independent_of_calories() {
    let config = config();
    for calories in [0.0, 800.0, 1500.0, 2200.0, 3000.0, 4500.0, -100.0] {
        let macros = macro_breakdown(calories, &config);
        assert_eq!(macros.protein, 160);
        assert_eq!(macros.fat, 64);
    }
}

#[test]
fn test_low_target_yields_negative_carbs() {
    let macros = macro_breakdown(800.0, &config());
    // (800 - 1216) / 4
    assert_eq!(macros.carbohydrate, -104);
}

#[test]
fn test_moderate_gain_lower_edge_is_exclusive() {
    let config = config();
    let edge = config.weight_kg * MODERATE_GAIN_LOWER;
    assert_float_absolute_eq!(adjust_calorie_target(edge, TARGET, &config), TARGET, 1e-9);
}

#[test]
fn test_just_above_moderate_gain_lower_edge() {
    let config = config();
    let slope = config.weight_kg * MODERATE_GAIN_LOWER + 1e-6;
    assert_float_absolute_eq!(
        adjust_calorie_target(slope, TARGET, &config),
        TARGET - 50.0,
        1e-9
    );
}

#[test]
fn test_fast_gain_edge_is_unchanged() {
    let config = config();
    let edge = config.weight_kg * FAST_GAIN_THRESHOLD;
    assert_float_absolute_eq!(adjust_calorie_target(edge, TARGET, &config), TARGET, 1e-9);
}

#[test]
fn test_above_fast_gain_threshold() {
    let config = config();
    let slope = config.weight_kg * FAST_GAIN_THRESHOLD + 1e-6;
    assert_float_absolute_eq!(
        adjust_calorie_target(slope, TARGET, &config),
        TARGET - 150.0,
        1e-9
    );
    assert_float_absolute_eq!(
        adjust_calorie_target(5.0, TARGET, &config),
        TARGET - 150.0,
        1e-9
    );
}

#[test]
fn test_zero_slope_adds_100() {
    assert_float_absolute_eq!(
        adjust_calorie_target(0.0, TARGET, &config()),
        TARGET + 100.0,
        1e-9
    );
}

#[test]
fn test_negative_slope_adds_150() {
    let config = config();
    assert_float_absolute_eq!(
        adjust_calorie_target(-5.0, TARGET, &config),
        TARGET + 150.0,
        1e-9
    );
    assert_float_absolute_eq!(
        adjust_calorie_target(-1e-6, TARGET, &config),
        TARGET + 150.0,
        1e-9
    );
}

#[test]
fn test_small_gain_below_band_unchanged() {
    let config = config();
    // Between 0 and the 0.4% ceiling, and between 0.4% and 0.6%
    for slope in [1e-6, config.weight_kg * STAGNATION_CEILING, 0.45] {
        assert_float_absolute_eq!(adjust_calorie_target(slope, TARGET, &config), TARGET, 1e-9);
    }
}

#[test]
fn test_thresholds_scale_with_weight() {
    // 100 kg: band is (0.6, 1.0)
    let heavy = CoachConfig::new(100.0);
    assert_float_absolute_eq!(adjust_calorie_target(0.7, TARGET, &heavy), TARGET - 50.0, 1e-9);
    // 0.7 is above 1% of 60 kg
    let light = CoachConfig::new(60.0);
    assert_float_absolute_eq!(adjust_calorie_target(0.7, TARGET, &light), TARGET - 150.0, 1e-9);
}

#[test]
fn test_adjusted_target_feeds_macros() {
    let config = config();
    let target = adjust_calorie_target(0.6, 3000.0, &config);
    let macros = macro_breakdown(target, &config);
    // (2950 - 1216) / 4 = 433.5
    assert_eq!(macros.carbohydrate, 433);
}

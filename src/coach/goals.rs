//! Goal-based coaching: energy expenditure estimates, calorie targets and
//! goal-aware macros.
//!
//! Rounding here is half-up (toward positive infinity), unlike the truncating
//! fixed breakdown in [`crate::coach::calculations`].

use tracing::{debug, info};

use crate::coach::constants::*;
use crate::error::{CoachError, Result};
use crate::models::{CalorieWeek, Gender, Goal, GoalMacros, Profile, WeeklyAverage, WeightEntry};

/// Round to the nearest integer, with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` can itself round, so compare the fractional part instead.
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Estimate total daily energy expenditure with the Cunningham equation.
pub fn initial_tdee(profile: &Profile) -> f64 {
    let lean_share = match profile.gender {
        Gender::Male => LEAN_MASS_SHARE_MALE,
        Gender::Female => LEAN_MASS_SHARE_FEMALE,
    };
    let lean_mass = profile.weight_kg * lean_share;
    let bmr = BMR_BASE + BMR_PER_KG_LEAN * lean_mass;
    let tdee = round_half_up(bmr * profile.activity_level);

    debug!(lean_mass, bmr, tdee, "estimated initial TDEE");
    tdee
}

/// Protein grams per kg of body weight for a goal.
pub fn protein_per_kg(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => PROTEIN_G_PER_KG_LOSE,
        Goal::Maintain => PROTEIN_G_PER_KG_MAINTAIN,
        Goal::Gain => PROTEIN_G_PER_KG_GAIN,
    }
}

/// Height-based fat floor in grams.
pub fn min_fat_grams(height_cm: f64) -> f64 {
    if height_cm < MIN_FAT_HEIGHT_CM {
        MIN_FAT_BASE_G
    } else {
        round_half_up((height_cm - MIN_FAT_HEIGHT_CM) * MIN_FAT_G_PER_CM + MIN_FAT_BASE_G)
    }
}

/// Goal-aware macro split.
///
/// Fat is the larger of the height floor and 27.5% of calories. Carbohydrates
/// fill the rest and are never negative.
pub fn goal_macros(calories: f64, weight_kg: f64, height_cm: f64, goal: Goal) -> GoalMacros {
    let protein = round_half_up(weight_kg * protein_per_kg(goal));
    let protein_cals = protein * KCAL_PER_G_PROTEIN;

    let min_fat = min_fat_grams(height_cm);
    let target_fat = round_half_up(calories * FAT_CALORIE_SHARE / KCAL_PER_G_FAT);
    let fat = min_fat.max(target_fat);
    let fat_cals = fat * KCAL_PER_G_FAT;

    let carb_cals = (calories - protein_cals - fat_cals).max(0.0);
    let carbs = round_half_up(carb_cals / KCAL_PER_G_CARBS);

    GoalMacros {
        protein: protein as i64,
        fat: fat as i64,
        carbs: carbs as i64,
        min_fat: min_fat as i64,
    }
}

/// Daily calorie target for a goal and a weekly rate of change.
///
/// `weekly_goal_percent` is the share of body weight to lose or gain per week.
/// The result is clamped to [1200, 5000] kcal.
pub fn calorie_target(tdee: f64, goal: Goal, weekly_goal_percent: f64, weight_kg: f64) -> f64 {
    let weekly_goal_kg = (weekly_goal_percent / 100.0) * weight_kg;
    let weekly_delta = weekly_goal_kg * KCAL_PER_KG_BODY_MASS;
    let daily_delta = weekly_delta / DAYS_PER_WEEK;

    let target = match goal {
        Goal::Lose => round_half_up(tdee - daily_delta),
        Goal::Gain => round_half_up(tdee + daily_delta),
        Goal::Maintain => tdee,
    };

    target.clamp(MIN_CALORIE_TARGET, MAX_CALORIE_TARGET)
}

/// Mean weight of the entries logged in `week`, or `None` if there are none.
pub fn weekly_average(week: u32, entries: &[WeightEntry]) -> Option<f64> {
    let values: Vec<f64> = entries
        .iter()
        .filter(|e| e.week == week)
        .map(|e| e.value)
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Weekly averages for every week present in `entries`, in week order.
pub fn weekly_averages(entries: &[WeightEntry]) -> Vec<WeeklyAverage> {
    let mut weeks: Vec<u32> = entries.iter().map(|e| e.week).collect();
    weeks.sort_unstable();
    weeks.dedup();

    weeks
        .into_iter()
        .filter_map(|week| {
            weekly_average(week, entries).map(|avg_weight| WeeklyAverage { week, avg_weight })
        })
        .collect()
}

/// Re-estimate TDEE from the last three weekly averages and logged intake.
///
/// Returns `tdee` unchanged until three weeks are available. Untracked weeks
/// still count toward the 21-day divisor. If no week in the window was
/// tracked, `recommended_calories` stands in for intake. The change is capped
/// at 300 kcal in either direction.
pub fn adjust_tdee(
    weekly_averages: &[WeeklyAverage],
    calorie_history: &[CalorieWeek],
    tdee: f64,
    recommended_calories: f64,
) -> f64 {
    if weekly_averages.len() < TDEE_WINDOW_WEEKS {
        debug!(weeks = weekly_averages.len(), "not enough weeks to adjust TDEE");
        return tdee;
    }

    let recent = &weekly_averages[weekly_averages.len() - TDEE_WINDOW_WEEKS..];
    let oldest = recent[0];
    let newest = recent[recent.len() - 1];
    let num_days = DAYS_PER_WEEK * TDEE_WINDOW_WEEKS as f64;

    let tracked: Vec<f64> = calorie_history
        .iter()
        .filter(|c| c.week >= oldest.week && c.week <= newest.week)
        .filter_map(|c| c.avg_calories)
        .collect();

    let avg_daily_calories = if tracked.is_empty() {
        recommended_calories
    } else {
        tracked.iter().map(|c| c * DAYS_PER_WEEK).sum::<f64>() / num_days
    };

    let weight_change = oldest.avg_weight - newest.avg_weight;
    let energy_from_body_change = (weight_change * KCAL_PER_KG_BODY_MASS) / num_days;
    let calculated = round_half_up(avg_daily_calories + energy_from_body_change);

    let change = calculated - tdee;
    let adjusted = if change.abs() > MAX_TDEE_CHANGE {
        tdee + MAX_TDEE_CHANGE.copysign(change)
    } else {
        calculated
    };

    info!(tdee, calculated, adjusted, "re-estimated TDEE");
    adjusted
}

/// Check that the target weight points in the direction of the goal.
pub fn validate_goal_weight(goal: Goal, current_kg: f64, target_kg: f64) -> Result<()> {
    match goal {
        Goal::Lose if current_kg <= target_kg => Err(CoachError::InvalidGoalWeight(
            "target weight must be below current weight to lose weight".to_string(),
        )),
        Goal::Gain if current_kg >= target_kg => Err(CoachError::InvalidGoalWeight(
            "target weight must be above current weight to gain weight".to_string(),
        )),
        _ => Ok(()),
    }
}

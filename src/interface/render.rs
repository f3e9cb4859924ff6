use serde::Serialize;

use crate::error::Result;
use crate::models::{GoalMacros, MacroBreakdown, WeeklyAverage};

/// Render a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One-line macro breakdown, e.g. `{"Protein": 160, "Kohlenhydrate": 446, "Fett": 64}`.
pub fn format_macros(macros: &MacroBreakdown) -> String {
    macros.to_string()
}

#[derive(Serialize)]
struct Adjustment<'a> {
    previous_target: f64,
    target: f64,
    macros: &'a MacroBreakdown,
    macro_calories: f64,
}

/// New calorie target with the macros that go with it.
pub fn format_adjustment(
    previous_target: f64,
    target: f64,
    macros: &MacroBreakdown,
    json: bool,
) -> Result<String> {
    if json {
        return to_json(&Adjustment {
            previous_target,
            target,
            macros,
            macro_calories: macros.total_calories(),
        });
    }

    let delta = target - previous_target;
    let sign = if delta > 0.0 { "+" } else { "" };
    Ok(format!(
        "Calorie target: {:.0} -> {:.0} kcal ({}{:.0})\nMacros: {} ({:.0} kcal)",
        previous_target,
        target,
        sign,
        delta,
        format_macros(macros),
        macros.total_calories()
    ))
}

/// Goal-aware macros as a small table.
pub fn format_goal_macros(macros: &GoalMacros) -> String {
    let mut lines = Vec::with_capacity(5);
    lines.push(format!("Protein: {:>5} g", macros.protein));
    lines.push(format!("Fat:     {:>5} g (floor {} g)", macros.fat, macros.min_fat));
    lines.push(format!("Carbs:   {:>5} g", macros.carbs));
    lines.push(format!("Total:   {:>5.0} kcal", macros.total_calories()));
    lines.join("\n")
}

/// Weekly averages, one week per line.
pub fn format_weekly_averages(averages: &[WeeklyAverage]) -> String {
    if averages.is_empty() {
        return "No weigh-ins found.".to_string();
    }

    averages
        .iter()
        .map(|a| format!("Week {:>3}: {:.1} kg", a.week, a.avg_weight))
        .collect::<Vec<_>>()
        .join("\n")
}

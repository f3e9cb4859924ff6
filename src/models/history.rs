use serde::{Deserialize, Serialize};

/// A single weigh-in tagged with the week it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub week: u32,
    pub value: f64,
}

/// Mean body weight for one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAverage {
    pub week: u32,
    pub avg_weight: f64,
}

/// Mean daily intake for one week; `None` when the week was not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieWeek {
    pub week: u32,
    #[serde(default)]
    pub avg_calories: Option<f64>,
}

/// Caller-supplied history used to re-estimate energy expenditure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendHistory {
    #[serde(default)]
    pub weekly_averages: Vec<WeeklyAverage>,

    #[serde(default)]
    pub calorie_history: Vec<CalorieWeek>,

    /// Intake assumed when no week in the window was tracked.
    pub recommended_calories: f64,
}

mod history;
mod macros;
mod profile;

pub use history::{CalorieWeek, TrendHistory, WeeklyAverage, WeightEntry};
pub use macros::{GoalMacros, MacroBreakdown};
pub use profile::{Gender, Goal, Profile};

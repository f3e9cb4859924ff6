pub mod calculations;
pub mod constants;
pub mod goals;

pub use calculations::{CoachConfig, adjust_calorie_target, macro_breakdown};
pub use constants::*;
pub use goals::{
    adjust_tdee, calorie_target, goal_macros, initial_tdee, min_fat_grams, protein_per_kg,
    round_half_up, validate_goal_weight, weekly_average, weekly_averages,
};

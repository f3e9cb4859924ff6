pub mod cli;
pub mod coach;
pub mod config;
pub mod error;
pub mod input;
pub mod interface;
pub mod logging;
pub mod models;

pub use coach::{CoachConfig, adjust_calorie_target, macro_breakdown};
pub use config::AppConfig;
pub use error::{CoachError, Result};
pub use models::{GoalMacros, MacroBreakdown};

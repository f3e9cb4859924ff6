pub mod render;

pub use render::{
    format_adjustment, format_goal_macros, format_macros, format_weekly_averages, to_json,
};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{Gender, Goal};

/// NutriCoach: adjusts calorie targets from weight trends and derives macros.
#[derive(Parser, Debug)]
#[command(name = "nutri_coach")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a JSON config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Body weight in kg, overriding the config file.
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Split a calorie target into protein, carbohydrate and fat grams.
    Macros {
        /// Daily calorie target (defaults to the configured target).
        #[arg(long, allow_negative_numbers = true)]
        calories: Option<f64>,
    },

    /// Adjust a calorie target from the 14-day weight slope.
    Adjust {
        /// Weight change over the last 14 days in kg.
        #[arg(long, allow_negative_numbers = true)]
        slope: f64,

        /// Current daily calorie target.
        #[arg(long, allow_negative_numbers = true)]
        target: f64,
    },

    /// Estimate initial daily energy expenditure.
    Tdee {
        #[arg(long, value_enum)]
        gender: Gender,

        /// Body weight in kg (defaults to the configured weight).
        #[arg(long, allow_negative_numbers = true)]
        weight_kg: Option<f64>,

        /// Activity multiplier, e.g. 1.2 to 1.9.
        #[arg(long, allow_negative_numbers = true)]
        activity: f64,
    },

    /// Derive a daily calorie target from TDEE and a goal.
    Target {
        #[arg(long, allow_negative_numbers = true)]
        tdee: f64,

        #[arg(long, value_enum, default_value_t = Goal::Maintain)]
        goal: Goal,

        /// Percent of body weight to lose or gain per week.
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        weekly_percent: f64,

        /// Body weight in kg (defaults to the configured weight).
        #[arg(long, allow_negative_numbers = true)]
        weight_kg: Option<f64>,
    },

    /// Goal-aware macros with a height-based fat floor.
    Plan {
        #[arg(long, allow_negative_numbers = true)]
        calories: f64,

        /// Body weight in kg (defaults to the configured weight).
        #[arg(long, allow_negative_numbers = true)]
        weight_kg: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        height_cm: f64,

        #[arg(long, value_enum, default_value_t = Goal::Maintain)]
        goal: Goal,
    },

    /// Average weigh-ins per week from a `week,value` CSV file.
    WeeklyAverage {
        #[arg(long)]
        entries: PathBuf,

        /// Only report this week.
        #[arg(long)]
        week: Option<u32>,
    },

    /// Re-estimate TDEE from a JSON trend history.
    AdjustTdee {
        #[arg(long)]
        history: PathBuf,

        /// Current TDEE estimate.
        #[arg(long, allow_negative_numbers = true)]
        tdee: f64,
    },

    /// Check that a target weight matches the goal.
    ValidateGoal {
        #[arg(long, value_enum)]
        goal: Goal,

        /// Current weight in kg (defaults to the configured weight).
        #[arg(long, allow_negative_numbers = true)]
        current_kg: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        target_kg: f64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Macros { calories: None }
    }
}

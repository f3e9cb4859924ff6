use clap::Parser;
use std::path::Path;

use nutri_coach_rs::cli::{Cli, Command};
use nutri_coach_rs::coach::{
    adjust_calorie_target, adjust_tdee, calorie_target, goal_macros, initial_tdee,
    macro_breakdown, validate_goal_weight, weekly_average, weekly_averages,
};
use nutri_coach_rs::config::AppConfig;
use nutri_coach_rs::error::Result;
use nutri_coach_rs::input::{load_history, load_weight_entries};
use nutri_coach_rs::interface::{
    format_adjustment, format_goal_macros, format_macros, format_weekly_averages, to_json,
};
use nutri_coach_rs::logging;
use nutri_coach_rs::models::{Gender, Goal, Profile};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_level("debug");
    } else {
        logging::init();
    }

    let config = AppConfig::load_or_default(cli.config.as_deref())?.with_weight(cli.weight);
    let command = cli.command.unwrap_or_default();
    let json = cli.json;

    match command {
        Command::Macros { calories } => cmd_macros(&config, calories, json),
        Command::Adjust { slope, target } => cmd_adjust(&config, slope, target, json),
        Command::Tdee {
            gender,
            weight_kg,
            activity,
        } => cmd_tdee(&config, gender, weight_kg, activity, json),
        Command::Target {
            tdee,
            goal,
            weekly_percent,
            weight_kg,
        } => cmd_target(&config, tdee, goal, weekly_percent, weight_kg, json),
        Command::Plan {
            calories,
            weight_kg,
            height_cm,
            goal,
        } => cmd_plan(&config, calories, weight_kg, height_cm, goal, json),
        Command::WeeklyAverage { entries, week } => cmd_weekly_average(&entries, week, json),
        Command::AdjustTdee { history, tdee } => cmd_adjust_tdee(&history, tdee, json),
        Command::ValidateGoal {
            goal,
            current_kg,
            target_kg,
        } => cmd_validate_goal(&config, goal, current_kg, target_kg),
    }
}

/// Print the fixed macro breakdown for a calorie target.
fn cmd_macros(config: &AppConfig, calories: Option<f64>, json: bool) -> Result<()> {
    let target = calories.unwrap_or(config.calorie_target);
    let macros = macro_breakdown(target, &config.coach());

    if json {
        println!("{}", to_json(&macros)?);
    } else {
        println!("{}", format_macros(&macros));
    }
    Ok(())
}

/// Adjust the calorie target from the slope and print the resulting macros.
fn cmd_adjust(config: &AppConfig, slope: f64, target: f64, json: bool) -> Result<()> {
    let coach = config.coach();
    let new_target = adjust_calorie_target(slope, target, &coach);
    let macros = macro_breakdown(new_target, &coach);

    println!("{}", format_adjustment(target, new_target, &macros, json)?);
    Ok(())
}

fn cmd_tdee(
    config: &AppConfig,
    gender: Gender,
    weight_kg: Option<f64>,
    activity: f64,
    json: bool,
) -> Result<()> {
    let profile = Profile {
        gender,
        weight_kg: weight_kg.unwrap_or(config.weight_kg),
        activity_level: activity,
    };
    let tdee = initial_tdee(&profile);

    if json {
        println!("{}", to_json(&serde_json::json!({ "tdee": tdee }))?);
    } else {
        println!("TDEE: {:.0} kcal", tdee);
    }
    Ok(())
}

fn cmd_target(
    config: &AppConfig,
    tdee: f64,
    goal: Goal,
    weekly_percent: f64,
    weight_kg: Option<f64>,
    json: bool,
) -> Result<()> {
    let weight = weight_kg.unwrap_or(config.weight_kg);
    let target = calorie_target(tdee, goal, weekly_percent, weight);

    if json {
        println!(
            "{}",
            to_json(&serde_json::json!({ "goal": goal, "calorie_target": target }))?
        );
    } else {
        println!("Calorie target ({}): {:.0} kcal", goal, target);
    }
    Ok(())
}

fn cmd_plan(
    config: &AppConfig,
    calories: f64,
    weight_kg: Option<f64>,
    height_cm: f64,
    goal: Goal,
    json: bool,
) -> Result<()> {
    let weight = weight_kg.unwrap_or(config.weight_kg);
    let macros = goal_macros(calories, weight, height_cm, goal);

    if json {
        println!("{}", to_json(&macros)?);
    } else {
        println!("{}", format_goal_macros(&macros));
    }
    Ok(())
}

fn cmd_weekly_average(entries_path: &Path, week: Option<u32>, json: bool) -> Result<()> {
    let entries = load_weight_entries(entries_path)?;

    match week {
        Some(week) => {
            let average = weekly_average(week, &entries);
            if json {
                println!(
                    "{}",
                    to_json(&serde_json::json!({ "week": week, "avg_weight": average }))?
                );
            } else {
                match average {
                    Some(avg) => println!("Week {}: {:.1} kg", week, avg),
                    None => println!("No weigh-ins for week {}.", week),
                }
            }
        }
        None => {
            let averages = weekly_averages(&entries);
            if json {
                println!("{}", to_json(&averages)?);
            } else {
                println!("{}", format_weekly_averages(&averages));
            }
        }
    }
    Ok(())
}

fn cmd_adjust_tdee(history_path: &Path, tdee: f64, json: bool) -> Result<()> {
    let history = load_history(history_path)?;
    let adjusted = adjust_tdee(
        &history.weekly_averages,
        &history.calorie_history,
        tdee,
        history.recommended_calories,
    );

    if json {
        println!(
            "{}",
            to_json(&serde_json::json!({ "previous_tdee": tdee, "tdee": adjusted }))?
        );
    } else {
        println!("TDEE: {:.0} -> {:.0} kcal", tdee, adjusted);
    }
    Ok(())
}

fn cmd_validate_goal(
    config: &AppConfig,
    goal: Goal,
    current_kg: Option<f64>,
    target_kg: f64,
) -> Result<()> {
    let current = current_kg.unwrap_or(config.weight_kg);
    validate_goal_weight(goal, current, target_kg)?;
    println!("Goal '{}' from {:.1} kg to {:.1} kg is valid.", goal, current, target_kg);
    Ok(())
}

// ABOUTME: Nutrilog CLI - energy target calculations from the command line
// ABOUTME: Prints BMR, TDEE and goal calories as JSON for explicit physiology values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors
//!
//! Usage:
//! ```bash
//! # BMR and TDEE only
//! nutrilog-cli energy --gender M --age 25 --height 180 --weight 75 --activity moderate
//!
//! # Including goal calories
//! nutrilog-cli energy --gender F --age 30 --height 165 --weight 60 --activity light --goal lose_weight
//!
//! # Default exercise catalog
//! nutrilog-cli exercises
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use nutrilog::config::energy::EnergyModelConfig;
use nutrilog::constants::exercises::DEFAULT_EXERCISES;
use nutrilog::intelligence::{calculate_energy_targets, preview_tdee};
use nutrilog::logging::LoggingConfig;
use nutrilog::models::{ActivityLevel, Gender, GoalType, PhysiologySnapshot};
use serde_json::json;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nutrilog-cli",
    about = "Nutrilog energy calculator",
    long_about = "Compute BMR, TDEE and goal calories with the Mifflin-St Jeor equation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute energy targets
    Energy {
        /// Gender code (M or F)
        #[arg(long)]
        gender: Gender,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Activity level (sedentary, light, moderate, hard, extreme)
        #[arg(long)]
        activity: ActivityLevel,

        /// Goal (lose_weight, maintain_weight, gain_weight); omit for BMR and TDEE only
        #[arg(long)]
        goal: Option<GoalType>,
    },

    /// List the default exercise catalog
    Exercises,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;

    let config = EnergyModelConfig::global();

    let output = match cli.command {
        Command::Energy {
            gender,
            age,
            height,
            weight,
            activity,
            goal: None,
        } => {
            let preview = preview_tdee(gender, age, height, weight, activity, config)?;
            serde_json::to_value(preview)?
        }
        Command::Energy {
            gender,
            age,
            height,
            weight,
            activity,
            goal: Some(goal),
        } => {
            let snapshot = PhysiologySnapshot {
                gender: Some(gender),
                age: Some(age),
                height_cm: Some(height),
                weight_kg: Some(weight),
                activity_level: Some(activity),
                goal_type: Some(goal),
            };
            let targets = calculate_energy_targets(&snapshot.complete()?, config)?;
            serde_json::to_value(targets)?
        }
        Command::Exercises => json!(DEFAULT_EXERCISES
            .iter()
            .map(|(name, calories_per_hour)| json!({
                "name": name,
                "caloriesPerHour": calories_per_hour,
            }))
            .collect::<Vec<_>>()),
    };

    debug!("Computed output for command");
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

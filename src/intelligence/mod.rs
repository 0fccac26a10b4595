// ABOUTME: Intelligence module: energy model, daily aggregation and daily reports
// ABOUTME: Pure synchronous computation over physiology snapshots and record collections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! # Intelligence Module
//!
//! Turns a physiology snapshot into energy targets and a day's records into
//! totals, meal groupings and a goal verdict. Nothing here performs I/O or logs;
//! the service layer does both.

/// Per-day totals, meal grouping and goal comparison
pub mod daily_aggregator;
/// Markdown summary of a day
pub mod daily_report;
/// BMR, TDEE and goal calories
pub mod energy_model;

pub use daily_aggregator::{
    compare_to_goal, daily_overview, goal_progress, group_by_meal, group_by_user_meals,
    range_overview, DailyOverview, GoalProgress, GoalVerdict, MealSummary, RecordSet,
};
pub use daily_report::render_daily_report;
pub use energy_model::{
    calculate_bmr, calculate_energy_targets, calculate_goal_calories, calculate_tdee,
    compute_energy_targets, hydration_target_liters, preview_tdee, EnergyModel, EnergyTargets,
    TdeePreview,
};

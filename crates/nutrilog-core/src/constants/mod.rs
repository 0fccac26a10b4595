// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy coefficient tables, hydration targets, default meals and exercise catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Constants module
//!
//! Pure data grouped by domain. The energy tables are the defaults behind
//! `EnergyModelConfig`; they are lookup tables rather than match arms so that a
//! variant missing from a (possibly user-supplied) table surfaces as an explicit
//! error instead of falling through.

use crate::models::{ActivityLevel, Gender, GoalType};

/// Mifflin-St Jeor coefficients and the activity/goal multiplier tables
pub mod energy {
    use super::{ActivityLevel, Gender, GoalType};

    /// kcal per kg of body weight
    pub const MSJ_WEIGHT_COEF: f64 = 10.0;
    /// kcal per cm of height
    pub const MSJ_HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age
    pub const MSJ_AGE_COEF: f64 = -5.0;

    /// Per-gender additive constant
    pub const GENDER_CONSTANTS: [(Gender, f64); 2] = [(Gender::Male, 5.0), (Gender::Female, -161.0)];

    /// TDEE = BMR x factor
    pub const ACTIVITY_FACTORS: [(ActivityLevel, f64); 5] = [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Hard, 1.725),
        (ActivityLevel::Extreme, 1.9),
    ];

    /// Goal calories = TDEE x multiplier (20% deficit / unchanged / 20% surplus)
    pub const GOAL_MULTIPLIERS: [(GoalType, f64); 3] = [
        (GoalType::LoseWeight, 0.8),
        (GoalType::MaintainWeight, 1.0),
        (GoalType::GainWeight, 1.2),
    ];
}

/// Hydration target constants
pub mod hydration {
    /// Recommended daily water intake per kg of body weight
    pub const WATER_ML_PER_KG: f64 = 35.0;
    /// Milliliters per liter
    pub const ML_PER_LITER: f64 = 1000.0;
}

/// Unit conversion constants
pub mod units {
    /// Food nutrient baselines are expressed per this many grams
    pub const NUTRIENT_BASELINE_GRAMS: f64 = 100.0;
}

/// Request limits
pub mod limits {
    /// Longest day range a single range overview may cover
    pub const MAX_RANGE_DAYS: i64 = 366;
    /// Largest number of portions in one consumption
    pub const MAX_PORTIONS: f64 = 100.0;
    /// Heaviest portion (g)
    pub const MAX_SERVING_GRAMS: f64 = 5_000.0;
    /// Upper bound for any per-100g nutrient value (kcal or g)
    pub const MAX_NUTRIENT_PER_100G: f64 = 1_000.0;
    /// Longest single exercise session (h)
    pub const MAX_EXERCISE_HOURS: f64 = 24.0;
    /// Largest single water intake (L)
    pub const MAX_WATER_LITERS: f64 = 20.0;
}

/// Service identification for logs
pub mod service_names {
    /// Service name reported in structured logs
    pub const NUTRILOG: &str = "nutrilog";
}

/// Meals created for every new user: (name, hour, minute)
pub mod meals {
    /// Default meal names and times of day
    pub const DEFAULT_MEALS: [(&str, u32, u32); 4] = [
        ("Breakfast", 7, 0),
        ("Lunch", 11, 0),
        ("Afternoon Snack", 15, 0),
        ("Dinner", 19, 0),
    ];
}

/// Shared exercise catalog seeded on first start: (name, kcal per hour)
pub mod exercises {
    /// Default exercise catalog
    pub const DEFAULT_EXERCISES: [(&str, u32); 14] = [
        ("Walking (moderate, 5 km/h)", 250),
        ("Running (moderate, 8 km/h)", 600),
        ("Cycling (light, 16-19 km/h)", 400),
        ("Cycling (moderate, 20-23 km/h)", 600),
        ("Swimming (moderate)", 500),
        ("Yoga", 200),
        ("Dancing (moderate)", 300),
        ("Weight training (moderate)", 250),
        ("Jump rope", 700),
        ("Stair climbing", 500),
        ("Functional training (HIIT)", 700),
        ("Aerobics (moderate intensity)", 400),
        ("Rowing (moderate)", 500),
        ("Boxing or martial arts (training)", 600),
    ];
}

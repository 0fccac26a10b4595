// ABOUTME: Domain models for physiology, foods, portions and daily records
// ABOUTME: Re-exports the record types and the calendar-day trait shared by all streams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

mod activity;
mod hydration;
mod nutrition;
mod physiology;

pub use activity::{Exercise, ExerciseLog};
pub use hydration::WaterIntake;
pub use nutrition::{
    FoodConsumption, FoodItem, Meal, MealSlot, NutrientProfile, RoundedNutrients, ServingSize,
};
pub use physiology::{
    ActivityLevel, CompletePhysiology, Gender, GoalType, PhysiologyPatch, PhysiologySnapshot,
};

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use uuid::Uuid;

/// A record that belongs to one user and one calendar day.
///
/// Timestamped records report the UTC date of their timestamp.
pub trait DailyRecord {
    /// Owning user
    fn user_id(&self) -> Uuid;

    /// Calendar day the record counts towards
    fn record_date(&self) -> NaiveDate;

    /// Whether the record falls on `date`
    fn is_on(&self, date: NaiveDate) -> bool {
        self.record_date() == date
    }
}

/// Round to the nearest integer, ties to even.
///
/// Every derived kcal and gram value in the workspace goes through this function.
#[must_use]
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Reject zero, negative and non-finite quantities
pub(crate) fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Check a logged amount (portions, grams, hours, liters) against `(0, max]`.
///
/// # Errors
///
/// Returns `InvalidInput` if `value` is not strictly positive and finite, and
/// `ValueOutOfRange` if it exceeds `max`.
pub fn check_amount(label: &str, value: f64, max: f64) -> AppResult<()> {
    if !is_positive(value) {
        return Err(AppError::invalid_input(format!(
            "{label} must be positive, got {value}"
        )));
    }
    if value > max {
        return Err(AppError::out_of_range(format!(
            "{label} must be at most {max}, got {value}"
        )));
    }
    Ok(())
}

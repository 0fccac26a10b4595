// ABOUTME: Energy model: BMR, TDEE and goal calories from a physiology snapshot
// ABOUTME: Coefficients come from lookup tables; a missing entry is an explicit error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Energy Model
//!
//! Pure, deterministic conversion of a complete physiology snapshot into three
//! integers. Every result is rounded half-to-even.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::energy::{
    ActivityFactorsConfig, BmrConfig, EnergyModelConfig, GoalAdjustmentConfig, HydrationConfig,
};
use crate::constants::hydration::ML_PER_LITER;
use crate::errors::EnergyError;
use crate::models::{
    round_half_even, ActivityLevel, CompletePhysiology, Gender, GoalType, PhysiologySnapshot,
};
use serde::{Deserialize, Serialize};

/// Derived energy values for one snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyTargets {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
    /// TDEE adjusted for the weight-change goal (kcal/day)
    pub goal_calories: i64,
}

/// BMR and TDEE computed without a stored profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdeePreview {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: i64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: i64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor.
///
/// Formula:
/// - Men: `10 * weight + 6.25 * height - 5 * age + 5`
/// - Women: `10 * weight + 6.25 * height - 5 * age - 161`
///
/// # Errors
///
/// Returns `UnsupportedGender` if the coefficient table has no constant for `gender`
pub fn calculate_bmr(
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    config: &BmrConfig,
) -> Result<i64, EnergyError> {
    let gender_constant = config
        .gender_constant(gender)
        .ok_or_else(|| EnergyError::UnsupportedGender(gender.to_string()))?;

    let weight_component = config.weight_coef * weight_kg;
    let height_component = config.height_coef * height_cm;
    let age_component = config.age_coef * f64::from(age);

    Ok(round_half_even(
        weight_component + height_component + age_component + gender_constant,
    ))
}

/// `round(bmr * activity_factor)`
///
/// # Errors
///
/// Returns `UnsupportedActivityLevel` if the factor table has no entry for `activity_level`
pub fn calculate_tdee(
    bmr: i64,
    activity_level: ActivityLevel,
    config: &ActivityFactorsConfig,
) -> Result<i64, EnergyError> {
    let factor = config
        .factor(activity_level)
        .ok_or_else(|| EnergyError::UnsupportedActivityLevel(activity_level.to_string()))?;
    Ok(round_half_even(bmr as f64 * factor))
}

/// `round(tdee * goal_multiplier)`; maintenance leaves TDEE unchanged
///
/// # Errors
///
/// Returns `UnsupportedGoalType` if the multiplier table has no entry for `goal_type`
pub fn calculate_goal_calories(
    tdee: i64,
    goal_type: GoalType,
    config: &GoalAdjustmentConfig,
) -> Result<i64, EnergyError> {
    let multiplier = config
        .multiplier(goal_type)
        .ok_or_else(|| EnergyError::UnsupportedGoalType(goal_type.to_string()))?;
    Ok(round_half_even(tdee as f64 * multiplier))
}

/// Run the full BMR, TDEE, goal chain on a validated snapshot
///
/// # Errors
///
/// Returns an `Unsupported*` error on a coefficient-table miss
pub fn calculate_energy_targets(
    physiology: &CompletePhysiology,
    config: &EnergyModelConfig,
) -> Result<EnergyTargets, EnergyError> {
    let bmr = calculate_bmr(
        physiology.gender,
        physiology.age,
        physiology.height_cm,
        physiology.weight_kg,
        &config.bmr,
    )?;
    let tdee = calculate_tdee(bmr, physiology.activity_level, &config.activity_factors)?;
    let goal_calories = calculate_goal_calories(tdee, physiology.goal_type, &config.goals)?;

    Ok(EnergyTargets {
        bmr,
        tdee,
        goal_calories,
    })
}

/// Energy targets for a snapshot, `None` when the snapshot is incomplete
///
/// # Errors
///
/// Returns an `Unsupported*` error on a coefficient-table miss; an incomplete
/// snapshot is not an error here
pub fn compute_energy_targets(
    snapshot: &PhysiologySnapshot,
    config: &EnergyModelConfig,
) -> Result<Option<EnergyTargets>, EnergyError> {
    match snapshot.complete() {
        Ok(physiology) => calculate_energy_targets(&physiology, config).map(Some),
        Err(error) if error.is_not_available() => Ok(None),
        Err(error) => Err(error),
    }
}

/// BMR and TDEE from explicit values, without a goal
///
/// # Errors
///
/// Returns `PhysiologyIncomplete` naming the first non-positive value, or an
/// `Unsupported*` error on a table miss
pub fn preview_tdee(
    gender: Gender,
    age: u32,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    config: &EnergyModelConfig,
) -> Result<TdeePreview, EnergyError> {
    if age == 0 {
        return Err(EnergyError::incomplete("age"));
    }
    if !(height_cm.is_finite() && height_cm > 0.0) {
        return Err(EnergyError::incomplete("height"));
    }
    if !(weight_kg.is_finite() && weight_kg > 0.0) {
        return Err(EnergyError::incomplete("weight"));
    }

    let bmr = calculate_bmr(gender, age, height_cm, weight_kg, &config.bmr)?;
    let tdee = calculate_tdee(bmr, activity_level, &config.activity_factors)?;
    Ok(TdeePreview { bmr, tdee })
}

/// Recommended daily water in liters, `None` without a usable weight
#[must_use]
pub fn hydration_target_liters(weight_kg: Option<f64>, config: &HydrationConfig) -> Option<f64> {
    weight_kg
        .filter(|weight| weight.is_finite() && *weight > 0.0)
        .map(|weight| weight * config.water_ml_per_kg / ML_PER_LITER)
}

/// Snapshot-level accessors that treat an incomplete profile as an error
#[derive(Debug, Clone, Copy)]
pub struct EnergyModel<'a> {
    config: &'a EnergyModelConfig,
}

impl<'a> EnergyModel<'a> {
    /// Bind the model to a configuration
    #[must_use]
    pub const fn new(config: &'a EnergyModelConfig) -> Self {
        Self { config }
    }

    /// Model over the process-wide configuration
    #[must_use]
    pub fn global() -> EnergyModel<'static> {
        EnergyModel::new(EnergyModelConfig::global())
    }

    fn targets(&self, snapshot: &PhysiologySnapshot) -> Result<EnergyTargets, EnergyError> {
        calculate_energy_targets(&snapshot.complete()?, self.config)
    }

    /// # Errors
    ///
    /// `PhysiologyIncomplete` for an incomplete snapshot
    pub fn bmr(&self, snapshot: &PhysiologySnapshot) -> Result<i64, EnergyError> {
        self.targets(snapshot).map(|targets| targets.bmr)
    }

    /// # Errors
    ///
    /// `PhysiologyIncomplete` for an incomplete snapshot
    pub fn tdee(&self, snapshot: &PhysiologySnapshot) -> Result<i64, EnergyError> {
        self.targets(snapshot).map(|targets| targets.tdee)
    }

    /// # Errors
    ///
    /// `PhysiologyIncomplete` for an incomplete snapshot
    pub fn goal_calories(&self, snapshot: &PhysiologySnapshot) -> Result<i64, EnergyError> {
        self.targets(snapshot).map(|targets| targets.goal_calories)
    }
}

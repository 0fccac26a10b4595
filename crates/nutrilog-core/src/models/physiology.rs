// ABOUTME: Physiology snapshot used by the energy model (gender, age, height, weight, activity, goal)
// ABOUTME: Completeness validation and merge-patch updates producing new snapshot values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::is_positive;
use crate::errors::EnergyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    /// Male (+5 kcal constant)
    #[serde(rename = "M", alias = "male")]
    Male,
    /// Female (-161 kcal constant)
    #[serde(rename = "F", alias = "female")]
    Female,
}

impl Gender {
    /// Wire code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Ok(Self::Male),
            "f" | "female" => Ok(Self::Female),
            _ => Err(EnergyError::UnsupportedGender(s.to_owned())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Activity level for TDEE calculation, in ascending order of expenditure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "sedentary")]
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(rename = "lightly_active", alias = "light")]
    Light,
    /// Moderate exercise 3-5 days/week
    #[serde(rename = "moderately_active", alias = "moderate")]
    Moderate,
    /// Hard exercise 6-7 days/week
    #[serde(rename = "very_active", alias = "hard")]
    Hard,
    /// Hard training twice a day or physical job
    #[serde(rename = "extremely_active", alias = "extreme")]
    Extreme,
}

impl ActivityLevel {
    /// All levels from least to most active
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Hard,
        Self::Extreme,
    ];

    /// Wire code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "lightly_active",
            Self::Moderate => "moderately_active",
            Self::Hard => "very_active",
            Self::Extreme => "extremely_active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" | "lightly_active" => Ok(Self::Light),
            "moderate" | "moderately_active" => Ok(Self::Moderate),
            "hard" | "very_active" => Ok(Self::Hard),
            "extreme" | "extremely_active" => Ok(Self::Extreme),
            _ => Err(EnergyError::UnsupportedActivityLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Weight-change goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// 20% calorie deficit
    LoseWeight,
    /// Calories equal to TDEE
    MaintainWeight,
    /// 20% calorie surplus
    GainWeight,
}

impl GoalType {
    /// Wire code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::LoseWeight => "lose_weight",
            Self::MaintainWeight => "maintain_weight",
            Self::GainWeight => "gain_weight",
        }
    }
}

impl FromStr for GoalType {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" | "lose" => Ok(Self::LoseWeight),
            "maintain_weight" | "maintain" | "maintenance" => Ok(Self::MaintainWeight),
            "gain_weight" | "gain" => Ok(Self::GainWeight),
            _ => Err(EnergyError::UnsupportedGoalType(s.to_owned())),
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// User physiology as last written by a profile update.
///
/// Every field is optional; energy values exist only for a complete snapshot
/// (see [`PhysiologySnapshot::complete`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysiologySnapshot {
    /// Gender
    pub gender: Option<Gender>,
    /// Age in years
    pub age: Option<u32>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Activity level
    pub activity_level: Option<ActivityLevel>,
    /// Weight-change goal
    pub goal_type: Option<GoalType>,
}

/// Partial profile update; `None` fields leave the prior value in place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysiologyPatch {
    /// New gender
    pub gender: Option<Gender>,
    /// New age
    pub age: Option<u32>,
    /// New height (cm)
    pub height_cm: Option<f64>,
    /// New weight (kg)
    pub weight_kg: Option<f64>,
    /// New activity level
    pub activity_level: Option<ActivityLevel>,
    /// New goal
    pub goal_type: Option<GoalType>,
}

impl PhysiologyPatch {
    /// True when the patch sets no field
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.age.is_none()
            && self.height_cm.is_none()
            && self.weight_kg.is_none()
            && self.activity_level.is_none()
            && self.goal_type.is_none()
    }
}

/// A validated snapshot with every field present
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePhysiology {
    /// Gender
    pub gender: Gender,
    /// Age in years, > 0
    pub age: u32,
    /// Height in centimeters, > 0
    pub height_cm: f64,
    /// Weight in kilograms, > 0
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Weight-change goal
    pub goal_type: GoalType,
}

impl PhysiologySnapshot {
    /// Validate all six fields jointly.
    ///
    /// # Errors
    ///
    /// Returns `EnergyError::PhysiologyIncomplete` naming the first field that is
    /// missing, zero, negative or not finite.
    pub fn complete(&self) -> Result<CompletePhysiology, EnergyError> {
        let gender = self.gender.ok_or(EnergyError::incomplete("gender"))?;
        let age = self
            .age
            .filter(|age| *age > 0)
            .ok_or(EnergyError::incomplete("age"))?;
        let height_cm = self
            .height_cm
            .filter(|height| is_positive(*height))
            .ok_or(EnergyError::incomplete("height"))?;
        let weight_kg = self
            .weight_kg
            .filter(|weight| is_positive(*weight))
            .ok_or(EnergyError::incomplete("weight"))?;
        let activity_level = self
            .activity_level
            .ok_or(EnergyError::incomplete("activity_level"))?;
        let goal_type = self.goal_type.ok_or(EnergyError::incomplete("goal_type"))?;

        Ok(CompletePhysiology {
            gender,
            age,
            height_cm,
            weight_kg,
            activity_level,
            goal_type,
        })
    }

    /// Whether derived energy values can be computed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete().is_ok()
    }

    /// Apply a merge-patch, returning a new snapshot
    #[must_use]
    pub fn merge(&self, patch: &PhysiologyPatch) -> Self {
        Self {
            gender: patch.gender.or(self.gender),
            age: patch.age.or(self.age),
            height_cm: patch.height_cm.or(self.height_cm),
            weight_kg: patch.weight_kg.or(self.weight_kg),
            activity_level: patch.activity_level.or(self.activity_level),
            goal_type: patch.goal_type.or(self.goal_type),
        }
    }
}

impl From<CompletePhysiology> for PhysiologySnapshot {
    fn from(value: CompletePhysiology) -> Self {
        Self {
            gender: Some(value.gender),
            age: Some(value.age),
            height_cm: Some(value.height_cm),
            weight_kg: Some(value.weight_kg),
            activity_level: Some(value.activity_level),
            goal_type: Some(value.goal_type),
        }
    }
}

// ABOUTME: Energy model configuration: Mifflin-St Jeor coefficients and multiplier tables
// ABOUTME: Validated once, with environment overrides, and shared through a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Energy Model Configuration
//!
//! The activity factors and goal multipliers are lookup tables keyed by the
//! domain enums. A key absent from a table is reported by the energy model as an
//! `Unsupported*` error; nothing falls back to a default factor.

use crate::constants::{energy, hydration};
use crate::models::{ActivityLevel, Gender, GoalType};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Global configuration singleton
static ENERGY_MODEL_CONFIG: OnceLock<EnergyModelConfig> = OnceLock::new();

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A table entry or coefficient is outside its valid range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// A table lists the same key twice
    #[error("Duplicate table entry: {0}")]
    DuplicateEntry(String),

    /// An environment override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

fn lookup<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> Option<f64> {
    table
        .iter()
        .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
}

fn check_unique<K: PartialEq + Copy + std::fmt::Debug>(
    table: &[(K, f64)],
) -> Result<(), ConfigError> {
    for (index, (key, _)) in table.iter().enumerate() {
        if table[..index].iter().any(|(seen, _)| seen == key) {
            return Err(ConfigError::DuplicateEntry(format!("{key:?}")));
        }
    }
    Ok(())
}

/// Basal Metabolic Rate coefficients.
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub weight_coef: f64,
    /// Height coefficient (6.25)
    pub height_coef: f64,
    /// Age coefficient (-5.0)
    pub age_coef: f64,
    /// Additive constant per gender (+5 male, -161 female)
    pub gender_constants: Vec<(Gender, f64)>,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            weight_coef: energy::MSJ_WEIGHT_COEF,
            height_coef: energy::MSJ_HEIGHT_COEF,
            age_coef: energy::MSJ_AGE_COEF,
            gender_constants: energy::GENDER_CONSTANTS.to_vec(),
        }
    }
}

impl BmrConfig {
    /// Additive constant for `gender`, if the table has one
    #[must_use]
    pub fn gender_constant(&self, gender: Gender) -> Option<f64> {
        lookup(&self.gender_constants, gender)
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// (level, factor) pairs
    pub factors: Vec<(ActivityLevel, f64)>,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            factors: energy::ACTIVITY_FACTORS.to_vec(),
        }
    }
}

impl ActivityFactorsConfig {
    /// Multiplier for `level`, if the table has one
    #[must_use]
    pub fn factor(&self, level: ActivityLevel) -> Option<f64> {
        lookup(&self.factors, level)
    }
}

/// Calorie goal multipliers applied to TDEE
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// (goal, multiplier) pairs
    pub multipliers: Vec<(GoalType, f64)>,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            multipliers: energy::GOAL_MULTIPLIERS.to_vec(),
        }
    }
}

impl GoalAdjustmentConfig {
    /// Multiplier for `goal`, if the table has one
    #[must_use]
    pub fn multiplier(&self, goal: GoalType) -> Option<f64> {
        lookup(&self.multipliers, goal)
    }
}

/// Daily water target settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Milliliters of water per kg of body weight
    pub water_ml_per_kg: f64,
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            water_ml_per_kg: hydration::WATER_ML_PER_KG,
        }
    }
}

/// Energy model configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnergyModelConfig {
    /// BMR coefficients
    pub bmr: BmrConfig,
    /// TDEE activity factors
    pub activity_factors: ActivityFactorsConfig,
    /// Goal multipliers
    pub goals: GoalAdjustmentConfig,
    /// Hydration target
    pub hydration: HydrationConfig,
}

impl EnergyModelConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENERGY_MODEL_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load energy model config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load the defaults with environment overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "NUTRILOG_WATER_ML_PER_KG",
            &mut self.hydration.water_ml_per_kg,
        )?;
        Ok(self)
    }

    /// Validate coefficients and tables.
    ///
    /// Factors and multipliers must be positive and finite, keys unique, and
    /// activity factors must grow with the activity level.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let coefficients = [self.bmr.weight_coef, self.bmr.height_coef, self.bmr.age_coef];
        if coefficients.iter().any(|coef| !coef.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("BMR coefficients must be finite"));
        }
        if self.bmr.gender_constants.iter().any(|(_, c)| !c.is_finite()) {
            return Err(ConfigError::ValueOutOfRange("Gender constants must be finite"));
        }
        check_unique(&self.bmr.gender_constants)?;

        if self
            .activity_factors
            .factors
            .iter()
            .any(|(_, factor)| !factor.is_finite() || *factor <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be positive",
            ));
        }
        check_unique(&self.activity_factors.factors)?;

        let ordered: Vec<f64> = ActivityLevel::ALL
            .iter()
            .filter_map(|level| self.activity_factors.factor(*level))
            .collect();
        if ordered.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must increase with activity level",
            ));
        }

        if self
            .goals
            .multipliers
            .iter()
            .any(|(_, multiplier)| !multiplier.is_finite() || *multiplier <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "Goal multipliers must be positive",
            ));
        }
        check_unique(&self.goals.multipliers)?;

        let water = self.hydration.water_ml_per_kg;
        if !water.is_finite() || water <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Water target per kg must be positive",
            ));
        }

        Ok(())
    }
}

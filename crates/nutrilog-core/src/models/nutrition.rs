// ABOUTME: Food catalog, portions, meals and food-consumption records
// ABOUTME: Portion nutrients derive live from the parent food's per-100g baseline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::{check_amount, round_half_even, DailyRecord};
use crate::constants::limits::{MAX_NUTRIENT_PER_100G, MAX_PORTIONS, MAX_SERVING_GRAMS};
use crate::constants::units::NUTRIENT_BASELINE_GRAMS;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Energy and macronutrient amounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Proteins (g)
    pub proteins: f64,
    /// Fats / lipids (g)
    pub fats: f64,
}

impl NutrientProfile {
    /// Build a profile from its four components
    #[must_use]
    pub const fn new(calories: f64, carbohydrates: f64, proteins: f64, fats: f64) -> Self {
        Self {
            calories,
            carbohydrates,
            proteins,
            fats,
        }
    }

    /// Multiply every component by `factor`
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            carbohydrates: self.carbohydrates * factor,
            proteins: self.proteins * factor,
            fats: self.fats * factor,
        }
    }

    /// Check a per-100g baseline: every component finite and within
    /// `[0, MAX_NUTRIENT_PER_100G]`. Zero is allowed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for negative or non-finite components and
    /// `ValueOutOfRange` above the limit.
    pub fn validate_per_100g(&self) -> AppResult<()> {
        for (label, value) in [
            ("calories", self.calories),
            ("carbohydrates", self.carbohydrates),
            ("proteins", self.proteins),
            ("fats", self.fats),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::invalid_input(format!(
                    "Nutrient {label} per 100 g must be non-negative, got {value}"
                )));
            }
            if value > MAX_NUTRIENT_PER_100G {
                return Err(AppError::out_of_range(format!(
                    "Nutrient {label} per 100 g must be at most {MAX_NUTRIENT_PER_100G}, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Round every component half-to-even
    #[must_use]
    pub fn rounded(&self) -> RoundedNutrients {
        RoundedNutrients {
            calories: round_half_even(self.calories),
            carbohydrates: round_half_even(self.carbohydrates),
            proteins: round_half_even(self.proteins),
            fats: round_half_even(self.fats),
        }
    }
}

/// Integer nutrient amounts, as reported per record and summed per day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundedNutrients {
    /// Energy (kcal)
    pub calories: i64,
    /// Carbohydrates (g)
    pub carbohydrates: i64,
    /// Proteins (g)
    pub proteins: i64,
    /// Fats / lipids (g)
    pub fats: i64,
}

/// Saturating: records that bypassed construction checks clamp at `i64::MAX`
impl Add for RoundedNutrients {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(rhs.calories),
            carbohydrates: self.carbohydrates.saturating_add(rhs.carbohydrates),
            proteins: self.proteins.saturating_add(rhs.proteins),
            fats: self.fats.saturating_add(rhs.fats),
        }
    }
}

impl AddAssign for RoundedNutrients {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for RoundedNutrients {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Catalog food with nutrients per 100 g
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Identifier
    pub id: Uuid,
    /// Contributing user; `None` for shared foods that outlive their author
    pub owner: Option<Uuid>,
    /// Display name
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Nutrients per 100 g
    pub per_100g: NutrientProfile,
}

impl FoodItem {
    /// Create a shared food
    pub fn new(name: impl Into<String>, per_100g: NutrientProfile) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: None,
            name: name.into(),
            description: None,
            per_100g,
        }
    }

    /// Attribute the food to a user
    #[must_use]
    pub const fn with_owner(mut self, owner: Uuid) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Named portion of a food, stored as a weight only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServingSize {
    /// Identifier
    pub id: Uuid,
    /// Parent food
    pub food_id: Uuid,
    /// Display name ("1 slice", "1 cup")
    pub name: String,
    /// Portion weight
    pub weight_in_grams: f64,
}

impl ServingSize {
    /// Create a portion of `food`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the weight is not strictly positive and
    /// `ValueOutOfRange` above `MAX_SERVING_GRAMS`.
    pub fn new(food: &FoodItem, name: impl Into<String>, weight_in_grams: f64) -> AppResult<Self> {
        Self::check_weight(weight_in_grams)?;
        Ok(Self {
            id: Uuid::new_v4(),
            food_id: food.id,
            name: name.into(),
            weight_in_grams,
        })
    }

    /// Bounds every portion weight must satisfy
    ///
    /// # Errors
    ///
    /// Same as [`ServingSize::new`].
    pub fn check_weight(weight_in_grams: f64) -> AppResult<()> {
        check_amount("Serving weight", weight_in_grams, MAX_SERVING_GRAMS)
    }

    /// Whether this portion was defined for `food`
    #[must_use]
    pub fn belongs_to(&self, food: &FoodItem) -> bool {
        self.food_id == food.id
    }

    /// Nutrients of one portion: `weight_in_grams * food.nutrient / 100`
    #[must_use]
    pub fn nutrients(&self, food: &FoodItem) -> NutrientProfile {
        food.per_100g.scaled(self.weight_in_grams / NUTRIENT_BASELINE_GRAMS)
    }
}

/// Meal slot a consumption is logged under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack
    Snack,
    /// User-defined meal
    Custom(Uuid),
}

impl MealSlot {
    /// Slots every user has regardless of custom meals
    pub const STANDARD: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Human-readable label; custom meals are labelled by the caller
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
            Self::Custom(_) => "Meal",
        }
    }
}

/// User-defined meal with a default time of day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Identifier
    pub id: Uuid,
    /// Owning user
    pub owner: Uuid,
    /// Display name
    pub name: String,
    /// Time the meal is usually eaten
    pub default_time: NaiveTime,
}

impl Meal {
    /// Create a meal for `owner`
    pub fn new(owner: Uuid, name: impl Into<String>, default_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            default_time,
        }
    }

    /// Slot that consumptions of this meal are logged under
    #[must_use]
    pub const fn slot(&self) -> MealSlot {
        MealSlot::Custom(self.id)
    }
}

/// A logged food consumption with its food and portion resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodConsumption {
    /// Identifier
    pub id: Uuid,
    /// Consuming user
    pub user_id: Uuid,
    /// Consumed food
    pub food: FoodItem,
    /// Portion of `food`
    pub serving_size: ServingSize,
    /// Meal slot
    pub meal: MealSlot,
    /// Number of portions
    pub quantity: f64,
    /// When it was eaten (UTC)
    pub consumed_at: DateTime<Utc>,
}

impl FoodConsumption {
    /// Create a consumption record.
    ///
    /// Portion/food integrity is enforced by the store on write, not here.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `quantity` is not strictly positive and
    /// `ValueOutOfRange` above `MAX_PORTIONS`.
    pub fn new(
        user_id: Uuid,
        food: FoodItem,
        serving_size: ServingSize,
        meal: MealSlot,
        quantity: f64,
        consumed_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Self::check_quantity(quantity)?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            food,
            serving_size,
            meal,
            quantity,
            consumed_at,
        })
    }

    /// Bounds every consumption quantity must satisfy
    ///
    /// # Errors
    ///
    /// Same as [`FoodConsumption::new`].
    pub fn check_quantity(quantity: f64) -> AppResult<()> {
        check_amount("Consumption quantity", quantity, MAX_PORTIONS)
    }

    /// Nutrients of this record computed live from food and portion, rounded per record
    #[must_use]
    pub fn nutrients(&self) -> RoundedNutrients {
        self.serving_size
            .nutrients(&self.food)
            .scaled(self.quantity)
            .rounded()
    }

    /// `round(quantity * serving.calories)`
    #[must_use]
    pub fn calories(&self) -> i64 {
        self.nutrients().calories
    }
}

impl DailyRecord for FoodConsumption {
    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn record_date(&self) -> NaiveDate {
        self.consumed_at.date_naive()
    }
}

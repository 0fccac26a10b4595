// ABOUTME: Storage abstraction for physiology snapshots, catalogs and daily records
// ABOUTME: Plugin seam implemented by the in-memory store; writes enforce integrity and ownership
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use crate::errors::AppResult;
use crate::models::{
    Exercise, ExerciseLog, FoodConsumption, FoodItem, Meal, MealSlot, PhysiologySnapshot,
    ServingSize, WaterIntake,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub mod memory;

pub use memory::InMemoryStore;

/// Caller identity for updates and deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Acting user
    pub user_id: Uuid,
    /// Admins may modify any user's records
    pub is_admin: bool,
}

impl Actor {
    /// Regular user
    #[must_use]
    pub const fn user(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    /// Administrator
    #[must_use]
    pub const fn admin(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }

    /// Owner or admin
    #[must_use]
    pub fn can_modify(&self, owner: Uuid) -> bool {
        self.is_admin || self.user_id == owner
    }
}

/// Consumption to log, referencing catalog entries by id
#[derive(Debug, Clone, PartialEq)]
pub struct NewConsumption {
    /// Consuming user
    pub user_id: Uuid,
    /// Food eaten
    pub food_id: Uuid,
    /// Portion of that food
    pub serving_size_id: Uuid,
    /// Meal slot
    pub meal: MealSlot,
    /// Number of portions
    pub quantity: f64,
    /// When it was eaten
    pub consumed_at: DateTime<Utc>,
}

/// Exercise session to log, referencing the catalog by id
#[derive(Debug, Clone, PartialEq)]
pub struct NewExerciseLog {
    /// Practicing user
    pub user_id: Uuid,
    /// Exercise performed
    pub exercise_id: Uuid,
    /// Session length in hours
    pub duration_in_hours: f64,
    /// Day of practice
    pub practice_date: NaiveDate,
}

/// Core storage abstraction
///
/// Reads return records with their food, portion and exercise resolved. Writes
/// check that referenced catalog entries exist and that a portion belongs to the
/// logged food; aggregation relies on those checks and does not repeat them.
#[async_trait]
pub trait NutritionStore: Send + Sync {
    // ================================
    // Physiology
    // ================================

    /// Current snapshot; an unknown user has an empty snapshot
    async fn get_physiology(&self, user_id: Uuid) -> AppResult<PhysiologySnapshot>;

    /// Replace the user's snapshot
    async fn put_physiology(&self, user_id: Uuid, snapshot: PhysiologySnapshot) -> AppResult<()>;

    // ================================
    // Catalogs
    // ================================

    /// Add a food
    async fn add_food(&self, food: FoodItem) -> AppResult<FoodItem>;

    /// Add a portion; its food must exist
    async fn add_serving_size(&self, serving_size: ServingSize) -> AppResult<ServingSize>;

    /// Change a portion's weight; records using it see the new nutrients on next read
    async fn update_serving_weight(
        &self,
        serving_size_id: Uuid,
        weight_in_grams: f64,
    ) -> AppResult<ServingSize>;

    /// Add an exercise to the catalog
    async fn add_exercise(&self, exercise: Exercise) -> AppResult<Exercise>;

    /// Shared exercises plus those contributed by `user_id`, ordered by name
    async fn list_exercises(&self, user_id: Uuid) -> AppResult<Vec<Exercise>>;

    /// Add a user meal
    async fn add_meal(&self, meal: Meal) -> AppResult<Meal>;

    /// The user's meals ordered by default time, then name
    async fn list_meals(&self, user_id: Uuid) -> AppResult<Vec<Meal>>;

    // ================================
    // Daily records
    // ================================

    /// Log a consumption after checking food, portion and meal references
    async fn log_consumption(&self, entry: NewConsumption) -> AppResult<FoodConsumption>;

    /// Correct the number of portions of a consumption
    async fn update_consumption_quantity(
        &self,
        actor: Actor,
        consumption_id: Uuid,
        quantity: f64,
    ) -> AppResult<FoodConsumption>;

    /// Delete a consumption (owner or admin)
    async fn delete_consumption(&self, actor: Actor, consumption_id: Uuid) -> AppResult<()>;

    /// Log water
    async fn log_water_intake(&self, intake: WaterIntake) -> AppResult<WaterIntake>;

    /// Delete a water intake (owner or admin)
    async fn delete_water_intake(&self, actor: Actor, intake_id: Uuid) -> AppResult<()>;

    /// Log an exercise session after checking the exercise reference
    async fn log_exercise(&self, entry: NewExerciseLog) -> AppResult<ExerciseLog>;

    /// Delete an exercise session (owner or admin)
    async fn delete_exercise_log(&self, actor: Actor, log_id: Uuid) -> AppResult<()>;

    /// The user's consumptions in insertion order, optionally for one UTC day
    async fn list_consumptions(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<FoodConsumption>>;

    /// The user's water intakes in insertion order, optionally for one day
    async fn list_water_intakes(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<WaterIntake>>;

    /// The user's exercise sessions in insertion order, optionally for one day
    async fn list_exercise_logs(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<ExerciseLog>>;
}

// ABOUTME: In-memory NutritionStore backed by tokio RwLock-guarded maps
// ABOUTME: Stores records by reference and resolves food, portion and exercise on read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::{Actor, NewConsumption, NewExerciseLog, NutritionStore};
use crate::constants::{exercises::DEFAULT_EXERCISES, meals::DEFAULT_MEALS};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{
    Exercise, ExerciseLog, FoodConsumption, FoodItem, Meal, MealSlot, PhysiologySnapshot,
    ServingSize, WaterIntake,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Stored consumption: references only, nutrients are never persisted
#[derive(Debug, Clone)]
struct ConsumptionRow {
    id: Uuid,
    user_id: Uuid,
    food_id: Uuid,
    serving_size_id: Uuid,
    meal: MealSlot,
    quantity: f64,
    consumed_at: DateTime<Utc>,
}

impl From<&FoodConsumption> for ConsumptionRow {
    fn from(record: &FoodConsumption) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            food_id: record.food.id,
            serving_size_id: record.serving_size.id,
            meal: record.meal,
            quantity: record.quantity,
            consumed_at: record.consumed_at,
        }
    }
}

#[derive(Debug, Clone)]
struct ExerciseLogRow {
    id: Uuid,
    user_id: Uuid,
    exercise_id: Uuid,
    duration_in_hours: f64,
    practice_date: NaiveDate,
}

#[derive(Debug, Default)]
struct StoreState {
    physiology: HashMap<Uuid, PhysiologySnapshot>,
    foods: HashMap<Uuid, FoodItem>,
    serving_sizes: HashMap<Uuid, ServingSize>,
    exercises: HashMap<Uuid, Exercise>,
    meals: HashMap<Uuid, Meal>,
    consumptions: Vec<ConsumptionRow>,
    water_intakes: Vec<WaterIntake>,
    exercise_logs: Vec<ExerciseLogRow>,
}

fn dangling(record: &str, record_id: Uuid, missing: &str) -> AppError {
    AppLogger::log_integrity_fault(record, record_id, missing);
    AppError::integrity(format!("{record} {record_id} references a missing {missing}"))
}

fn matches_day(date: Option<NaiveDate>, day: NaiveDate) -> bool {
    date.is_none_or(|wanted| wanted == day)
}

fn remove_owned<T>(
    rows: &mut Vec<T>,
    actor: Actor,
    record: &str,
    record_id: Uuid,
    id_and_owner: impl Fn(&T) -> (Uuid, Uuid),
) -> AppResult<()> {
    let index = rows
        .iter()
        .position(|row| id_and_owner(row).0 == record_id)
        .ok_or_else(|| AppError::not_found(record))?;
    let (_, owner) = id_and_owner(&rows[index]);
    if !actor.can_modify(owner) {
        return Err(AppError::permission_denied(format!(
            "Only the owner or an admin may delete this {}",
            record.to_lowercase()
        )));
    }
    rows.remove(index);
    Ok(())
}

impl StoreState {
    fn hydrate_consumption(&self, row: &ConsumptionRow) -> AppResult<FoodConsumption> {
        let food = self
            .foods
            .get(&row.food_id)
            .ok_or_else(|| dangling("Consumption", row.id, "food"))?;
        let serving_size = self
            .serving_sizes
            .get(&row.serving_size_id)
            .ok_or_else(|| dangling("Consumption", row.id, "serving size"))?;

        Ok(FoodConsumption {
            id: row.id,
            user_id: row.user_id,
            food: food.clone(),
            serving_size: serving_size.clone(),
            meal: row.meal,
            quantity: row.quantity,
            consumed_at: row.consumed_at,
        })
    }

    fn hydrate_exercise_log(&self, row: &ExerciseLogRow) -> AppResult<ExerciseLog> {
        let exercise = self
            .exercises
            .get(&row.exercise_id)
            .ok_or_else(|| dangling("Exercise log", row.id, "exercise"))?;

        Ok(ExerciseLog {
            id: row.id,
            user_id: row.user_id,
            exercise: exercise.clone(),
            duration_in_hours: row.duration_in_hours,
            practice_date: row.practice_date,
        })
    }

    fn check_meal(&self, user_id: Uuid, meal: MealSlot) -> AppResult<()> {
        if let MealSlot::Custom(meal_id) = meal {
            self.meals
                .get(&meal_id)
                .filter(|meal| meal.owner == user_id)
                .ok_or_else(|| AppError::not_found("Meal"))?;
        }
        Ok(())
    }

    fn sorted_meals(&self, user_id: Uuid) -> Vec<Meal> {
        let mut meals: Vec<Meal> = self
            .meals
            .values()
            .filter(|meal| meal.owner == user_id)
            .cloned()
            .collect();
        meals.sort_by(|a, b| {
            a.default_time
                .cmp(&b.default_time)
                .then_with(|| a.name.cmp(&b.name))
        });
        meals
    }
}

/// In-memory record store
///
/// Cloning shares the underlying maps. Readers run concurrently; writers are
/// serialized by the lock.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the shared exercise catalog (once) and the default meals for
    /// `user_id` (if the user has none). Safe to call repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an internal error if a default meal time is invalid
    pub async fn seed_defaults(&self, user_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;

        if !state.exercises.values().any(|e| e.owner.is_none()) {
            for (name, calories_per_hour) in DEFAULT_EXERCISES {
                let exercise = Exercise::new(name, calories_per_hour);
                state.exercises.insert(exercise.id, exercise);
            }
            debug!(count = DEFAULT_EXERCISES.len(), "Seeded exercise catalog");
        }

        if !state.meals.values().any(|meal| meal.owner == user_id) {
            for (name, hour, minute) in DEFAULT_MEALS {
                let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
                    AppError::internal(format!("Invalid default time for meal {name}"))
                })?;
                let meal = Meal::new(user_id, name, time);
                state.meals.insert(meal.id, meal);
            }
            debug!(user.id = %user_id, count = DEFAULT_MEALS.len(), "Seeded default meals");
        }

        Ok(())
    }
}

#[async_trait]
impl NutritionStore for InMemoryStore {
    async fn get_physiology(&self, user_id: Uuid) -> AppResult<PhysiologySnapshot> {
        let state = self.state.read().await;
        Ok(state.physiology.get(&user_id).cloned().unwrap_or_default())
    }

    async fn put_physiology(&self, user_id: Uuid, snapshot: PhysiologySnapshot) -> AppResult<()> {
        self.state.write().await.physiology.insert(user_id, snapshot);
        AppLogger::log_record_write(user_id, "physiology", "put");
        Ok(())
    }

    async fn add_food(&self, food: FoodItem) -> AppResult<FoodItem> {
        food.per_100g.validate_per_100g()?;
        let mut state = self.state.write().await;
        if state.foods.contains_key(&food.id) {
            return Err(AppError::already_exists("Food"));
        }
        state.foods.insert(food.id, food.clone());
        Ok(food)
    }

    async fn add_serving_size(&self, serving_size: ServingSize) -> AppResult<ServingSize> {
        ServingSize::check_weight(serving_size.weight_in_grams)?;
        let mut state = self.state.write().await;
        if !state.foods.contains_key(&serving_size.food_id) {
            return Err(AppError::not_found("Food"));
        }
        if state.serving_sizes.contains_key(&serving_size.id) {
            return Err(AppError::already_exists("Serving size"));
        }
        state
            .serving_sizes
            .insert(serving_size.id, serving_size.clone());
        Ok(serving_size)
    }

    async fn update_serving_weight(
        &self,
        serving_size_id: Uuid,
        weight_in_grams: f64,
    ) -> AppResult<ServingSize> {
        ServingSize::check_weight(weight_in_grams)?;
        let mut state = self.state.write().await;
        let serving_size = state
            .serving_sizes
            .get_mut(&serving_size_id)
            .ok_or_else(|| AppError::not_found("Serving size"))?;
        serving_size.weight_in_grams = weight_in_grams;
        Ok(serving_size.clone())
    }

    async fn add_exercise(&self, exercise: Exercise) -> AppResult<Exercise> {
        let mut state = self.state.write().await;
        if state.exercises.contains_key(&exercise.id) {
            return Err(AppError::already_exists("Exercise"));
        }
        state.exercises.insert(exercise.id, exercise.clone());
        Ok(exercise)
    }

    async fn list_exercises(&self, user_id: Uuid) -> AppResult<Vec<Exercise>> {
        let state = self.state.read().await;
        let mut exercises: Vec<Exercise> = state
            .exercises
            .values()
            .filter(|exercise| exercise.owner.is_none_or(|owner| owner == user_id))
            .cloned()
            .collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(exercises)
    }

    async fn add_meal(&self, meal: Meal) -> AppResult<Meal> {
        let mut state = self.state.write().await;
        if state.meals.contains_key(&meal.id) {
            return Err(AppError::already_exists("Meal"));
        }
        state.meals.insert(meal.id, meal.clone());
        Ok(meal)
    }

    async fn list_meals(&self, user_id: Uuid) -> AppResult<Vec<Meal>> {
        Ok(self.state.read().await.sorted_meals(user_id))
    }

    async fn log_consumption(&self, entry: NewConsumption) -> AppResult<FoodConsumption> {
        let mut state = self.state.write().await;

        let food = state
            .foods
            .get(&entry.food_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Food"))?;
        let serving_size = state
            .serving_sizes
            .get(&entry.serving_size_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Serving size"))?;
        if !serving_size.belongs_to(&food) {
            return Err(AppError::invalid_input(format!(
                "Serving size '{}' does not belong to food '{}'",
                serving_size.name, food.name
            ))
            .with_details(json!({
                "food_id": food.id,
                "serving_size_id": serving_size.id,
                "serving_size_food_id": serving_size.food_id,
            })));
        }
        state.check_meal(entry.user_id, entry.meal)?;

        let consumption = FoodConsumption::new(
            entry.user_id,
            food,
            serving_size,
            entry.meal,
            entry.quantity,
            entry.consumed_at,
        )?;
        state.consumptions.push(ConsumptionRow::from(&consumption));
        drop(state);

        AppLogger::log_record_write(entry.user_id, "consumption", "create");
        Ok(consumption)
    }

    async fn update_consumption_quantity(
        &self,
        actor: Actor,
        consumption_id: Uuid,
        quantity: f64,
    ) -> AppResult<FoodConsumption> {
        FoodConsumption::check_quantity(quantity)?;
        let mut state = self.state.write().await;
        let row = state
            .consumptions
            .iter_mut()
            .find(|row| row.id == consumption_id)
            .ok_or_else(|| AppError::not_found("Consumption"))?;
        if !actor.can_modify(row.user_id) {
            return Err(AppError::permission_denied(
                "Only the owner or an admin may update this consumption",
            ));
        }
        row.quantity = quantity;
        let row = row.clone();

        let updated = state.hydrate_consumption(&row)?;
        drop(state);
        AppLogger::log_record_write(row.user_id, "consumption", "update");
        Ok(updated)
    }

    async fn delete_consumption(&self, actor: Actor, consumption_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        remove_owned(
            &mut state.consumptions,
            actor,
            "Consumption",
            consumption_id,
            |row| (row.id, row.user_id),
        )?;
        drop(state);
        AppLogger::log_record_write(actor.user_id, "consumption", "delete");
        Ok(())
    }

    async fn log_water_intake(&self, intake: WaterIntake) -> AppResult<WaterIntake> {
        WaterIntake::check_quantity(intake.quantity_liters)?;
        let mut state = self.state.write().await;
        if state.water_intakes.iter().any(|row| row.id == intake.id) {
            return Err(AppError::already_exists("Water intake"));
        }
        state.water_intakes.push(intake.clone());
        drop(state);
        AppLogger::log_record_write(intake.user_id, "water_intake", "create");
        Ok(intake)
    }

    async fn delete_water_intake(&self, actor: Actor, intake_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        remove_owned(
            &mut state.water_intakes,
            actor,
            "Water intake",
            intake_id,
            |row| (row.id, row.user_id),
        )?;
        drop(state);
        AppLogger::log_record_write(actor.user_id, "water_intake", "delete");
        Ok(())
    }

    async fn log_exercise(&self, entry: NewExerciseLog) -> AppResult<ExerciseLog> {
        let mut state = self.state.write().await;
        let exercise = state
            .exercises
            .get(&entry.exercise_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Exercise"))?;

        let log = ExerciseLog::new(
            entry.user_id,
            exercise,
            entry.duration_in_hours,
            entry.practice_date,
        )?;
        state.exercise_logs.push(ExerciseLogRow {
            id: log.id,
            user_id: log.user_id,
            exercise_id: log.exercise.id,
            duration_in_hours: log.duration_in_hours,
            practice_date: log.practice_date,
        });
        drop(state);

        AppLogger::log_record_write(entry.user_id, "exercise_log", "create");
        Ok(log)
    }

    async fn delete_exercise_log(&self, actor: Actor, log_id: Uuid) -> AppResult<()> {
        let mut state = self.state.write().await;
        remove_owned(
            &mut state.exercise_logs,
            actor,
            "Exercise log",
            log_id,
            |row| (row.id, row.user_id),
        )?;
        drop(state);
        AppLogger::log_record_write(actor.user_id, "exercise_log", "delete");
        Ok(())
    }

    async fn list_consumptions(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<FoodConsumption>> {
        let state = self.state.read().await;
        state
            .consumptions
            .iter()
            .filter(|row| {
                row.user_id == user_id && matches_day(date, row.consumed_at.date_naive())
            })
            .map(|row| state.hydrate_consumption(row))
            .collect()
    }

    async fn list_water_intakes(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<WaterIntake>> {
        let state = self.state.read().await;
        Ok(state
            .water_intakes
            .iter()
            .filter(|row| row.user_id == user_id && matches_day(date, row.intake_date))
            .cloned()
            .collect())
    }

    async fn list_exercise_logs(
        &self,
        user_id: Uuid,
        date: Option<NaiveDate>,
    ) -> AppResult<Vec<ExerciseLog>> {
        let state = self.state.read().await;
        state
            .exercise_logs
            .iter()
            .filter(|row| row.user_id == user_id && matches_day(date, row.practice_date))
            .map(|row| state.hydrate_exercise_log(row))
            .collect()
    }
}

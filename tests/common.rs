// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, date helpers and a seeded in-memory store fixture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrilog`

use anyhow::Result;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use nutrilog::database_plugins::{InMemoryStore, NewConsumption, NutritionStore};
use nutrilog::models::{
    ActivityLevel, Exercise, FoodConsumption, FoodItem, Gender, GoalType, MealSlot,
    NutrientProfile, PhysiologySnapshot, ServingSize,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn at(date: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
}

/// Male, 25 y, 180 cm, 75 kg, moderately active, losing weight
pub fn complete_snapshot() -> PhysiologySnapshot {
    PhysiologySnapshot {
        gender: Some(Gender::Male),
        age: Some(25),
        height_cm: Some(180.0),
        weight_kg: Some(75.0),
        activity_level: Some(ActivityLevel::Moderate),
        goal_type: Some(GoalType::LoseWeight),
    }
}

/// 247 kcal / 41 g carbs / 13 g protein / 3.4 g fat per 100 g
pub fn bread() -> FoodItem {
    FoodItem::new("Whole wheat bread", NutrientProfile::new(247.0, 41.0, 13.0, 3.4))
}

/// 130 kcal / 28 g carbs / 2.7 g protein / 0.3 g fat per 100 g
pub fn rice() -> FoodItem {
    FoodItem::new("White rice", NutrientProfile::new(130.0, 28.0, 2.7, 0.3))
}

/// Build a consumption without going through a store
pub fn consumption(
    user_id: Uuid,
    food: &FoodItem,
    serving: &ServingSize,
    meal: MealSlot,
    quantity: f64,
    consumed_at: DateTime<Utc>,
) -> FoodConsumption {
    FoodConsumption::new(
        user_id,
        food.clone(),
        serving.clone(),
        meal,
        quantity,
        consumed_at,
    )
    .unwrap()
}

/// Store with one user, two foods with portions and one exercise
pub struct StoreFixture {
    pub store: Arc<InMemoryStore>,
    pub user_id: Uuid,
    pub bread: FoodItem,
    pub slice: ServingSize,
    pub rice: FoodItem,
    pub cup: ServingSize,
    pub running: Exercise,
}

impl StoreFixture {
    /// Log `quantity` portions through the store
    pub async fn eat(
        &self,
        food: &FoodItem,
        serving: &ServingSize,
        meal: MealSlot,
        quantity: f64,
        consumed_at: DateTime<Utc>,
    ) -> Result<FoodConsumption> {
        Ok(self
            .store
            .log_consumption(NewConsumption {
                user_id: self.user_id,
                food_id: food.id,
                serving_size_id: serving.id,
                meal,
                quantity,
                consumed_at,
            })
            .await?)
    }
}

/// Standard store setup
pub async fn create_test_store() -> Result<StoreFixture> {
    init_test_logging();
    let store = Arc::new(InMemoryStore::new());
    let user_id = Uuid::new_v4();

    let bread = store.add_food(bread()).await?;
    let slice = store
        .add_serving_size(ServingSize::new(&bread, "1 slice", 30.0)?)
        .await?;
    let rice = store.add_food(rice()).await?;
    let cup = store
        .add_serving_size(ServingSize::new(&rice, "1 cup", 158.0)?)
        .await?;
    let running = store.add_exercise(Exercise::new("Running", 600)).await?;

    Ok(StoreFixture {
        store,
        user_id,
        bread,
        slice,
        rice,
        cup,
        running,
    })
}

// ABOUTME: Daily aggregation of food, water and exercise records for one user and day
// ABOUTME: Meal grouping, goal comparison and progress ratios over caller-supplied records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Daily Aggregator
//!
//! Stateless: every function works on the record collections it is handed.
//! Referential integrity (a portion belongs to its food, a custom meal exists)
//! is enforced by the store when records are written and is not re-checked here.

use super::energy_model::hydration_target_liters;
use crate::config::energy::HydrationConfig;
use crate::constants::limits::MAX_RANGE_DAYS;
use crate::errors::{AppError, AppResult, EnergyError};
use crate::models::{
    DailyRecord, ExerciseLog, FoodConsumption, Meal, MealSlot, RoundedNutrients, WaterIntake,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use uuid::Uuid;

/// The three record streams of one user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Food consumptions
    pub consumptions: Vec<FoodConsumption>,
    /// Water intakes
    pub water_intakes: Vec<WaterIntake>,
    /// Exercise sessions
    pub exercise_logs: Vec<ExerciseLog>,
}

impl RecordSet {
    /// Total number of records across the three streams
    #[must_use]
    pub fn len(&self) -> usize {
        self.consumptions.len() + self.water_intakes.len() + self.exercise_logs.len()
    }

    /// Whether all three streams are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Consumptions of one meal slot with their per-record rounded sums
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    /// Slot
    pub slot: MealSlot,
    /// Sum of the slot's per-record nutrients
    pub nutrients: RoundedNutrients,
    /// Consumptions in this slot, in `consumed_at` order
    pub consumption_ids: Vec<Uuid>,
}

/// Totals and records for one user and one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyOverview {
    /// Calendar day (UTC)
    pub date: NaiveDate,
    /// Sum of per-record rounded consumption calories
    pub total_calories_intake: i64,
    /// Liters
    pub total_water_intake: f64,
    /// Sum of per-record rounded exercise calories
    pub total_calories_burned: i64,
    /// Intake minus burned
    pub net_calories: i64,
    /// Per-record rounded macro sums
    pub macros: RoundedNutrients,
    /// Day's consumptions in `consumed_at` order
    pub food_consumptions: Vec<FoodConsumption>,
    /// Day's water intakes in input order
    pub water_intakes: Vec<WaterIntake>,
    /// Day's exercise sessions in input order
    pub exercise_logs: Vec<ExerciseLog>,
    /// Standard slots first, then custom meals that have records
    pub meals: Vec<MealSummary>,
}

/// Outcome of comparing intake with the calorie goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalVerdict {
    /// Intake below goal
    Under,
    /// Intake equal to goal
    Met,
    /// Intake above goal
    Over,
}

impl GoalVerdict {
    /// Fixed user-facing message
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Under => "You are below your calorie goal for today.",
            Self::Met => "You have reached your calorie goal for today.",
            Self::Over => "You have exceeded your calorie goal for today.",
        }
    }
}

/// Progress ratios towards the day's goals, each in `[0, 1]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// `clamp(net / goal, 0, 1)` to two decimals
    pub calories: Option<f64>,
    /// `min(1, water / target)`
    pub hydration: Option<f64>,
    /// Recommended water for the day in liters
    pub hydration_target_liters: Option<f64>,
}

fn sort_by_consumed_at(records: &mut [&FoodConsumption]) {
    // sort_by_key is stable
    records.sort_by_key(|record| record.consumed_at);
}

/// Group consumptions by meal slot.
///
/// Every standard slot is present, possibly empty. Custom-meal records appear
/// under their own key. Each slot is ordered by `consumed_at`, with equal
/// timestamps kept in input order.
pub fn group_by_meal<'a, I>(records: I) -> BTreeMap<MealSlot, Vec<&'a FoodConsumption>>
where
    I: IntoIterator<Item = &'a FoodConsumption>,
{
    let mut groups: BTreeMap<MealSlot, Vec<&'a FoodConsumption>> = MealSlot::STANDARD
        .iter()
        .map(|slot| (*slot, Vec::new()))
        .collect();

    for record in records {
        groups.entry(record.meal).or_default().push(record);
    }
    for group in groups.values_mut() {
        sort_by_consumed_at(group);
    }
    groups
}

/// Group consumptions under the user's own meals.
///
/// Every meal is present, ordered by default time then name. Records not logged
/// under one of `meals` are left out.
pub fn group_by_user_meals<'m, 'r>(
    meals: &'m [Meal],
    records: &'r [FoodConsumption],
) -> Vec<(&'m Meal, Vec<&'r FoodConsumption>)> {
    let mut ordered: Vec<&Meal> = meals.iter().collect();
    ordered.sort_by(|a, b| {
        a.default_time
            .cmp(&b.default_time)
            .then_with(|| a.name.cmp(&b.name))
    });

    ordered
        .into_iter()
        .map(|meal| {
            let mut group: Vec<&FoodConsumption> = records
                .iter()
                .filter(|record| record.meal == meal.slot())
                .collect();
            sort_by_consumed_at(&mut group);
            (meal, group)
        })
        .collect()
}

fn on_day<'a, T>(records: &'a [T], user_id: Uuid, date: NaiveDate) -> impl Iterator<Item = &'a T>
where
    T: DailyRecord,
{
    records
        .iter()
        .filter(move |record| record.user_id() == user_id && record.is_on(date))
}

/// Aggregate one user's records for one calendar day.
///
/// Records of other users or other days are ignored. A day without records
/// yields zero totals and empty lists.
#[must_use]
pub fn daily_overview(user_id: Uuid, date: NaiveDate, records: &RecordSet) -> DailyOverview {
    let mut food_consumptions: Vec<&FoodConsumption> =
        on_day(&records.consumptions, user_id, date).collect();
    sort_by_consumed_at(&mut food_consumptions);

    let water_intakes: Vec<WaterIntake> = on_day(&records.water_intakes, user_id, date)
        .cloned()
        .collect();
    let exercise_logs: Vec<ExerciseLog> = on_day(&records.exercise_logs, user_id, date)
        .cloned()
        .collect();

    let macros: RoundedNutrients = food_consumptions
        .iter()
        .map(|record| record.nutrients())
        .sum();
    let total_water_intake: f64 = water_intakes
        .iter()
        .map(|intake| intake.quantity_liters)
        .sum();
    let total_calories_burned = exercise_logs
        .iter()
        .map(ExerciseLog::calories_burned)
        .fold(0_i64, i64::saturating_add);

    let meals = group_by_meal(food_consumptions.iter().copied())
        .into_iter()
        .filter(|(slot, group)| !matches!(slot, MealSlot::Custom(_)) || !group.is_empty())
        .map(|(slot, group)| MealSummary {
            slot,
            nutrients: group.iter().map(|record| record.nutrients()).sum(),
            consumption_ids: group.iter().map(|record| record.id).collect(),
        })
        .collect();

    DailyOverview {
        date,
        total_calories_intake: macros.calories,
        total_water_intake,
        total_calories_burned,
        net_calories: macros.calories.saturating_sub(total_calories_burned),
        macros,
        food_consumptions: food_consumptions.into_iter().cloned().collect(),
        water_intakes,
        exercise_logs,
        meals,
    }
}

/// One overview per calendar day in `[start, end]`, days without records included.
///
/// # Errors
///
/// Returns `InvalidInput` if `start > end`, `ValueOutOfRange` if the range
/// spans more than `MAX_RANGE_DAYS` days
pub fn range_overview(
    user_id: Uuid,
    start: NaiveDate,
    end: NaiveDate,
    records: &RecordSet,
) -> AppResult<Vec<DailyOverview>> {
    if start > end {
        return Err(AppError::invalid_input(format!(
            "Range start {start} is after range end {end}"
        )));
    }
    let days = (end - start).num_days() + 1;
    if days > MAX_RANGE_DAYS {
        return Err(AppError::out_of_range(format!(
            "Range covers {days} days, at most {MAX_RANGE_DAYS} are allowed"
        )));
    }

    // Bucket once so each day only scans its own records
    let mut buckets: BTreeMap<NaiveDate, RecordSet> = BTreeMap::new();
    let in_range = |record: &dyn DailyRecord| {
        record.user_id() == user_id && (start..=end).contains(&record.record_date())
    };
    for record in records.consumptions.iter().filter(|r| in_range(*r)) {
        let bucket = buckets.entry(record.record_date()).or_default();
        bucket.consumptions.push(record.clone());
    }
    for record in records.water_intakes.iter().filter(|r| in_range(*r)) {
        let bucket = buckets.entry(record.record_date()).or_default();
        bucket.water_intakes.push(record.clone());
    }
    for record in records.exercise_logs.iter().filter(|r| in_range(*r)) {
        let bucket = buckets.entry(record.record_date()).or_default();
        bucket.exercise_logs.push(record.clone());
    }

    let empty = RecordSet::default();
    Ok(start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|day| daily_overview(user_id, day, buckets.get(&day).unwrap_or(&empty)))
        .collect())
}

/// Strict three-way comparison of intake with the goal, no tolerance band.
///
/// # Errors
///
/// Returns `PhysiologyIncomplete` when the goal is not available
pub fn compare_to_goal(intake: i64, goal: Option<i64>) -> Result<GoalVerdict, EnergyError> {
    let goal = goal.ok_or(EnergyError::incomplete("goal_calories"))?;
    Ok(match intake.cmp(&goal) {
        Ordering::Less => GoalVerdict::Under,
        Ordering::Equal => GoalVerdict::Met,
        Ordering::Greater => GoalVerdict::Over,
    })
}

/// Progress towards the calorie goal and the hydration target.
///
/// Calorie progress uses net calories; each ratio is `None` when its input
/// (goal, weight) is not available.
#[must_use]
pub fn goal_progress(
    overview: &DailyOverview,
    goal_calories: Option<i64>,
    weight_kg: Option<f64>,
    config: &HydrationConfig,
) -> GoalProgress {
    let calories = goal_calories.filter(|goal| *goal > 0).map(|goal| {
        let ratio = (overview.net_calories as f64 / goal as f64).clamp(0.0, 1.0);
        (ratio * 100.0).round() / 100.0
    });
    let target = hydration_target_liters(weight_kg, config);
    let hydration = target.map(|target| (overview.total_water_intake / target).min(1.0));

    GoalProgress {
        calories,
        hydration,
        hydration_target_liters: target,
    }
}

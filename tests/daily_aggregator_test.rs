// ABOUTME: Integration tests for daily overviews, meal grouping and goal comparison
// ABOUTME: Exercises per-record rounding, UTC day boundaries, ranges and progress ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, NaiveTime};
use common::{at, bread, consumption, day, rice};
use nutrilog::config::energy::HydrationConfig;
use nutrilog::errors::{EnergyError, ErrorCode};
use nutrilog::intelligence::{
    compare_to_goal, daily_overview, goal_progress, group_by_meal, group_by_user_meals,
    range_overview, GoalVerdict, RecordSet,
};
use nutrilog::models::{
    Exercise, ExerciseLog, FoodConsumption, FoodItem, Meal, MealSlot, NutrientProfile,
    RoundedNutrients, ServingSize, WaterIntake,
};
use uuid::Uuid;

struct Pantry {
    bread: FoodItem,
    slice: ServingSize,
    rice: FoodItem,
    cup: ServingSize,
    running: Exercise,
}

fn pantry() -> Pantry {
    let bread = bread();
    let slice = ServingSize::new(&bread, "1 slice", 30.0).unwrap();
    let rice = rice();
    let cup = ServingSize::new(&rice, "1 cup", 158.0).unwrap();
    Pantry {
        bread,
        slice,
        rice,
        cup,
        running: Exercise::new("Running", 600),
    }
}

fn sample_day(user_id: Uuid) -> RecordSet {
    let p = pantry();
    let date = day(2024, 3, 14);
    RecordSet {
        consumptions: vec![
            consumption(user_id, &p.rice, &p.cup, MealSlot::Lunch, 1.0, at(date, 12, 30)),
            consumption(user_id, &p.bread, &p.slice, MealSlot::Breakfast, 2.0, at(date, 7, 15)),
        ],
        water_intakes: vec![
            WaterIntake::new(user_id, 0.5, date).unwrap(),
            WaterIntake::from_milliliters(user_id, 250, date).unwrap(),
        ],
        exercise_logs: vec![ExerciseLog::new(user_id, p.running, 0.5, date).unwrap()],
    }
}

#[test]
fn test_daily_overview_totals() {
    let user_id = Uuid::new_v4();
    let overview = daily_overview(user_id, day(2024, 3, 14), &sample_day(user_id));

    // rice 205.4 -> 205, bread 2 x 74.1 = 148.2 -> 148; macros round per record too
    assert_eq!(overview.total_calories_intake, 353);
    assert_eq!(overview.total_calories_burned, 300);
    assert_eq!(overview.net_calories, 53);
    assert!((overview.total_water_intake - 0.75).abs() < 1e-9);
    assert_eq!(
        overview.macros,
        RoundedNutrients {
            calories: 353,
            carbohydrates: 69,
            proteins: 12,
            fats: 2,
        }
    );

    // ordered by consumed_at, breakfast first
    assert_eq!(overview.food_consumptions.len(), 2);
    assert_eq!(overview.food_consumptions[0].meal, MealSlot::Breakfast);
    assert_eq!(overview.water_intakes.len(), 2);
    assert_eq!(overview.exercise_logs.len(), 1);
}

#[test]
fn test_empty_day_yields_zeros() {
    let user_id = Uuid::new_v4();
    let overview = daily_overview(user_id, day(2024, 3, 15), &sample_day(user_id));

    assert_eq!(overview.total_calories_intake, 0);
    assert_eq!(overview.total_calories_burned, 0);
    assert_eq!(overview.net_calories, 0);
    assert!(overview.total_water_intake.abs() < f64::EPSILON);
    assert!(overview.food_consumptions.is_empty());
    assert!(overview.water_intakes.is_empty());
    assert!(overview.exercise_logs.is_empty());
    assert_eq!(overview.meals.len(), MealSlot::STANDARD.len());
    assert!(overview
        .meals
        .iter()
        .all(|meal| meal.consumption_ids.is_empty()));
}

#[test]
fn test_other_users_are_ignored() {
    let user_id = Uuid::new_v4();
    let overview = daily_overview(Uuid::new_v4(), day(2024, 3, 14), &sample_day(user_id));
    assert_eq!(overview.total_calories_intake, 0);
    assert!(overview.water_intakes.is_empty());
}

#[test]
fn test_daily_overview_is_idempotent() {
    let user_id = Uuid::new_v4();
    let records = sample_day(user_id);
    let date = day(2024, 3, 14);

    assert_eq!(
        daily_overview(user_id, date, &records),
        daily_overview(user_id, date, &records)
    );
}

#[test]
fn test_totals_sum_per_record_rounded_values() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let broth = FoodItem::new("Broth", NutrientProfile::new(10.0, 0.0, 0.0, 0.0));
    // 2.5 kcal per portion
    let ladle = ServingSize::new(&broth, "1 ladle", 25.0).unwrap();

    let records = RecordSet {
        consumptions: (0..3)
            .map(|i| consumption(user_id, &broth, &ladle, MealSlot::Dinner, 1.0, at(date, 19, i)))
            .collect(),
        ..RecordSet::default()
    };
    let overview = daily_overview(user_id, date, &records);

    // each record rounds 2.5 -> 2; rounding the raw 7.5 would give 8
    assert_eq!(overview.total_calories_intake, 6);
    assert!(overview
        .food_consumptions
        .iter()
        .all(|record| record.calories() == 2));
}

#[test]
fn test_utc_day_boundaries() {
    let user_id = Uuid::new_v4();
    let p = pantry();
    let date = day(2024, 3, 14);
    let previous = date - Duration::days(1);
    let next = date + Duration::days(1);
    let eat = |when| consumption(user_id, &p.bread, &p.slice, MealSlot::Snack, 1.0, when);

    let records = RecordSet {
        consumptions: vec![
            eat(at(previous, 23, 59)),
            eat(at(date, 0, 0)),
            eat(at(date, 23, 59)),
            eat(at(next, 0, 0)),
        ],
        ..RecordSet::default()
    };

    let overview = daily_overview(user_id, date, &records);
    assert_eq!(overview.food_consumptions.len(), 2);
    assert_eq!(overview.total_calories_intake, 148);
    assert_eq!(daily_overview(user_id, previous, &records).food_consumptions.len(), 1);
    assert_eq!(daily_overview(user_id, next, &records).food_consumptions.len(), 1);
}

#[test]
fn test_group_by_meal_with_no_records() {
    let records: Vec<FoodConsumption> = Vec::new();
    let groups = group_by_meal(&records);

    let keys: Vec<MealSlot> = groups.keys().copied().collect();
    assert_eq!(keys, MealSlot::STANDARD.to_vec());
    assert!(groups.values().all(Vec::is_empty));
}

#[test]
fn test_group_by_meal_orders_by_time_stably() {
    let user_id = Uuid::new_v4();
    let p = pantry();
    let date = day(2024, 3, 14);
    let brunch = Meal::new(user_id, "Brunch", NaiveTime::from_hms_opt(10, 30, 0).unwrap());

    let late = consumption(user_id, &p.bread, &p.slice, MealSlot::Breakfast, 1.0, at(date, 8, 0));
    let first_tie = consumption(user_id, &p.rice, &p.cup, MealSlot::Breakfast, 1.0, at(date, 7, 0));
    let second_tie = consumption(user_id, &p.bread, &p.slice, MealSlot::Breakfast, 2.0, at(date, 7, 0));
    let custom = consumption(user_id, &p.bread, &p.slice, brunch.slot(), 1.0, at(date, 10, 30));
    let records = vec![late.clone(), first_tie.clone(), second_tie.clone(), custom.clone()];

    let groups = group_by_meal(&records);
    let breakfast: Vec<Uuid> = groups[&MealSlot::Breakfast].iter().map(|r| r.id).collect();
    assert_eq!(breakfast, vec![first_tie.id, second_tie.id, late.id]);

    assert_eq!(groups.len(), MealSlot::STANDARD.len() + 1);
    assert_eq!(groups[&brunch.slot()].len(), 1);
    assert_eq!(groups[&brunch.slot()][0].id, custom.id);
    assert!(groups[&MealSlot::Lunch].is_empty());
}

#[test]
fn test_group_by_user_meals_lists_every_meal() {
    let user_id = Uuid::new_v4();
    let p = pantry();
    let date = day(2024, 3, 14);
    let time = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
    let meals = vec![
        Meal::new(user_id, "Dinner", time(19)),
        Meal::new(user_id, "Early", time(7)),
        Meal::new(user_id, "Alpha", time(7)),
    ];
    let records = vec![consumption(
        user_id,
        &p.rice,
        &p.cup,
        meals[0].slot(),
        1.0,
        at(date, 19, 5),
    )];

    let grouped = group_by_user_meals(&meals, &records);
    let names: Vec<&str> = grouped.iter().map(|(meal, _)| meal.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Early", "Dinner"]);
    assert!(grouped[0].1.is_empty());
    assert_eq!(grouped[2].1.len(), 1);
}

#[test]
fn test_custom_meal_summaries_follow_standard_slots() {
    let user_id = Uuid::new_v4();
    let p = pantry();
    let date = day(2024, 3, 14);
    let brunch = Meal::new(user_id, "Brunch", NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    let records = RecordSet {
        consumptions: vec![consumption(
            user_id,
            &p.bread,
            &p.slice,
            brunch.slot(),
            1.0,
            at(date, 10, 45),
        )],
        ..RecordSet::default()
    };

    let overview = daily_overview(user_id, date, &records);
    let slots: Vec<MealSlot> = overview.meals.iter().map(|meal| meal.slot).collect();
    assert_eq!(
        slots,
        vec![
            MealSlot::Breakfast,
            MealSlot::Lunch,
            MealSlot::Dinner,
            MealSlot::Snack,
            brunch.slot(),
        ]
    );
    assert_eq!(overview.meals[4].nutrients.calories, 74);
}

#[test]
fn test_compare_to_goal_is_a_partition() {
    for intake in [0, 1500, 2175, 2176, 2177, 5000] {
        let verdict = compare_to_goal(intake, Some(2176)).unwrap();
        let expected = match intake {
            i if i < 2176 => GoalVerdict::Under,
            2176 => GoalVerdict::Met,
            _ => GoalVerdict::Over,
        };
        assert_eq!(verdict, expected);
    }
    for value in [-10, 0, 1800] {
        assert_eq!(compare_to_goal(value, Some(value)), Ok(GoalVerdict::Met));
    }
    assert_eq!(
        compare_to_goal(1800, None),
        Err(EnergyError::incomplete("goal_calories"))
    );
}

#[test]
fn test_verdict_messages() {
    assert_eq!(
        GoalVerdict::Under.message(),
        "You are below your calorie goal for today."
    );
    assert_eq!(
        GoalVerdict::Met.message(),
        "You have reached your calorie goal for today."
    );
    assert_eq!(
        GoalVerdict::Over.message(),
        "You have exceeded your calorie goal for today."
    );
}

#[test]
fn test_range_overview_is_inclusive() {
    let user_id = Uuid::new_v4();
    let mut records = sample_day(user_id);
    let p = pantry();
    let later = day(2024, 3, 16);
    records.consumptions.push(consumption(
        user_id,
        &p.bread,
        &p.slice,
        MealSlot::Dinner,
        1.0,
        at(later, 20, 0),
    ));

    let overviews = range_overview(user_id, day(2024, 3, 14), later, &records).unwrap();
    let dates: Vec<_> = overviews.iter().map(|o| o.date).collect();
    assert_eq!(dates, vec![day(2024, 3, 14), day(2024, 3, 15), later]);
    assert_eq!(overviews[0].total_calories_intake, 353);
    assert_eq!(overviews[1].total_calories_intake, 0);
    assert_eq!(overviews[2].total_calories_intake, 74);

    let single = range_overview(user_id, later, later, &records).unwrap();
    assert_eq!(single.len(), 1);
}

#[test]
fn test_range_overview_bounds() {
    let user_id = Uuid::new_v4();
    let records = RecordSet::default();
    let start = day(2024, 1, 1);

    let reversed = range_overview(user_id, start, start - Duration::days(1), &records).unwrap_err();
    assert_eq!(reversed.code, ErrorCode::InvalidInput);

    let too_long = range_overview(user_id, start, start + Duration::days(366), &records).unwrap_err();
    assert_eq!(too_long.code, ErrorCode::ValueOutOfRange);

    // 2024 is a leap year: 366 days is the largest accepted span
    let year = range_overview(user_id, start, day(2024, 12, 31), &records).unwrap();
    assert_eq!(year.len(), 366);
}

#[test]
fn test_goal_progress() {
    let user_id = Uuid::new_v4();
    let overview = daily_overview(user_id, day(2024, 3, 14), &sample_day(user_id));
    let config = HydrationConfig::default();

    // net 53 of 2176; 0.75 L of 2.625 L
    let progress = goal_progress(&overview, Some(2176), Some(75.0), &config);
    assert_eq!(progress.calories, Some(0.02));
    let target = progress.hydration_target_liters.unwrap();
    assert!((target - 2.625).abs() < 1e-9);
    assert!((progress.hydration.unwrap() - 0.75 / 2.625).abs() < 1e-9);

    let over = goal_progress(&overview, Some(40), Some(75.0), &config);
    assert_eq!(over.calories, Some(1.0));

    let unavailable = goal_progress(&overview, None, None, &config);
    assert_eq!(unavailable.calories, None);
    assert_eq!(unavailable.hydration, None);
    assert_eq!(unavailable.hydration_target_liters, None);
}

#[test]
fn test_negative_net_clamps_to_zero_progress() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let records = RecordSet {
        exercise_logs: vec![ExerciseLog::new(user_id, pantry().running, 1.0, date).unwrap()],
        ..RecordSet::default()
    };
    let overview = daily_overview(user_id, date, &records);
    assert_eq!(overview.net_calories, -600);

    let progress = goal_progress(&overview, Some(2000), None, &HydrationConfig::default());
    assert_eq!(progress.calories, Some(0.0));
}

#[test]
fn test_oversized_records_saturate_instead_of_overflowing() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let p = pantry();
    let mut feast = consumption(user_id, &p.rice, &p.cup, MealSlot::Dinner, 1.0, at(date, 19, 0));
    feast.quantity = 1e300;
    let mut second = feast.clone();
    second.id = Uuid::new_v4();
    let mut marathon = ExerciseLog::new(user_id, p.running, 1.0, date).unwrap();
    marathon.duration_in_hours = 1e300;
    let records = RecordSet {
        consumptions: vec![feast, second],
        water_intakes: Vec::new(),
        exercise_logs: vec![marathon.clone(), marathon],
    };

    let overview = daily_overview(user_id, date, &records);

    assert_eq!(overview.total_calories_intake, i64::MAX);
    assert_eq!(overview.total_calories_burned, i64::MAX);
    assert_eq!(overview.net_calories, 0);
    assert_eq!(overview.macros.carbohydrates, i64::MAX);
    let dinner = overview
        .meals
        .iter()
        .find(|meal| meal.slot == MealSlot::Dinner)
        .unwrap();
    assert_eq!(dinner.nutrients.calories, i64::MAX);
}

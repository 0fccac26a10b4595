// ABOUTME: Integration tests for the Markdown daily report
// ABOUTME: Checks the full layout for a complete profile and the degraded sections otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveTime;
use common::{at, bread, consumption, day};
use nutrilog::config::energy::HydrationConfig;
use nutrilog::intelligence::{
    daily_overview, goal_progress, render_daily_report, EnergyTargets, RecordSet,
};
use nutrilog::models::{Exercise, ExerciseLog, Meal, MealSlot, ServingSize, WaterIntake};
use uuid::Uuid;

#[test]
fn test_report_layout_with_targets() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let bread = bread();
    let slice = ServingSize::new(&bread, "1 slice", 30.0).unwrap();
    let records = RecordSet {
        consumptions: vec![consumption(
            user_id,
            &bread,
            &slice,
            MealSlot::Breakfast,
            2.0,
            at(date, 7, 30),
        )],
        water_intakes: vec![WaterIntake::new(user_id, 0.5, date).unwrap()],
        exercise_logs: Vec::new(),
    };
    let overview = daily_overview(user_id, date, &records);
    let targets = EnergyTargets {
        bmr: 1755,
        tdee: 2720,
        goal_calories: 2176,
    };
    let progress = goal_progress(&overview, Some(2176), Some(80.0), &HydrationConfig::default());

    let report = render_daily_report(&overview, Some(&targets), &progress, &[]);

    let expected = "\
# Daily report for 2024-03-14

## Energy
- BMR: 1755 kcal
- TDEE: 2720 kcal
- Goal: 2176 kcal
- Intake: 148 kcal
- Burned: 0 kcal
- Net: 148 kcal
- You are below your calorie goal for today.
- Goal progress: 7%

## Macros
- Carbohydrates: 25 g
- Proteins: 8 g
- Fats: 2 g

## Water
- 0.5 L of 2.8 L (18%)

## Meals

### Breakfast (148 kcal)
- Whole wheat bread (2 x 1 slice): 148 kcal

### Lunch (0 kcal)
_Nothing logged_

### Dinner (0 kcal)
_Nothing logged_

### Snack (0 kcal)
_Nothing logged_
";
    assert_eq!(report, expected);
}

#[test]
fn test_report_without_targets() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let bread = bread();
    let slice = ServingSize::new(&bread, "1 slice", 30.0).unwrap();
    let brunch = Meal::new(user_id, "Brunch", NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    let supper = Meal::new(user_id, "Supper", NaiveTime::from_hms_opt(21, 0, 0).unwrap());
    let records = RecordSet {
        consumptions: vec![consumption(
            user_id,
            &bread,
            &slice,
            brunch.slot(),
            1.0,
            at(date, 10, 40),
        )],
        water_intakes: Vec::new(),
        exercise_logs: vec![
            ExerciseLog::new(user_id, Exercise::new("Running", 600), 0.5, date).unwrap(),
        ],
    };
    let overview = daily_overview(user_id, date, &records);
    let progress = goal_progress(&overview, None, None, &HydrationConfig::default());

    let report = render_daily_report(&overview, None, &progress, &[supper, brunch]);

    assert!(report.contains("- Targets unavailable: physiology profile incomplete"));
    assert!(report.contains("- Net: -226 kcal\n- Goal progress: n/a\n"));
    assert!(!report.contains("calorie goal for today"));
    assert!(report.contains("## Water\n- 0 L\n"));
    assert!(report.contains("### Brunch (10:30) (74 kcal)\n- Whole wheat bread (1 x 1 slice): 74 kcal"));
    assert!(report.contains("### Supper (21:00) (0 kcal)\n_Nothing logged_"));
    assert!(report.find("### Brunch").unwrap() < report.find("### Supper").unwrap());
    assert!(report.ends_with("## Exercise\n- Running (0.5 h): 300 kcal\n"));
}

#[test]
fn test_report_is_deterministic() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let overview = daily_overview(user_id, date, &RecordSet::default());
    let progress = goal_progress(&overview, Some(2000), Some(70.0), &HydrationConfig::default());
    let targets = EnergyTargets {
        bmr: 1600,
        tdee: 2000,
        goal_calories: 2000,
    };

    let first = render_daily_report(&overview, Some(&targets), &progress, &[]);
    let second = render_daily_report(&overview, Some(&targets), &progress, &[]);
    assert_eq!(first, second);
    assert!(first.contains("- 0 L of 2.45 L (0%)"));
}

#[test]
fn test_same_named_meal_merges_with_standard_slot() {
    let user_id = Uuid::new_v4();
    let date = day(2024, 3, 14);
    let bread = bread();
    let slice = ServingSize::new(&bread, "1 slice", 30.0).unwrap();
    let breakfast = Meal::new(user_id, "Breakfast", NaiveTime::from_hms_opt(7, 0, 0).unwrap());
    let records = RecordSet {
        consumptions: vec![
            consumption(user_id, &bread, &slice, MealSlot::Breakfast, 2.0, at(date, 7, 30)),
            consumption(user_id, &bread, &slice, breakfast.slot(), 1.0, at(date, 7, 10)),
        ],
        ..RecordSet::default()
    };
    let overview = daily_overview(user_id, date, &records);
    let progress = goal_progress(&overview, None, None, &HydrationConfig::default());

    let report = render_daily_report(&overview, None, &progress, &[breakfast]);

    assert_eq!(report.matches("### Breakfast").count(), 1);
    assert!(report.contains(
        "### Breakfast (07:00) (222 kcal)\n\
         - Whole wheat bread (1 x 1 slice): 74 kcal\n\
         - Whole wheat bread (2 x 1 slice): 148 kcal\n"
    ));
    assert!(report.contains("### Lunch (0 kcal)"));
    assert!(report.find("### Snack").unwrap() < report.find("### Breakfast").unwrap());
}

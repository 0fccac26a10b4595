// ABOUTME: Markdown rendering of a daily overview with targets, verdict and meals
// ABOUTME: Deterministic output: the same overview always renders byte-identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::daily_aggregator::{compare_to_goal, group_by_user_meals, DailyOverview, GoalProgress};
use super::energy_model::EnergyTargets;
use crate::models::{FoodConsumption, Meal, MealSlot};

fn consumption_line(record: &FoodConsumption) -> String {
    format!(
        "- {} ({} x {}): {} kcal",
        record.food.name,
        format_decimal(record.quantity),
        record.serving_size.name,
        record.calories()
    )
}

fn format_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_owned(), |r| format!("{:.0}%", r * 100.0))
}

fn meal_section(lines: &mut Vec<String>, title: &str, records: &[&FoodConsumption]) {
    let total = records
        .iter()
        .map(|record| record.calories())
        .fold(0_i64, i64::saturating_add);
    lines.push(String::new());
    lines.push(format!("### {title} ({total} kcal)"));
    if records.is_empty() {
        lines.push("_Nothing logged_".to_owned());
    } else {
        lines.extend(records.iter().map(|record| consumption_line(record)));
    }
}

/// Render one day as Markdown.
///
/// Standard slots always get a section. The user's own meals follow in default
/// time order, each with its own section even when empty. A user meal sharing a
/// standard slot's name (case-insensitive) takes over that slot's records and
/// replaces its section.
#[must_use]
pub fn render_daily_report(
    overview: &DailyOverview,
    targets: Option<&EnergyTargets>,
    progress: &GoalProgress,
    meals: &[Meal],
) -> String {
    let mut lines = vec![format!("# Daily report for {}", overview.date), String::new()];

    lines.push("## Energy".to_owned());
    match targets {
        Some(targets) => {
            lines.push(format!("- BMR: {} kcal", targets.bmr));
            lines.push(format!("- TDEE: {} kcal", targets.tdee));
            lines.push(format!("- Goal: {} kcal", targets.goal_calories));
        }
        None => lines.push("- Targets unavailable: physiology profile incomplete".to_owned()),
    }
    lines.push(format!("- Intake: {} kcal", overview.total_calories_intake));
    lines.push(format!("- Burned: {} kcal", overview.total_calories_burned));
    lines.push(format!("- Net: {} kcal", overview.net_calories));
    if let Ok(verdict) = compare_to_goal(
        overview.total_calories_intake,
        targets.map(|t| t.goal_calories),
    ) {
        lines.push(format!("- {}", verdict.message()));
    }
    lines.push(format!("- Goal progress: {}", format_ratio(progress.calories)));

    lines.push(String::new());
    lines.push("## Macros".to_owned());
    lines.push(format!("- Carbohydrates: {} g", overview.macros.carbohydrates));
    lines.push(format!("- Proteins: {} g", overview.macros.proteins));
    lines.push(format!("- Fats: {} g", overview.macros.fats));

    lines.push(String::new());
    lines.push("## Water".to_owned());
    match progress.hydration_target_liters {
        Some(target) => lines.push(format!(
            "- {} L of {} L ({})",
            format_decimal(overview.total_water_intake),
            format_decimal(target),
            format_ratio(progress.hydration)
        )),
        None => lines.push(format!("- {} L", format_decimal(overview.total_water_intake))),
    }

    lines.push(String::new());
    lines.push("## Meals".to_owned());
    let mut user_meals = group_by_user_meals(meals, &overview.food_consumptions);
    for slot in MealSlot::STANDARD {
        let mut records: Vec<&FoodConsumption> = overview
            .food_consumptions
            .iter()
            .filter(|record| record.meal == slot)
            .collect();
        // A user meal named like the slot absorbs it: one heading per name
        if let Some((_, merged)) = user_meals
            .iter_mut()
            .find(|(meal, _)| meal.name.eq_ignore_ascii_case(slot.label()))
        {
            merged.append(&mut records);
            merged.sort_by_key(|record| record.consumed_at);
            continue;
        }
        meal_section(&mut lines, slot.label(), &records);
    }
    for (meal, records) in &user_meals {
        meal_section(
            &mut lines,
            &format!("{} ({})", meal.name, meal.default_time.format("%H:%M")),
            records,
        );
    }

    if !overview.exercise_logs.is_empty() {
        lines.push(String::new());
        lines.push("## Exercise".to_owned());
        lines.extend(overview.exercise_logs.iter().map(|log| {
            format!(
                "- {} ({} h): {} kcal",
                log.exercise.name,
                format_decimal(log.duration_in_hours),
                log.calories_burned()
            )
        }));
    }

    lines.push(String::new());
    lines.join("\n")
}

// ABOUTME: Exercise catalog entries and exercise-log records
// ABOUTME: Calories burned derive from duration and the exercise's hourly rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::{check_amount, round_half_even, DailyRecord};
use crate::constants::limits::MAX_EXERCISE_HOURS;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise with its energy cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier
    pub id: Uuid,
    /// Contributing user; `None` for the shared catalog
    pub owner: Option<Uuid>,
    /// Display name
    pub name: String,
    /// Energy expenditure per hour (kcal)
    pub calories_per_hour: u32,
}

impl Exercise {
    /// Create a shared catalog exercise
    pub fn new(name: impl Into<String>, calories_per_hour: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner: None,
            name: name.into(),
            calories_per_hour,
        }
    }

    /// Attribute the exercise to a user
    #[must_use]
    pub const fn with_owner(mut self, owner: Uuid) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// A practiced exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseLog {
    /// Identifier
    pub id: Uuid,
    /// Practicing user
    pub user_id: Uuid,
    /// Exercise performed
    pub exercise: Exercise,
    /// Session length in hours
    pub duration_in_hours: f64,
    /// Day of practice
    pub practice_date: NaiveDate,
}

impl ExerciseLog {
    /// Create an exercise log.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the duration is not strictly positive and
    /// `ValueOutOfRange` above `MAX_EXERCISE_HOURS`.
    pub fn new(
        user_id: Uuid,
        exercise: Exercise,
        duration_in_hours: f64,
        practice_date: NaiveDate,
    ) -> AppResult<Self> {
        check_amount("Exercise duration", duration_in_hours, MAX_EXERCISE_HOURS)?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            exercise,
            duration_in_hours,
            practice_date,
        })
    }

    /// `round(duration_in_hours * calories_per_hour)`
    #[must_use]
    pub fn calories_burned(&self) -> i64 {
        round_half_even(self.duration_in_hours * f64::from(self.exercise.calories_per_hour))
    }
}

impl DailyRecord for ExerciseLog {
    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn record_date(&self) -> NaiveDate {
        self.practice_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_burned() {
        let run = Exercise::new("Running", 600);
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        let log = ExerciseLog::new(Uuid::new_v4(), run.clone(), 0.75, day).unwrap();
        assert_eq!(log.calories_burned(), 450);

        // 1/3 h x 250 = 83.33 kcal
        let walk = Exercise::new("Walking", 250);
        let log = ExerciseLog::new(Uuid::new_v4(), walk, 1.0 / 3.0, day).unwrap();
        assert_eq!(log.calories_burned(), 83);

        assert!(ExerciseLog::new(Uuid::new_v4(), run, 0.0, day).is_err());
    }

    #[test]
    fn test_duration_is_capped_at_one_day() {
        let run = Exercise::new("Running", 600);
        let day = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();

        assert!(ExerciseLog::new(Uuid::new_v4(), run.clone(), 24.0, day).is_ok());
        let error = ExerciseLog::new(Uuid::new_v4(), run, 1e300, day).unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::ValueOutOfRange);
    }
}

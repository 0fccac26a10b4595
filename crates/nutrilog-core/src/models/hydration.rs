// ABOUTME: Water intake records, canonically in liters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use super::{check_amount, DailyRecord};
use crate::constants::hydration::ML_PER_LITER;
use crate::constants::limits::MAX_WATER_LITERS;
use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Water drunk on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterIntake {
    /// Identifier
    pub id: Uuid,
    /// Drinking user
    pub user_id: Uuid,
    /// Amount in liters
    pub quantity_liters: f64,
    /// Day of intake
    pub intake_date: NaiveDate,
}

impl WaterIntake {
    /// Create an intake record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the quantity is not strictly positive and
    /// `ValueOutOfRange` above `MAX_WATER_LITERS`.
    pub fn new(user_id: Uuid, quantity_liters: f64, intake_date: NaiveDate) -> AppResult<Self> {
        Self::check_quantity(quantity_liters)?;
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            quantity_liters,
            intake_date,
        })
    }

    /// Bounds every intake quantity must satisfy
    ///
    /// # Errors
    ///
    /// Same as [`WaterIntake::new`].
    pub fn check_quantity(quantity_liters: f64) -> AppResult<()> {
        check_amount("Water quantity", quantity_liters, MAX_WATER_LITERS)
    }

    /// Create an intake record from milliliters
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the quantity is zero and `ValueOutOfRange`
    /// above `MAX_WATER_LITERS`.
    pub fn from_milliliters(
        user_id: Uuid,
        milliliters: u32,
        intake_date: NaiveDate,
    ) -> AppResult<Self> {
        Self::new(user_id, f64::from(milliliters) / ML_PER_LITER, intake_date)
    }
}

impl DailyRecord for WaterIntake {
    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn record_date(&self) -> NaiveDate {
        self.intake_date
    }
}

// ABOUTME: Overview service: energy targets, daily and range overviews, dashboard and report
// ABOUTME: Reads through the NutritionStore seam and recomputes derived values on every call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use crate::config::energy::EnergyModelConfig;
use crate::database_plugins::NutritionStore;
use crate::errors::AppResult;
use crate::intelligence::{
    compare_to_goal, compute_energy_targets, daily_aggregator, goal_progress,
    render_daily_report, DailyOverview, EnergyTargets, GoalProgress, GoalVerdict, RecordSet,
};
use crate::logging::AppLogger;
use crate::models::{PhysiologyPatch, PhysiologySnapshot};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Headline numbers for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Calendar day
    pub date: NaiveDate,
    /// Energy targets, absent for an incomplete profile
    pub targets: Option<EnergyTargets>,
    /// Calories eaten
    pub total_calories_intake: i64,
    /// Calories burned by exercise
    pub total_calories_burned: i64,
    /// Intake minus burned
    pub net_calories: i64,
    /// Water in liters
    pub total_water_intake: f64,
    /// Intake compared with the goal, absent for an incomplete profile
    pub verdict: Option<GoalVerdict>,
    /// Message of `verdict`
    pub message: Option<String>,
    /// Progress ratios
    pub progress: GoalProgress,
}

/// Stateless service over a record store.
///
/// Nothing derived is cached: energy targets and totals are recomputed from the
/// current snapshot and records on each call.
pub struct OverviewService<S> {
    store: Arc<S>,
    energy: EnergyModelConfig,
}

impl<S: NutritionStore> OverviewService<S> {
    /// Create a service with an explicit energy model configuration
    #[must_use]
    pub fn new(store: Arc<S>, energy: EnergyModelConfig) -> Self {
        Self { store, energy }
    }

    /// Create a service using the process-wide energy model configuration
    #[must_use]
    pub fn with_global_config(store: Arc<S>) -> Self {
        Self::new(store, EnergyModelConfig::global().clone())
    }

    /// Underlying store
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn day_records(&self, user_id: Uuid, date: NaiveDate) -> AppResult<RecordSet> {
        Ok(RecordSet {
            consumptions: self.store.list_consumptions(user_id, Some(date)).await?,
            water_intakes: self.store.list_water_intakes(user_id, Some(date)).await?,
            exercise_logs: self.store.list_exercise_logs(user_id, Some(date)).await?,
        })
    }

    /// Energy targets for the user's current snapshot, `None` if incomplete
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or a coefficient table has no entry
    /// for one of the snapshot's values
    pub async fn energy_targets(&self, user_id: Uuid) -> AppResult<Option<EnergyTargets>> {
        let snapshot = self.store.get_physiology(user_id).await?;
        Ok(compute_energy_targets(&snapshot, &self.energy)?)
    }

    /// Apply a merge-patch to the user's snapshot and store the result
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn update_physiology(
        &self,
        user_id: Uuid,
        patch: &PhysiologyPatch,
    ) -> AppResult<PhysiologySnapshot> {
        let current = self.store.get_physiology(user_id).await?;
        if patch.is_empty() {
            debug!(user.id = %user_id, "Empty physiology patch, nothing to store");
            return Ok(current);
        }

        let updated = current.merge(patch);
        self.store.put_physiology(user_id, updated.clone()).await?;
        info!(
            user.id = %user_id,
            physiology.complete = updated.is_complete(),
            "Physiology updated"
        );
        Ok(updated)
    }

    /// Totals and records for one day
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds a dangling reference
    pub async fn daily_overview(&self, user_id: Uuid, date: NaiveDate) -> AppResult<DailyOverview> {
        let started = Instant::now();
        let records = self.day_records(user_id, date).await?;
        let overview = daily_aggregator::daily_overview(user_id, date, &records);

        AppLogger::log_overview(
            user_id,
            date,
            records.len(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(overview)
    }

    /// One overview per day in `[start, end]`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `start > end`, or a store error
    pub async fn range_overview(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyOverview>> {
        let records = RecordSet {
            consumptions: self.store.list_consumptions(user_id, None).await?,
            water_intakes: self.store.list_water_intakes(user_id, None).await?,
            exercise_logs: self.store.list_exercise_logs(user_id, None).await?,
        };
        let overviews = daily_aggregator::range_overview(user_id, start, end, &records)?;
        debug!(
            user.id = %user_id,
            range.start = %start,
            range.end = %end,
            range.days = overviews.len(),
            "Range overview computed"
        );
        Ok(overviews)
    }

    /// Day's intake compared with the goal
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when the profile is incomplete
    pub async fn compare_to_goal(&self, user_id: Uuid, date: NaiveDate) -> AppResult<GoalVerdict> {
        let goal = self
            .energy_targets(user_id)
            .await?
            .map(|targets| targets.goal_calories);
        let overview = self.daily_overview(user_id, date).await?;
        Ok(compare_to_goal(overview.total_calories_intake, goal)?)
    }

    async fn day_context(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<(DailyOverview, Option<EnergyTargets>, GoalProgress)> {
        let snapshot = self.store.get_physiology(user_id).await?;
        let targets = compute_energy_targets(&snapshot, &self.energy)?;
        let overview = self.daily_overview(user_id, date).await?;
        let progress = goal_progress(
            &overview,
            targets.map(|t| t.goal_calories),
            snapshot.weight_kg,
            &self.energy.hydration,
        );
        Ok((overview, targets, progress))
    }

    /// Headline numbers for one day
    ///
    /// # Errors
    ///
    /// Returns a store error; an incomplete profile only blanks the target fields
    pub async fn dashboard(&self, user_id: Uuid, date: NaiveDate) -> AppResult<Dashboard> {
        let (overview, targets, progress) = self.day_context(user_id, date).await?;
        let verdict = compare_to_goal(
            overview.total_calories_intake,
            targets.map(|t| t.goal_calories),
        )
        .ok();

        Ok(Dashboard {
            date,
            targets,
            total_calories_intake: overview.total_calories_intake,
            total_calories_burned: overview.total_calories_burned,
            net_calories: overview.net_calories,
            total_water_intake: overview.total_water_intake,
            verdict,
            message: verdict.map(|v| v.message().to_owned()),
            progress,
        })
    }

    /// Markdown report for one day
    ///
    /// # Errors
    ///
    /// Returns a store error
    pub async fn daily_report(&self, user_id: Uuid, date: NaiveDate) -> AppResult<String> {
        let (overview, targets, progress) = self.day_context(user_id, date).await?;
        let meals = self.store.list_meals(user_id).await?;
        Ok(render_daily_report(&overview, targets.as_ref(), &progress, &meals))
    }
}

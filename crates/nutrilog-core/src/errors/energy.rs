// ABOUTME: Error taxonomy for the energy model (BMR, TDEE, goal calories)
// ABOUTME: Distinguishes incomplete physiology from values outside the closed enum sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

use thiserror::Error;

/// Failures raised by the energy model.
///
/// `PhysiologyIncomplete` is recoverable: callers render it as "not available".
/// The `Unsupported*` variants mean a value outside the closed set reached a
/// formula, either through parsing a raw code or through a coefficient table that
/// has no entry for it. They are data/programmer errors and are never defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnergyError {
    /// Gender, age, height, weight, activity level or goal is missing or invalid
    #[error("physiology profile is incomplete: {missing}")]
    PhysiologyIncomplete {
        /// Name of the first field that is missing or invalid
        missing: &'static str,
    },

    /// Gender code with no BMR constant
    #[error("unsupported gender: {0}")]
    UnsupportedGender(String),

    /// Activity level code with no activity factor
    #[error("unsupported activity level: {0}")]
    UnsupportedActivityLevel(String),

    /// Goal type code with no calorie adjustment
    #[error("unsupported goal type: {0}")]
    UnsupportedGoalType(String),
}

impl EnergyError {
    /// Create a `PhysiologyIncomplete` error naming the offending field
    #[must_use]
    pub const fn incomplete(missing: &'static str) -> Self {
        Self::PhysiologyIncomplete { missing }
    }

    /// Whether the caller should treat this as "not available" rather than a fault
    #[must_use]
    pub const fn is_not_available(&self) -> bool {
        matches!(self, Self::PhysiologyIncomplete { .. })
    }
}

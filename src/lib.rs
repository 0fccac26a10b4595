// ABOUTME: Main library entry point for the nutrilog energy-balance engine
// ABOUTME: Energy targets, daily aggregation, record store seam and services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog
//!
//! Energy-balance core for nutrition tracking: derives BMR, TDEE and goal
//! calories from a user's physiology, and aggregates logged food, water and
//! exercise records into per-day totals.
//!
//! ## Architecture
//!
//! - **Models / Errors / Constants**: re-exported from `nutrilog-core`
//! - **Intelligence**: pure energy model, daily aggregator and report renderer
//! - **Database plugins**: the `NutritionStore` seam and its in-memory implementation
//! - **Services**: store-backed overviews, dashboard and physiology updates
//! - **Config / Logging**: environment-sourced configuration and `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilog::config::energy::EnergyModelConfig;
//! use nutrilog::intelligence::compute_energy_targets;
//! use nutrilog::models::{ActivityLevel, Gender, GoalType, PhysiologySnapshot};
//!
//! let snapshot = PhysiologySnapshot {
//!     gender: Some(Gender::Male),
//!     age: Some(25),
//!     height_cm: Some(180.0),
//!     weight_kg: Some(75.0),
//!     activity_level: Some(ActivityLevel::Moderate),
//!     goal_type: Some(GoalType::LoseWeight),
//! };
//! let targets = compute_energy_targets(&snapshot, EnergyModelConfig::global());
//! ```

/// Environment, token and energy model configuration
pub mod config;

/// `NutritionStore` trait and the in-memory store
pub mod database_plugins;

/// Energy model, daily aggregator and daily report
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Store-backed domain services
pub mod services;

/// Domain constants
pub use nutrilog_core::constants;

/// Error types and codes
pub use nutrilog_core::errors;

/// Domain models
pub use nutrilog_core::models;

// ABOUTME: Configuration module: environment, token secret and energy model tables
// ABOUTME: Everything is sourced from environment variables at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

/// Energy model coefficient tables and hydration target
pub mod energy;
/// Deployment environment, log level and the process-wide `ServerConfig`
pub mod environment;
/// Token signing secret and lifetimes
pub mod security;

pub use energy::{
    ActivityFactorsConfig, BmrConfig, ConfigError, EnergyModelConfig, GoalAdjustmentConfig,
    HydrationConfig,
};
pub use environment::{Environment, LogLevel, ServerConfig};
pub use security::{AuthConfig, TokenSecret};

// ABOUTME: Core types and constants for the Nutrilog energy-balance engine
// ABOUTME: Foundation crate with error handling, domain models, and coefficient tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types and constants for Nutrilog. It holds
//! everything the energy model and daily aggregator agree on, so it changes rarely
//! and keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the energy-model error taxonomy
//! - **constants**: coefficient tables, default meals, default exercise catalog
//! - **models**: physiology snapshot, foods and portions, consumption/water/exercise records

/// Unified error handling system with standard error codes
pub mod errors;

/// Coefficient tables and seed data organized by domain
pub mod constants;

/// Domain models (physiology, foods, portions, daily records)
pub mod models;

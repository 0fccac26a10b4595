// ABOUTME: Domain service layer combining the record store with the intelligence module
// ABOUTME: Protocol-agnostic, so an HTTP or CLI front end can reuse the same rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

//! Domain service layer

/// Daily overviews, dashboard, reports and physiology updates
pub mod overview;

pub use overview::{Dashboard, OverviewService};

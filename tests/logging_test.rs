// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration from environment and subscriber installation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilog Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use nutrilog::config::environment::Environment;
use nutrilog::logging::{init_default, AppLogger, LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use uuid::Uuid;

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("NUTRILOG_ENV", "production");
    env::set_var("SERVICE_NAME", "test-service");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, Environment::Production);
    assert_eq!(config.service_name, "test-service");
    assert!(config.include_location); // always on in production

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    env::remove_var("NUTRILOG_ENV");
    env::remove_var("SERVICE_NAME");
}

#[test]
#[serial]
fn test_default_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, "nutrilog");
    assert_eq!(config.environment, Environment::Development);
    assert!(!config.include_location);
}

#[test]
fn test_cli_logging_config() {
    assert_eq!(LoggingConfig::for_cli(false).level, "warn");

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, "debug");
    assert_eq!(verbose.format, LogFormat::Compact);
}

#[test]
#[serial]
fn test_subscriber_installs_once() {
    assert!(init_default().is_ok());
    assert!(init_default().is_err());

    AppLogger::log_record_write(Uuid::new_v4(), "consumption", "create");
    AppLogger::log_overview(
        Uuid::new_v4(),
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
        3,
        1,
    );
    AppLogger::log_integrity_fault("Consumption", Uuid::new_v4(), "food");
}

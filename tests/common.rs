// ABOUTME: Shared test utilities and sample builders for integration tests
// ABOUTME: Provides quiet logging setup and fixed-clock exercise and run fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `fittrack`
//!
//! Every fixture is anchored to [`base_time`] so assertions never depend on
//! the wall clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use fittrack::models::{LoggedExerciseSample, LoggedRunSample};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default stays quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed reference instant: 2025-03-01 12:00:00 UTC
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

/// `base_time()` shifted by whole days
pub fn day(offset: i64) -> DateTime<Utc> {
    base_time() + Duration::days(offset)
}

/// Complete strength entry
pub fn lift(name: &str, weight_kg: f64, reps: u32, sets: u32, at: DateTime<Utc>) -> LoggedExerciseSample {
    LoggedExerciseSample::new(name, at)
        .weight_kg(weight_kg)
        .repetitions(reps)
        .sets(sets)
}

/// Run with a derived pace
pub fn run(duration_minutes: f64, distance_km: f64, at: DateTime<Utc>) -> LoggedRunSample {
    LoggedRunSample::new(duration_minutes, distance_km, at)
}

/// Float comparison used throughout the suite
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

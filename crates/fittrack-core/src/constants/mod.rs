// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Unit conversions and plausibility limits for logged fitness samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// Unit conversion factors
pub mod units {
    /// Centimeters per meter
    pub const CM_PER_METER: f64 = 100.0;
    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Plausibility limits applied at the data-store boundary
///
/// The derivation functions themselves only reject non-positive values;
/// these bounds catch unit mix-ups (grams for kilograms, meters for
/// centimeters) before a record becomes a typed sample.
pub mod limits {
    /// Heaviest body weight accepted (kg)
    pub const MAX_BODY_WEIGHT_KG: f64 = 500.0;
    /// Tallest height accepted (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Oldest age accepted (years)
    pub const MAX_AGE_YEARS: u32 = 130;
    /// Most repetitions accepted in one set
    pub const MAX_REPETITIONS: u32 = 1_000;
    /// Most sets accepted in one logged entry
    pub const MAX_SETS: u32 = 100;
    /// Heaviest lifted load accepted per repetition (kg)
    pub const MAX_LIFT_WEIGHT_KG: f64 = 1_000.0;
    /// Longest single run accepted (minutes)
    pub const MAX_RUN_DURATION_MINUTES: f64 = 24.0 * 60.0 * 7.0;
    /// Longest single run accepted (km)
    pub const MAX_RUN_DISTANCE_KM: f64 = 1_000.0;
}

/// Field names as they appear in data-store rows and error contexts
pub mod fields {
    /// Exercise name column
    pub const EXERCISE_NAME: &str = "exerciseName";
    /// Lifted weight column
    pub const WEIGHT_KG: &str = "weightKg";
    /// Repetitions column
    pub const REPETITIONS: &str = "repetitions";
    /// Sets column
    pub const SETS: &str = "sets";
    /// Timestamp column
    pub const TIMESTAMP: &str = "timestamp";
    /// Run duration column
    pub const DURATION_MINUTES: &str = "durationMinutes";
    /// Run distance column
    pub const DISTANCE_KM: &str = "distanceKm";
    /// Run pace column
    pub const PACE_MIN_PER_KM: &str = "paceMinPerKm";
    /// Profile height column
    pub const HEIGHT_CM: &str = "heightCm";
    /// Profile age column
    pub const AGE_YEARS: &str = "ageYears";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the CLI and library logs
    pub const FITTRACK: &str = "fittrack";
}

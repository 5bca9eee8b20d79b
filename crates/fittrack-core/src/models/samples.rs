// ABOUTME: Logged strength-training and running samples
// ABOUTME: Provides pace and speed derivation for runs and volume factors for lifts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::MINUTES_PER_HOUR;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One logged strength-training entry
///
/// Several samples may share an `exercise_name`; that name is the grouping
/// key for trends and per-exercise summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedExerciseSample {
    /// Exercise name as the user typed it
    pub exercise_name: String,
    /// Load per repetition in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repetitions: Option<u32>,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// When the entry was logged
    pub timestamp: DateTime<Utc>,
}

impl LoggedExerciseSample {
    /// Sample with only a name and timestamp
    pub fn new(exercise_name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            weight_kg: None,
            repetitions: None,
            sets: None,
            timestamp,
        }
    }

    /// Set the load per repetition
    #[must_use]
    pub fn weight_kg(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    /// Set the repetitions per set
    #[must_use]
    pub fn repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = Some(repetitions);
        self
    }

    /// Set the number of sets
    #[must_use]
    pub fn sets(mut self, sets: u32) -> Self {
        self.sets = Some(sets);
        self
    }

    /// Whether weight, repetitions and sets are all recorded
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.weight_kg.is_some() && self.repetitions.is_some() && self.sets.is_some()
    }
}

/// One logged run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedRunSample {
    /// Elapsed time in minutes
    pub duration_minutes: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Pace as stored by the client, if it stored one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,
    /// When the run was logged
    pub timestamp: DateTime<Utc>,
}

impl LoggedRunSample {
    /// Run without a stored pace; pace is derived on demand
    #[must_use]
    pub const fn new(duration_minutes: f64, distance_km: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            duration_minutes,
            distance_km,
            pace_min_per_km: None,
            timestamp,
        }
    }

    /// Pace in minutes per kilometer
    ///
    /// Returns the stored pace when present, otherwise `duration / distance`.
    /// A zero-distance run has no pace.
    #[must_use]
    pub fn pace(&self) -> Option<f64> {
        self.pace_min_per_km.or_else(|| {
            (self.distance_km > 0.0).then(|| self.duration_minutes / self.distance_km)
        })
    }

    /// Average speed in km/h
    #[must_use]
    pub fn speed_kmh(&self) -> Option<f64> {
        (self.duration_minutes > 0.0)
            .then(|| self.distance_km / (self.duration_minutes / MINUTES_PER_HOUR))
    }
}

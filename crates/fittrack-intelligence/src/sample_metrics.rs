// ABOUTME: Shared vocabulary of numeric fields read from logged samples
// ABOUTME: Metric identifiers, per-metric polarity, and the TrackedSample accessor trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Sample metrics
//!
//! Trend classification and aggregation both read numeric fields out of
//! logged samples. [`TrackedSample`] is the only thing they know about a
//! sample, so they stay independent of each other.

use crate::models::{LoggedExerciseSample, LoggedRunSample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric field that can be tracked over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Load per repetition (kg)
    WeightKg,
    /// Repetitions per set
    Repetitions,
    /// Number of sets
    Sets,
    /// Weight x repetitions x sets, only for complete entries
    Volume,
    /// Run duration (minutes)
    DurationMinutes,
    /// Run distance (km)
    DistanceKm,
    /// Run pace (min/km)
    PaceMinPerKm,
}

impl Metric {
    /// Direction in which a change counts as an improvement
    ///
    /// Pace improves downwards; every other metric improves upwards.
    #[must_use]
    pub const fn default_polarity(self) -> MetricPolarity {
        match self {
            Self::PaceMinPerKm => MetricPolarity::LowerIsBetter,
            Self::WeightKg
            | Self::Repetitions
            | Self::Sets
            | Self::Volume
            | Self::DurationMinutes
            | Self::DistanceKm => MetricPolarity::HigherIsBetter,
        }
    }

    /// Stable identifier used in JSON and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightKg => "weight_kg",
            Self::Repetitions => "repetitions",
            Self::Sets => "sets",
            Self::Volume => "volume",
            Self::DurationMinutes => "duration_minutes",
            Self::DistanceKm => "distance_km",
            Self::PaceMinPerKm => "pace_min_per_km",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "weight_kg" | "weight" => Ok(Self::WeightKg),
            "repetitions" | "reps" => Ok(Self::Repetitions),
            "sets" => Ok(Self::Sets),
            "volume" => Ok(Self::Volume),
            "duration_minutes" | "duration" => Ok(Self::DurationMinutes),
            "distance_km" | "distance" => Ok(Self::DistanceKm),
            "pace_min_per_km" | "pace" => Ok(Self::PaceMinPerKm),
            other => Err(format!("Unknown metric: {other}")),
        }
    }
}

/// Which direction of change is good for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricPolarity {
    /// Larger values are better (lifted weight, distance)
    HigherIsBetter,
    /// Smaller values are better (pace)
    LowerIsBetter,
}

impl MetricPolarity {
    /// Multiplier that turns a raw delta into an improvement score
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::HigherIsBetter => 1.0,
            Self::LowerIsBetter => -1.0,
        }
    }
}

/// A timestamped sample exposing numeric metrics
pub trait TrackedSample {
    /// When the sample was logged
    fn timestamp(&self) -> DateTime<Utc>;

    /// Value of `metric`, or `None` when not recorded or not applicable
    fn metric(&self, metric: Metric) -> Option<f64>;

    /// Grouping key, for samples that belong to a named entity
    fn entity_name(&self) -> Option<&str> {
        None
    }
}

impl TrackedSample for LoggedExerciseSample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::WeightKg => self.weight_kg,
            Metric::Repetitions => self.repetitions.map(f64::from),
            Metric::Sets => self.sets.map(f64::from),
            Metric::Volume => match (self.weight_kg, self.repetitions, self.sets) {
                (Some(weight), Some(reps), Some(sets)) => {
                    Some(weight * f64::from(reps) * f64::from(sets))
                }
                _ => None,
            },
            Metric::DurationMinutes | Metric::DistanceKm | Metric::PaceMinPerKm => None,
        }
    }

    fn entity_name(&self) -> Option<&str> {
        Some(&self.exercise_name)
    }
}

impl TrackedSample for LoggedRunSample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::DurationMinutes => Some(self.duration_minutes),
            Metric::DistanceKm => Some(self.distance_km),
            Metric::PaceMinPerKm => self.pace(),
            Metric::WeightKg | Metric::Repetitions | Metric::Sets | Metric::Volume => None,
        }
    }
}

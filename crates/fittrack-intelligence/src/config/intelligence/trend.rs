// ABOUTME: Trend analysis configuration: metric polarity, tracked metric sets, tolerance
// ABOUTME: Polarity is set per metric so pace and lifted weight improve in opposite directions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use crate::sample_metrics::{Metric, MetricPolarity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trend Analysis Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendAnalysisConfig {
    /// Absolute deltas at or below this are treated as no change
    pub stable_tolerance: f64,
    /// Polarity overrides; metrics not listed use [`Metric::default_polarity`]
    pub polarity_overrides: BTreeMap<Metric, MetricPolarity>,
    /// Metrics compared for strength-training trends
    pub exercise_metrics: Vec<Metric>,
    /// Metrics compared for running trends
    pub run_metrics: Vec<Metric>,
    /// Number of prior samples averaged by window comparisons
    pub baseline_window: usize,
}

impl Default for TrendAnalysisConfig {
    fn default() -> Self {
        Self {
            stable_tolerance: 1e-9,
            polarity_overrides: BTreeMap::new(),
            exercise_metrics: vec![Metric::WeightKg, Metric::Repetitions, Metric::Sets],
            run_metrics: vec![Metric::PaceMinPerKm, Metric::DistanceKm],
            baseline_window: 3,
        }
    }
}

impl TrendAnalysisConfig {
    /// Effective polarity for a metric
    #[must_use]
    pub fn polarity(&self, metric: Metric) -> MetricPolarity {
        self.polarity_overrides
            .get(&metric)
            .copied()
            .unwrap_or_else(|| metric.default_polarity())
    }

    /// Validate tolerance, window and metric lists
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stable_tolerance.is_finite() || self.stable_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stable_tolerance must be a non-negative finite number",
            ));
        }
        if self.baseline_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "baseline_window must be at least 1",
            ));
        }
        if self.exercise_metrics.is_empty() {
            return Err(ConfigError::ValueOutOfRange(
                "exercise_metrics must not be empty",
            ));
        }
        if self.run_metrics.is_empty() {
            return Err(ConfigError::ValueOutOfRange("run_metrics must not be empty"));
        }
        Ok(())
    }
}

// ABOUTME: Trend classification comparing the newest sample with the one before it or a window
// ABOUTME: Per-metric polarity with a conservative rule: mixed directions classify as stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Trend Analysis Module
//!
//! Compares the most recent sample of a series against the previous sample
//! (or the mean of a baseline window) and produces per-metric deltas plus an
//! overall [`TrendDirection`].
//!
//! Classification rule, applied to the polarity-adjusted deltas:
//! - `Improving`: at least one metric improved and none regressed
//! - `Declining`: at least one metric regressed and none improved
//! - `Stable`: otherwise, including when metrics disagree

use crate::config::intelligence::TrendAnalysisConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{LoggedExerciseSample, LoggedRunSample};
use crate::sample_metrics::{Metric, MetricPolarity, TrackedSample};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Overall or per-metric direction of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Better by the metric's polarity
    Improving,
    /// Worse by the metric's polarity
    Declining,
    /// No change beyond tolerance, or conflicting changes
    Stable,
}

/// Change in one metric between the current sample and its baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricDelta {
    /// Metric compared
    pub metric: Metric,
    /// Value on the current sample
    pub current: Option<f64>,
    /// Value on the previous sample, or the window mean
    pub baseline: Option<f64>,
    /// `current - baseline` when both exist, otherwise 0
    pub delta: f64,
    /// Polarity used to judge the delta
    pub polarity: MetricPolarity,
    /// Direction of this metric alone
    pub direction: TrendDirection,
}

/// Outcome of a trend comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult<S> {
    /// Newest sample
    pub current: S,
    /// Sample immediately before `current`, if any
    pub previous: Option<S>,
    /// Number of prior samples the baseline was built from
    pub baseline_samples: usize,
    /// One entry per tracked metric, in the order requested
    pub deltas: Vec<MetricDelta>,
    /// Overall classification
    pub classification: TrendDirection,
}

impl<S> TrendResult<S> {
    /// Delta for `metric`, 0 when the metric was not tracked
    #[must_use]
    pub fn delta(&self, metric: Metric) -> f64 {
        self.deltas
            .iter()
            .find(|d| d.metric == metric)
            .map_or(0.0, |d| d.delta)
    }
}

/// Compares time-ordered samples of one tracked entity
pub struct TrendAnalyzer<'a> {
    config: &'a TrendAnalysisConfig,
}

impl<'a> TrendAnalyzer<'a> {
    /// Create an analyzer bound to a configuration
    #[must_use]
    pub const fn new(config: &'a TrendAnalysisConfig) -> Self {
        Self { config }
    }

    /// Sort a copy of `samples` newest first
    ///
    /// Equal timestamps are ordered by the tracked metric values so the
    /// result does not depend on input order.
    #[must_use]
    pub fn newest_first<S: TrackedSample + Clone>(samples: &[S], metrics: &[Metric]) -> Vec<S> {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| {
            b.timestamp().cmp(&a.timestamp()).then_with(|| {
                metrics
                    .iter()
                    .map(|&m| compare_optional(b.metric(m), a.metric(m)))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
        });
        sorted
    }

    /// Classify the newest sample against the previous one, in any input order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `samples` or `metrics` is empty
    pub fn analyze<S: TrackedSample + Clone>(
        &self,
        samples: &[S],
        metrics: &[Metric],
    ) -> AppResult<TrendResult<S>> {
        let sorted = Self::newest_first(samples, metrics);
        self.analyze_ordered(&sorted, metrics)
    }

    /// Classify `samples[0]` against `samples[1]`, trusting newest-first order
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `samples` or `metrics` is empty
    pub fn analyze_ordered<S: TrackedSample + Clone>(
        &self,
        samples: &[S],
        metrics: &[Metric],
    ) -> AppResult<TrendResult<S>> {
        let (current, rest) = split_current(samples, metrics)?;
        let previous = rest.first();

        let deltas: Vec<MetricDelta> = metrics
            .iter()
            .map(|&metric| {
                let baseline = previous.and_then(|p| p.metric(metric));
                self.metric_delta(metric, current.metric(metric), baseline)
            })
            .collect();

        Ok(self.finish(current, previous, usize::from(previous.is_some()), deltas))
    }

    /// Classify the newest sample against the mean of up to `window` prior samples
    ///
    /// For each metric the baseline is the mean over the prior samples that
    /// record it; a metric no prior sample records gets a zero delta.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `samples` or `metrics` is empty or `window` is 0
    pub fn analyze_against_window<S: TrackedSample + Clone>(
        &self,
        samples: &[S],
        metrics: &[Metric],
        window: usize,
    ) -> AppResult<TrendResult<S>> {
        if window == 0 {
            return Err(AppError::invalid_input("Baseline window must be at least 1"));
        }
        let sorted = Self::newest_first(samples, metrics);
        let (current, rest) = split_current(&sorted, metrics)?;
        let baseline_window = &rest[..rest.len().min(window)];

        let deltas: Vec<MetricDelta> = metrics
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = baseline_window
                    .iter()
                    .filter_map(|s| s.metric(metric))
                    .collect();
                let baseline = mean(&values);
                self.metric_delta(metric, current.metric(metric), baseline)
            })
            .collect();

        Ok(self.finish(current, rest.first(), baseline_window.len(), deltas))
    }

    /// Trend per exercise name using the configured exercise metrics
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the configured exercise metric list is empty
    pub fn analyze_by_exercise(
        &self,
        samples: &[LoggedExerciseSample],
    ) -> AppResult<BTreeMap<String, TrendResult<LoggedExerciseSample>>> {
        let mut groups: BTreeMap<&str, Vec<LoggedExerciseSample>> = BTreeMap::new();
        for sample in samples {
            groups
                .entry(sample.exercise_name.as_str())
                .or_default()
                .push(sample.clone());
        }

        groups
            .into_iter()
            .map(|(name, group)| {
                let trend = self.analyze(&group, &self.config.exercise_metrics)?;
                Ok((name.to_owned(), trend))
            })
            .collect()
    }

    /// Trend across runs using the configured run metrics
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `runs` is empty
    pub fn analyze_runs(&self, runs: &[LoggedRunSample]) -> AppResult<TrendResult<LoggedRunSample>> {
        self.analyze(runs, &self.config.run_metrics)
    }

    /// Combine per-metric directions into one classification
    #[must_use]
    pub fn classify(deltas: &[MetricDelta]) -> TrendDirection {
        let improved = deltas
            .iter()
            .any(|d| d.direction == TrendDirection::Improving);
        let regressed = deltas
            .iter()
            .any(|d| d.direction == TrendDirection::Declining);

        match (improved, regressed) {
            (true, false) => TrendDirection::Improving,
            (false, true) => TrendDirection::Declining,
            _ => TrendDirection::Stable,
        }
    }

    fn metric_delta(
        &self,
        metric: Metric,
        current: Option<f64>,
        baseline: Option<f64>,
    ) -> MetricDelta {
        let polarity = self.config.polarity(metric);
        let delta = match (current, baseline) {
            (Some(c), Some(b)) => c - b,
            _ => 0.0,
        };
        let score = delta * polarity.sign();
        let direction = if score > self.config.stable_tolerance {
            TrendDirection::Improving
        } else if score < -self.config.stable_tolerance {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        };

        MetricDelta {
            metric,
            current,
            baseline,
            delta,
            polarity,
            direction,
        }
    }

    fn finish<S: Clone>(
        &self,
        current: &S,
        previous: Option<&S>,
        baseline_samples: usize,
        deltas: Vec<MetricDelta>,
    ) -> TrendResult<S> {
        let classification = Self::classify(&deltas);
        debug!(
            metrics = deltas.len(),
            baseline_samples,
            tolerance = self.config.stable_tolerance,
            classification = ?classification,
            "Classified trend"
        );
        TrendResult {
            current: current.clone(),
            previous: previous.cloned(),
            baseline_samples,
            deltas,
            classification,
        }
    }
}

fn split_current<'s, S>(samples: &'s [S], metrics: &[Metric]) -> AppResult<(&'s S, &'s [S])> {
    if metrics.is_empty() {
        return Err(AppError::invalid_input(
            "At least one metric is required for trend analysis",
        ));
    }
    samples
        .split_first()
        .ok_or_else(|| AppError::invalid_input("Trend analysis requires at least one sample"))
}

// None sorts below any value
fn compare_optional(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[allow(clippy::cast_precision_loss)] // Safe: window sizes are small
fn mean(values: &[f64]) -> Option<f64> {
    (!values.is_empty()).then(|| values.iter().sum::<f64>() / values.len() as f64)
}

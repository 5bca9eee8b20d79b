// ABOUTME: Aggregation of logged samples into counts, sums, averages and extrema
// ABOUTME: Supports name and inclusive-cutoff filters, training volume, per-exercise and run summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Aggregation Module
//!
//! Folds a bounded list of samples into summary statistics. An empty input is
//! not an error: it yields zero count, sum and average and no extrema.

use crate::config::intelligence::AggregationConfig;
use crate::models::{LoggedExerciseSample, LoggedRunSample};
use crate::sample_metrics::{Metric, TrackedSample};
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How samples missing weight, repetitions or sets count toward volume
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumePolicy {
    /// Incomplete samples contribute no volume and are reported separately
    #[default]
    ExcludeIncomplete,
    /// Missing factors are taken as 1, which overstates incomplete entries
    MissingAsOne,
}

impl fmt::Display for VolumePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExcludeIncomplete => f.write_str("exclude_incomplete"),
            Self::MissingAsOne => f.write_str("missing_as_one"),
        }
    }
}

impl FromStr for VolumePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "exclude_incomplete" => Ok(Self::ExcludeIncomplete),
            "missing_as_one" => Ok(Self::MissingAsOne),
            other => Err(format!("Unknown volume policy: {other}")),
        }
    }
}

/// Optional name and time-window filter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleFilter {
    /// Keep only samples whose entity name equals this
    pub entity_name: Option<String>,
    /// Keep only samples at or after this instant
    pub since: Option<DateTime<Utc>>,
}

impl SampleFilter {
    /// Filter that keeps everything
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one entity name
    #[must_use]
    pub fn entity(mut self, name: impl Into<String>) -> Self {
        self.entity_name = Some(name.into());
        self
    }

    /// Restrict to samples at or after `cutoff`
    #[must_use]
    pub fn since(mut self, cutoff: DateTime<Utc>) -> Self {
        self.since = Some(cutoff);
        self
    }

    /// Restrict to the `days` days ending at `now`
    #[must_use]
    pub fn last_days(self, days: u32, now: DateTime<Utc>) -> Self {
        self.since(now - Duration::days(i64::from(days)))
    }

    /// Whether a sample passes the filter; the cutoff is inclusive
    pub fn matches<S: TrackedSample>(&self, sample: &S) -> bool {
        let name_ok = self
            .entity_name
            .as_deref()
            .is_none_or(|wanted| sample.entity_name() == Some(wanted));
        let time_ok = self.since.is_none_or(|cutoff| sample.timestamp() >= cutoff);
        name_ok && time_ok
    }
}

/// Count, sum, average and extrema of a set of values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStatistics {
    /// Number of values
    pub count: usize,
    /// Sum of values, 0 when empty
    pub sum: f64,
    /// Arithmetic mean, 0 when empty
    pub average: f64,
    /// Smallest value, `None` when empty
    pub min: Option<f64>,
    /// Largest value, `None` when empty
    pub max: Option<f64>,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            average: 0.0,
            min: None,
            max: None,
        }
    }
}

impl SummaryStatistics {
    /// Summarize an iterator of values
    #[allow(clippy::cast_precision_loss)] // Safe: sample counts are bounded
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let mut stats = values
            .into_iter()
            .fold(Self::default(), |mut acc, value| {
                acc.count += 1;
                acc.sum += value;
                acc.min = Some(acc.min.map_or(value, |m| m.min(value)));
                acc.max = Some(acc.max.map_or(value, |m| m.max(value)));
                acc
            });
        if stats.count > 0 {
            stats.average = stats.sum / stats.count as f64;
        }
        stats
    }
}

/// Statistics for one metric over filtered samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAggregate {
    /// Metric aggregated
    pub metric: Metric,
    /// Samples that passed the filter
    pub matched_samples: usize,
    /// Statistics over matched samples recording the metric
    pub stats: SummaryStatistics,
}

/// Aggregate one metric over the samples that pass `filter`
pub fn aggregate_metric<S: TrackedSample>(
    samples: &[S],
    filter: &SampleFilter,
    metric: Metric,
) -> MetricAggregate {
    let matched: Vec<&S> = samples.iter().filter(|s| filter.matches(*s)).collect();
    let stats = SummaryStatistics::from_values(matched.iter().filter_map(|s| s.metric(metric)));

    debug!(
        metric = %metric,
        total = samples.len(),
        matched = matched.len(),
        counted = stats.count,
        "Aggregated metric"
    );

    MetricAggregate {
        metric,
        matched_samples: matched.len(),
        stats,
    }
}

/// Volume of one sample under a policy, `None` when it does not count
#[must_use]
pub fn sample_volume(sample: &LoggedExerciseSample, policy: VolumePolicy) -> Option<f64> {
    match policy {
        VolumePolicy::ExcludeIncomplete => sample.metric(Metric::Volume),
        VolumePolicy::MissingAsOne => Some(
            sample.weight_kg.unwrap_or(1.0)
                * f64::from(sample.repetitions.unwrap_or(1))
                * f64::from(sample.sets.unwrap_or(1)),
        ),
    }
}

/// Training volume over filtered exercise samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
    /// Policy applied to incomplete samples
    pub policy: VolumePolicy,
    /// Samples that passed the filter
    pub matched_samples: usize,
    /// Matched samples missing weight, repetitions or sets
    pub incomplete_samples: usize,
    /// Statistics over per-sample volumes
    pub stats: SummaryStatistics,
}

impl VolumeSummary {
    /// Total volume (kg)
    #[must_use]
    pub const fn total_volume(&self) -> f64 {
        self.stats.sum
    }
}

/// Aggregate training volume (weight x reps x sets)
pub fn aggregate_volume(
    samples: &[LoggedExerciseSample],
    filter: &SampleFilter,
    config: &AggregationConfig,
) -> VolumeSummary {
    let matched: Vec<&LoggedExerciseSample> =
        samples.iter().filter(|s| filter.matches(*s)).collect();
    let incomplete_samples = matched.iter().filter(|s| !s.is_complete()).count();
    let stats = SummaryStatistics::from_values(
        matched
            .iter()
            .filter_map(|s| sample_volume(s, config.volume_policy)),
    );

    debug!(
        policy = %config.volume_policy,
        matched = matched.len(),
        incomplete = incomplete_samples,
        total_volume = stats.sum,
        "Aggregated training volume"
    );

    VolumeSummary {
        policy: config.volume_policy,
        matched_samples: matched.len(),
        incomplete_samples,
        stats,
    }
}

/// Per-exercise rollup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    /// Exercise name
    pub exercise_name: String,
    /// Logged entries
    pub sessions: usize,
    /// Volume under the configured policy
    pub total_volume: f64,
    /// Sum of recorded sets
    pub total_sets: u64,
    /// Heaviest recorded load
    pub heaviest_weight_kg: Option<f64>,
    /// Most repetitions recorded in one entry
    pub best_repetitions: Option<u32>,
    /// Most recent entry
    pub last_performed: DateTime<Utc>,
}

fn summarize_group(
    name: &str,
    group: &[&LoggedExerciseSample],
    policy: VolumePolicy,
) -> Option<ExerciseSummary> {
    let last_performed = group.iter().map(|s| s.timestamp).max()?;
    Some(ExerciseSummary {
        exercise_name: name.to_owned(),
        sessions: group.len(),
        total_volume: group.iter().filter_map(|s| sample_volume(s, policy)).sum(),
        total_sets: group.iter().filter_map(|s| s.sets).map(u64::from).sum(),
        heaviest_weight_kg: group
            .iter()
            .filter_map(|s| s.weight_kg)
            .max_by(f64::total_cmp),
        best_repetitions: group.iter().filter_map(|s| s.repetitions).max(),
        last_performed,
    })
}

/// Summaries per exercise name, sorted by name
///
/// Groups are folded in parallel.
pub fn summarize_exercises(
    samples: &[LoggedExerciseSample],
    filter: &SampleFilter,
    config: &AggregationConfig,
) -> Vec<ExerciseSummary> {
    let mut groups: BTreeMap<&str, Vec<&LoggedExerciseSample>> = BTreeMap::new();
    for sample in samples.iter().filter(|s| filter.matches(*s)) {
        groups
            .entry(sample.exercise_name.as_str())
            .or_default()
            .push(sample);
    }

    let groups: Vec<(&str, Vec<&LoggedExerciseSample>)> = groups.into_iter().collect();
    let policy = config.volume_policy;
    groups
        .par_iter()
        .filter_map(|(name, group)| summarize_group(name, group, policy))
        .collect()
}

/// Running rollup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Runs that passed the filter
    pub runs: usize,
    /// Total distance (km)
    pub total_distance_km: f64,
    /// Total time (minutes)
    pub total_duration_minutes: f64,
    /// Total time over total distance, `None` without distance
    pub average_pace_min_per_km: Option<f64>,
    /// Fastest pace of any single run
    pub best_pace_min_per_km: Option<f64>,
    /// Longest single run (km)
    pub longest_run_km: Option<f64>,
    /// Highest average speed of any single run (km/h)
    pub fastest_speed_kmh: Option<f64>,
}

/// Summarize runs that pass `filter`
pub fn summarize_runs(samples: &[LoggedRunSample], filter: &SampleFilter) -> RunSummary {
    let matched: Vec<&LoggedRunSample> = samples.iter().filter(|s| filter.matches(*s)).collect();
    let total_distance_km: f64 = matched.iter().map(|s| s.distance_km).sum();
    let total_duration_minutes: f64 = matched.iter().map(|s| s.duration_minutes).sum();

    RunSummary {
        runs: matched.len(),
        total_distance_km,
        total_duration_minutes,
        average_pace_min_per_km: (total_distance_km > 0.0)
            .then(|| total_duration_minutes / total_distance_km),
        best_pace_min_per_km: matched
            .iter()
            .filter_map(|s| s.pace())
            .min_by(f64::total_cmp),
        longest_run_km: matched.iter().map(|s| s.distance_km).max_by(f64::total_cmp),
        fastest_speed_kmh: matched
            .iter()
            .filter_map(|s| s.speed_kmh())
            .max_by(f64::total_cmp),
    }
}

// ABOUTME: Aggregate commands for fittrack-cli
// ABOUTME: Training volume with per-exercise rollups, and running summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use fittrack::{
    aggregation::{
        aggregate_metric, aggregate_volume, summarize_exercises, summarize_runs, ExerciseSummary,
        MetricAggregate, RunSummary, SampleFilter, VolumePolicy, VolumeSummary,
    },
    config::IntelligenceConfig,
    errors::AppResult,
    models::{LoggedExerciseSample, LoggedRunSample, RawExerciseRecord, RawRunRecord},
    sample_metrics::Metric,
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::{input::read_records, output::print_json};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseReport {
    filter: SampleFilter,
    volume: VolumeSummary,
    exercises: Vec<ExerciseSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<MetricAggregate>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RunReport {
    filter: SampleFilter,
    #[serde(flatten)]
    summary: RunSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    metric: Option<MetricAggregate>,
}

/// Build a filter for the requested window, falling back to the configured one
pub fn window_filter(
    config: &IntelligenceConfig,
    exercise: Option<String>,
    days: Option<u32>,
    all: bool,
) -> SampleFilter {
    let mut filter = SampleFilter::all();
    filter.entity_name = exercise;
    if all {
        return filter;
    }
    let days = days.unwrap_or(config.aggregation.default_window_days);
    filter.last_days(days, Utc::now())
}

/// Volume, per-exercise rollups and an optional metric summary
pub fn exercises(
    config: &IntelligenceConfig,
    input: &Path,
    filter: &SampleFilter,
    volume_policy: Option<VolumePolicy>,
    metric: Option<Metric>,
) -> Result<()> {
    let samples: Vec<LoggedExerciseSample> = read_records::<RawExerciseRecord, _>(input)?;

    let mut aggregation = config.aggregation.clone();
    if let Some(policy) = volume_policy {
        aggregation.volume_policy = policy;
    }

    let report = ExerciseReport {
        volume: aggregate_volume(&samples, filter, &aggregation),
        exercises: summarize_exercises(&samples, filter, &aggregation),
        metric: metric.map(|m| aggregate_metric(&samples, filter, m)),
        filter: filter.clone(),
    };

    info!(
        matched = report.volume.matched_samples,
        total_volume = report.volume.total_volume(),
        "Exercise aggregation complete"
    );
    print_json(&report)
}

/// Running summary and an optional metric summary
pub fn runs(input: &Path, filter: &SampleFilter, metric: Option<Metric>) -> Result<()> {
    let samples: Vec<LoggedRunSample> = read_records::<RawRunRecord, _>(input)?;

    let report = RunReport {
        summary: summarize_runs(&samples, filter),
        metric: metric.map(|m| aggregate_metric(&samples, filter, m)),
        filter: filter.clone(),
    };

    info!(runs = report.summary.runs, "Run aggregation complete");
    print_json(&report)
}

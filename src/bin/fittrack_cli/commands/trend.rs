// ABOUTME: Trend commands for fittrack-cli
// ABOUTME: Classifies exercise entries per name and runs as one series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::{
    config::IntelligenceConfig,
    errors::{AppError, AppResult},
    models::{LoggedExerciseSample, LoggedRunSample, RawExerciseRecord, RawRunRecord},
    sample_metrics::{Metric, TrackedSample},
    trend_analysis::{TrendAnalyzer, TrendResult},
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::helpers::{input::read_records, output::print_json};

type Result<T> = AppResult<T>;

fn analyze_series<S: TrackedSample + Clone>(
    analyzer: &TrendAnalyzer<'_>,
    samples: &[S],
    metrics: &[Metric],
    window: Option<usize>,
) -> Result<TrendResult<S>> {
    match window {
        Some(window) => analyzer.analyze_against_window(samples, metrics, window),
        None => analyzer.analyze(samples, metrics),
    }
}

/// A bare `--window` means the configured baseline window
pub fn resolve_window(config: &IntelligenceConfig, window: Option<Option<usize>>) -> Option<usize> {
    window.map(|w| w.unwrap_or(config.trend.baseline_window))
}

/// Trend for each exercise name, optionally restricted to one
pub fn exercises(
    config: &IntelligenceConfig,
    input: &Path,
    exercise: Option<&str>,
    metrics: &[Metric],
    window: Option<Option<usize>>,
) -> Result<()> {
    let mut samples: Vec<LoggedExerciseSample> =
        read_records::<RawExerciseRecord, _>(input)?;
    if let Some(name) = exercise {
        samples.retain(|s| s.exercise_name == name);
        if samples.is_empty() {
            return Err(AppError::invalid_input(format!(
                "No entries found for exercise {name}"
            )));
        }
    }

    let analyzer = TrendAnalyzer::new(&config.trend);
    let window = resolve_window(config, window);

    let trends = if metrics.is_empty() && window.is_none() {
        analyzer.analyze_by_exercise(&samples)?
    } else {
        let metrics = if metrics.is_empty() {
            config.trend.exercise_metrics.as_slice()
        } else {
            metrics
        };
        let mut groups: BTreeMap<String, Vec<LoggedExerciseSample>> = BTreeMap::new();
        for sample in samples {
            groups
                .entry(sample.exercise_name.clone())
                .or_default()
                .push(sample);
        }
        groups
            .into_iter()
            .map(|(name, group)| Ok((name, analyze_series(&analyzer, &group, metrics, window)?)))
            .collect::<Result<BTreeMap<_, _>>>()?
    };

    info!(exercises = trends.len(), "Exercise trends classified");
    print_json(&trends)
}

/// Trend across all runs
pub fn runs(
    config: &IntelligenceConfig,
    input: &Path,
    metrics: &[Metric],
    window: Option<Option<usize>>,
) -> Result<()> {
    let samples: Vec<LoggedRunSample> = read_records::<RawRunRecord, _>(input)?;
    let analyzer = TrendAnalyzer::new(&config.trend);
    let window = resolve_window(config, window);

    let trend = if metrics.is_empty() && window.is_none() {
        analyzer.analyze_runs(&samples)?
    } else {
        let metrics = if metrics.is_empty() {
            config.trend.run_metrics.as_slice()
        } else {
            metrics
        };
        analyze_series(&analyzer, &samples, metrics, window)?
    };

    info!(classification = ?trend.classification, "Run trend classified");
    print_json(&trend)
}

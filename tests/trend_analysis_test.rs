// ABOUTME: Unit tests for trend classification over exercise and run samples
// ABOUTME: Validates polarity, mixed-direction handling, ordering, windows and error cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack::{
    config::intelligence::TrendAnalysisConfig,
    errors::ErrorCode,
    models::{LoggedExerciseSample, LoggedRunSample},
    sample_metrics::{Metric, MetricPolarity},
    trend_analysis::{TrendAnalyzer, TrendDirection},
};

mod common;

use common::{approx_eq, day, init_test_logging, lift, run};

const STRENGTH: [Metric; 3] = [Metric::WeightKg, Metric::Repetitions, Metric::Sets];

// ============================================================================
// STRENGTH TRENDS
// ============================================================================

#[test]
fn test_heavier_lift_is_improving() {
    init_test_logging();
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("squat", 80.0, 5, 3, day(0)),
        lift("squat", 85.0, 5, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();

    assert_eq!(trend.classification, TrendDirection::Improving);
    assert!(approx_eq(trend.delta(Metric::WeightKg), 5.0));
    assert!(approx_eq(trend.delta(Metric::Repetitions), 0.0));
    assert_eq!(trend.current.weight_kg, Some(85.0));
    assert_eq!(trend.previous.unwrap().weight_kg, Some(80.0));
    assert_eq!(trend.baseline_samples, 1);
}

#[test]
fn test_lighter_lift_is_declining() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("bench", 60.0, 8, 3, day(0)),
        lift("bench", 57.5, 8, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();
    assert_eq!(trend.classification, TrendDirection::Declining);
    assert!(approx_eq(trend.delta(Metric::WeightKg), -2.5));
}

#[test]
fn test_mixed_directions_are_stable() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("deadlift", 100.0, 5, 3, day(0)),
        lift("deadlift", 110.0, 3, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();

    assert_eq!(trend.classification, TrendDirection::Stable);
    let weight = trend.deltas.iter().find(|d| d.metric == Metric::WeightKg).unwrap();
    let reps = trend
        .deltas
        .iter()
        .find(|d| d.metric == Metric::Repetitions)
        .unwrap();
    assert_eq!(weight.direction, TrendDirection::Improving);
    assert_eq!(reps.direction, TrendDirection::Declining);
}

#[test]
fn test_identical_samples_are_stable() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("row", 50.0, 10, 3, day(0)),
        lift("row", 50.0, 10, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();
    assert_eq!(trend.classification, TrendDirection::Stable);
    assert!(trend.deltas.iter().all(|d| approx_eq(d.delta, 0.0)));
}

#[test]
fn test_single_sample_is_stable_without_previous() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![lift("press", 40.0, 8, 3, day(0))];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();

    assert_eq!(trend.classification, TrendDirection::Stable);
    assert!(trend.previous.is_none());
    assert_eq!(trend.baseline_samples, 0);
    assert_eq!(trend.deltas.len(), STRENGTH.len());
    assert!(trend.deltas.iter().all(|d| d.baseline.is_none()));
}

#[test]
fn test_missing_value_contributes_zero_delta() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let previous = LoggedExerciseSample::new("pull-up", day(0))
        .repetitions(8)
        .sets(3);
    let current = lift("pull-up", 10.0, 10, 3, day(1));

    let trend = analyzer.analyze(&[previous, current], &STRENGTH).unwrap();

    let weight = trend.deltas.iter().find(|d| d.metric == Metric::WeightKg).unwrap();
    assert!(approx_eq(weight.delta, 0.0));
    assert_eq!(weight.direction, TrendDirection::Stable);
    assert_eq!(trend.classification, TrendDirection::Improving);
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn test_input_order_does_not_matter() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let ordered = vec![
        lift("squat", 100.0, 5, 3, day(2)),
        lift("squat", 90.0, 5, 3, day(1)),
        lift("squat", 95.0, 5, 3, day(0)),
    ];
    let mut shuffled = ordered.clone();
    shuffled.reverse();

    let a = analyzer.analyze(&ordered, &STRENGTH).unwrap();
    let b = analyzer.analyze(&shuffled, &STRENGTH).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.current.timestamp, day(2));
    assert_eq!(a.previous.unwrap().timestamp, day(1));
    assert_eq!(b.classification, TrendDirection::Improving);
}

#[test]
fn test_analyze_ordered_trusts_caller_order() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    // Deliberately oldest first: the first element is treated as current
    let samples = vec![
        lift("squat", 80.0, 5, 3, day(0)),
        lift("squat", 85.0, 5, 3, day(1)),
    ];

    let trend = analyzer.analyze_ordered(&samples, &STRENGTH).unwrap();
    assert_eq!(trend.classification, TrendDirection::Declining);
}

#[test]
fn test_equal_timestamps_resolve_deterministically() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let light = lift("curl", 12.0, 10, 3, day(0));
    let heavy = lift("curl", 14.0, 10, 3, day(0));

    let a = analyzer
        .analyze(&[light.clone(), heavy.clone()], &STRENGTH)
        .unwrap();
    let b = analyzer.analyze(&[heavy, light], &STRENGTH).unwrap();

    assert_eq!(a.classification, b.classification);
    assert_eq!(a.current, b.current);
}

#[test]
fn test_newest_first_sorts_descending() {
    let samples = vec![
        lift("squat", 80.0, 5, 3, day(0)),
        lift("squat", 82.5, 5, 3, day(3)),
        lift("squat", 81.0, 5, 3, day(1)),
    ];
    let sorted = TrendAnalyzer::newest_first(&samples, &STRENGTH);
    let days: Vec<_> = sorted.iter().map(|s| s.timestamp).collect();
    assert_eq!(days, vec![day(3), day(1), day(0)]);
}

// ============================================================================
// RUNNING TRENDS
// ============================================================================

#[test]
fn test_faster_pace_is_improving() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let runs = vec![run(30.0, 5.0, day(0)), run(27.5, 5.0, day(1))];

    let trend = analyzer.analyze_runs(&runs).unwrap();

    assert_eq!(trend.classification, TrendDirection::Improving);
    assert!(approx_eq(trend.delta(Metric::PaceMinPerKm), -0.5));
    let pace = trend
        .deltas
        .iter()
        .find(|d| d.metric == Metric::PaceMinPerKm)
        .unwrap();
    assert_eq!(pace.polarity, MetricPolarity::LowerIsBetter);
    assert_eq!(pace.direction, TrendDirection::Improving);
}

#[test]
fn test_slower_pace_is_declining() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let runs = vec![run(25.0, 5.0, day(0)), run(30.0, 5.0, day(1))];

    let trend = analyzer.analyze(&runs, &[Metric::PaceMinPerKm]).unwrap();
    assert_eq!(trend.classification, TrendDirection::Declining);
}

#[test]
fn test_slower_but_longer_run_is_stable() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    // Pace 6.0 -> 6.5 (worse), distance 5 -> 6 (better)
    let runs = vec![run(30.0, 5.0, day(0)), run(39.0, 6.0, day(1))];

    let trend = analyzer.analyze_runs(&runs).unwrap();
    assert_eq!(trend.classification, TrendDirection::Stable);
}

#[test]
fn test_stored_pace_takes_precedence() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let mut previous = run(30.0, 5.0, day(0));
    previous.pace_min_per_km = Some(5.0);
    let current = run(30.0, 5.0, day(1));

    // Stored 5.0 against derived 6.0
    let trend = analyzer.analyze(&[previous, current], &[Metric::PaceMinPerKm]).unwrap();
    assert!(approx_eq(trend.delta(Metric::PaceMinPerKm), 1.0));
    assert_eq!(trend.classification, TrendDirection::Declining);
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_polarity_override_inverts_direction() {
    let mut config = TrendAnalysisConfig::default();
    config
        .polarity_overrides
        .insert(Metric::WeightKg, MetricPolarity::LowerIsBetter);
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("assisted dip", 30.0, 8, 3, day(0)),
        lift("assisted dip", 35.0, 8, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();
    assert_eq!(trend.classification, TrendDirection::Declining);
}

#[test]
fn test_changes_within_tolerance_are_stable() {
    let config = TrendAnalysisConfig {
        stable_tolerance: 0.5,
        ..TrendAnalysisConfig::default()
    };
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("squat", 80.0, 5, 3, day(0)),
        lift("squat", 80.25, 5, 3, day(1)),
    ];

    let trend = analyzer.analyze(&samples, &STRENGTH).unwrap();
    assert_eq!(trend.classification, TrendDirection::Stable);
    assert!(approx_eq(trend.delta(Metric::WeightKg), 0.25));
}

// ============================================================================
// BASELINE WINDOW
// ============================================================================

#[test]
fn test_window_compares_against_mean() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("squat", 100.0, 5, 3, day(0)),
        lift("squat", 80.0, 5, 3, day(1)),
        lift("squat", 90.0, 5, 3, day(2)),
        lift("squat", 95.0, 5, 3, day(3)),
    ];

    // Mean of 100, 80, 90 is 90
    let wide = analyzer
        .analyze_against_window(&samples, &STRENGTH, 3)
        .unwrap();
    assert_eq!(wide.baseline_samples, 3);
    assert!(approx_eq(wide.delta(Metric::WeightKg), 5.0));
    assert_eq!(wide.classification, TrendDirection::Improving);

    // Window of one matches the plain previous-sample comparison
    let narrow = analyzer
        .analyze_against_window(&samples, &STRENGTH, 1)
        .unwrap();
    assert!(approx_eq(narrow.delta(Metric::WeightKg), 5.0));
    assert_eq!(narrow.baseline_samples, 1);
}

#[test]
fn test_window_larger_than_history_uses_all_prior_samples() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("squat", 100.0, 5, 3, day(0)),
        lift("squat", 90.0, 5, 3, day(1)),
    ];

    let trend = analyzer
        .analyze_against_window(&samples, &STRENGTH, 10)
        .unwrap();
    assert_eq!(trend.baseline_samples, 1);
    assert_eq!(trend.classification, TrendDirection::Declining);
}

#[test]
fn test_zero_window_is_rejected() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![lift("squat", 100.0, 5, 3, day(0))];

    let err = analyzer
        .analyze_against_window(&samples, &STRENGTH, 0)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

// ============================================================================
// GROUPING AND ERRORS
// ============================================================================

#[test]
fn test_analyze_by_exercise_groups_by_name() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![
        lift("squat", 100.0, 5, 3, day(0)),
        lift("bench", 70.0, 5, 3, day(0)),
        lift("squat", 105.0, 5, 3, day(1)),
        lift("bench", 67.5, 5, 3, day(1)),
        lift("row", 60.0, 8, 3, day(1)),
    ];

    let trends = analyzer.analyze_by_exercise(&samples).unwrap();

    let names: Vec<&str> = trends.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["bench", "row", "squat"]);
    assert_eq!(trends["squat"].classification, TrendDirection::Improving);
    assert_eq!(trends["bench"].classification, TrendDirection::Declining);
    assert_eq!(trends["row"].classification, TrendDirection::Stable);
}

#[test]
fn test_empty_samples_are_rejected() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples: Vec<LoggedRunSample> = Vec::new();

    let err = analyzer.analyze_runs(&samples).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_empty_metric_list_is_rejected() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let samples = vec![lift("squat", 100.0, 5, 3, day(0))];

    let err = analyzer.analyze(&samples, &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_trend_result_serializes_snake_case_directions() {
    let config = TrendAnalysisConfig::default();
    let analyzer = TrendAnalyzer::new(&config);
    let runs = vec![run(30.0, 5.0, day(0)), run(27.5, 5.0, day(1))];

    let trend = analyzer.analyze_runs(&runs).unwrap();
    let json = serde_json::to_value(&trend).unwrap();

    assert_eq!(json["classification"], "improving");
    assert_eq!(json["baselineSamples"], 1);
    assert_eq!(json["deltas"][0]["metric"], "pace_min_per_km");
    assert_eq!(json["deltas"][0]["polarity"], "lower_is_better");
}

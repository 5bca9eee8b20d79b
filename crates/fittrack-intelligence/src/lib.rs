// ABOUTME: Derived fitness metric engine: BMI classification, trend detection, aggregation
// ABOUTME: Stateless, input-pure computations over samples fetched by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Intelligence
//!
//! Three independent computations over typed samples from `fittrack-core`:
//!
//! - **BMI derivation** ([`bmi_calculator`]): value, table-driven category,
//!   advisory text and healthy weight range
//! - **Trend classification** ([`trend_analysis`]): newest sample against the
//!   previous one or a baseline window, with per-metric polarity
//! - **Aggregation** ([`aggregation`]): filtered counts, sums, averages,
//!   extrema, training volume and per-exercise or running rollups
//!
//! Every function is synchronous and free of side effects. Session state
//! (current user, clock) is passed in explicitly by the caller.

pub use fittrack_core::{constants, errors, models};

/// Filtered summary statistics, training volume and rollups
pub mod aggregation;
/// Body Mass Index derivation and classification
pub mod bmi_calculator;
/// Configuration for BMI tables, trend polarity and aggregation policy
pub mod config;
/// Reference thresholds behind the default configuration
pub mod physiological_constants;
/// Metric identifiers, polarity and the `TrackedSample` trait
pub mod sample_metrics;
/// Newest-versus-previous trend classification
pub mod trend_analysis;

pub use aggregation::{
    aggregate_metric, aggregate_volume, sample_volume, summarize_exercises, summarize_runs,
    ExerciseSummary, MetricAggregate, RunSummary, SampleFilter, SummaryStatistics, VolumePolicy,
    VolumeSummary,
};
pub use bmi_calculator::{
    build_advisory, calculate_bmi, classify_bmi, derive_bmi, healthy_weight_range,
    round_to_one_decimal, weight_change_to_healthy_range, BmiCategory, DerivedMetricResult,
};
pub use config::IntelligenceConfig;
pub use sample_metrics::{Metric, MetricPolarity, TrackedSample};
pub use trend_analysis::{MetricDelta, TrendAnalyzer, TrendDirection, TrendResult};

// ABOUTME: Main library entry point for the fittrack derived-metric engine
// ABOUTME: Re-exports the core data model and the intelligence computations, adds logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack
//!
//! Derived fitness metrics computed from samples a caller has already fetched:
//! BMI with table-driven categories, trend classification across logged
//! sessions, and filtered aggregation of exercise and running history.
//!
//! ## Architecture
//!
//! - **`fittrack-core`**: error types, constants and the typed sample model,
//!   including conversion from loosely-typed data-store rows
//! - **`fittrack-intelligence`**: the stateless computations and their
//!   configuration
//! - **this crate**: a facade over both plus structured logging setup and
//!   the `fittrack-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::bmi_calculator::derive_bmi;
//! use fittrack::config::IntelligenceConfig;
//! use fittrack::models::BiometricProfile;
//! use fittrack::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = IntelligenceConfig::default();
//!     let profile = BiometricProfile::new(70.0, 175.0);
//!     let result = derive_bmi(&profile, &config.bmi)?;
//!     assert!((result.value - 22.9).abs() < f64::EPSILON);
//!     Ok(())
//! }
//! ```

pub use fittrack_core::{constants, errors, models};
pub use fittrack_intelligence::{
    aggregation, bmi_calculator, config, physiological_constants, sample_metrics, trend_analysis,
};

/// Structured logging configuration and subscriber installation
pub mod logging;

pub use fittrack_intelligence::{
    aggregate_metric, aggregate_volume, derive_bmi, summarize_exercises, summarize_runs,
    IntelligenceConfig, Metric, SampleFilter, TrendAnalyzer, TrendDirection,
};

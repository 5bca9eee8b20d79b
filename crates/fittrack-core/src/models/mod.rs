// ABOUTME: Typed data models consumed by the metric derivation crate
// ABOUTME: Re-exports biometric profiles, logged samples and boundary records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models
//!
//! The managed data store owns the lifecycle of every record. These types
//! are the typed view the derivation code reads: rows are validated once at
//! the boundary (see [`boundary`]) and from then on fields are either present
//! or explicitly optional.

/// Loose data-store rows and their validation into typed samples
pub mod boundary;
/// Biometric profile used for BMI-style derivations
pub mod profile;
/// Logged exercise and run samples
pub mod samples;

pub use boundary::{RawExerciseRecord, RawNumber, RawProfileRecord, RawRunRecord};
pub use profile::{BiologicalSex, BiometricProfile};
pub use samples::{LoggedExerciseSample, LoggedRunSample};

// ABOUTME: Core types and constants for fittrack derived fitness metrics
// ABOUTME: Foundation crate with error handling, typed sample models, and unit constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Fittrack Core
//!
//! Foundation crate providing shared types and constants for the fittrack
//! metric derivation workspace. This crate is designed to change infrequently,
//! so the intelligence crate and the CLI can build against a stable base.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Unit conversions and physiological limits
//! - **models**: Typed biometric, exercise and run samples plus data-store boundary records

/// Unified error handling system with standard error codes
pub mod errors;

/// Unit conversion and validation constants
pub mod constants;

/// Typed sample models and boundary validation
pub mod models;

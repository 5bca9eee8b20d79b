// ABOUTME: Configuration module for fittrack-intelligence crate
// ABOUTME: Re-exports intelligence configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Intelligence module configuration (BMI tables, trend polarity, aggregation policy)
pub mod intelligence;

pub use intelligence::IntelligenceConfig;

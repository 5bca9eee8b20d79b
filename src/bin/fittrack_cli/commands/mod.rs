// ABOUTME: Re-exports command modules for fittrack-cli
// ABOUTME: Provides access to bmi, trend and aggregate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod aggregate;
pub mod bmi;
pub mod trend;

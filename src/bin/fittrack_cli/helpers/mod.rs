// ABOUTME: Helper modules for fittrack-cli
// ABOUTME: Record loading from files or stdin and JSON output formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod input;
pub mod output;

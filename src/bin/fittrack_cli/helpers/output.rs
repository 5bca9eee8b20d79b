// ABOUTME: JSON output helpers for fittrack-cli
// ABOUTME: Results go to stdout, error bodies to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::errors::{AppError, AppResult, ErrorResponse};
use serde::Serialize;

/// Pretty-print a result as JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

/// Print an error body as JSON on stderr
pub fn print_error(error: AppError) {
    let message = error.to_string();
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{message}"),
    }
}

// ABOUTME: Loads exported records from a file or stdin for fittrack-cli
// ABOUTME: Converts raw rows into typed samples, tagging failures with the record index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

type Result<T> = AppResult<T>;

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(|e| {
            AppError::invalid_input(format!("Failed to read stdin: {e}")).with_source(e)
        })?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })
}

/// Read a single JSON value
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_source(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read a JSON array of raw rows and validate each into `T`
pub fn read_records<R, T>(path: &Path) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    T: TryFrom<R, Error = AppError>,
{
    let rows: Vec<R> = read_json(path)?;
    let total = rows.len();
    let samples = rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            T::try_from(row).map_err(|e| e.with_details(json!({ "record": index })))
        })
        .collect::<Result<Vec<T>>>()?;

    debug!(path = %path.display(), records = total, "Loaded records");
    Ok(samples)
}

// ABOUTME: Loose data-store rows and their one-time validation into typed samples
// ABOUTME: Accepts numbers encoded as strings, camelCase or snake_case columns, RFC 3339 or date timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data-store boundary
//!
//! Rows fetched from the managed store arrive as loosely typed JSON: numeric
//! columns may be strings, empty strings stand for "not entered", and the
//! timestamp column has a few historical names. Everything is checked here,
//! once, so that [`LoggedExerciseSample`], [`LoggedRunSample`] and
//! [`BiometricProfile`] can be trusted downstream.

use super::{BiologicalSex, BiometricProfile, LoggedExerciseSample, LoggedRunSample};
use crate::constants::{fields, limits};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Numeric column as the store returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    /// JSON number
    Number(f64),
    /// Number typed into a text column
    Text(String),
}

impl RawNumber {
    /// Parse into a float; blank text counts as absent
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the text is not a number, `InvalidInput`
    /// if the value is not finite
    pub fn to_f64(&self, field: &str) -> AppResult<Option<f64>> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<f64>().map_err(|_| {
                    AppError::invalid_format(field, format!("{field} is not a number: {trimmed}"))
                })?
            }
        };
        if !value.is_finite() {
            return Err(AppError::invalid_input(format!("{field} must be finite")).with_field(field));
        }
        Ok(Some(value))
    }
}

fn optional_f64(raw: Option<&RawNumber>, field: &str) -> AppResult<Option<f64>> {
    raw.map_or(Ok(None), |n| n.to_f64(field))
}

fn required_f64(raw: Option<&RawNumber>, field: &str) -> AppResult<f64> {
    optional_f64(raw, field)?.ok_or_else(|| AppError::missing_field(field))
}

fn optional_count(raw: Option<&RawNumber>, max: u32, field: &str) -> AppResult<Option<u32>> {
    let Some(value) = optional_f64(raw, field)? else {
        return Ok(None);
    };
    if value < 0.0 || value.fract() != 0.0 {
        return Err(AppError::invalid_input(format!(
            "{field} must be a non-negative whole number, got {value}"
        ))
        .with_field(field));
    }
    if value > f64::from(max) {
        return Err(AppError::out_of_range(
            field,
            format!("{field} of {value} exceeds the maximum of {max}"),
        ));
    }
    // Safe: whole, non-negative and at most `max`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = value as u32;
    Ok(Some(count))
}

fn check_positive(value: f64, max: f64, field: &str) -> AppResult<f64> {
    if value <= 0.0 {
        return Err(AppError::invalid_input(format!("{field} must be positive")).with_field(field));
    }
    if value > max {
        return Err(AppError::out_of_range(
            field,
            format!("{field} of {value} exceeds the maximum of {max}"),
        ));
    }
    Ok(value)
}

/// Parse an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC)
///
/// # Errors
///
/// Returns `MissingRequiredField` when absent and `InvalidFormat` when unparseable
pub fn parse_timestamp(raw: Option<&str>) -> AppResult<DateTime<Utc>> {
    let text = raw
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::missing_field(fields::TIMESTAMP))?;

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            AppError::invalid_format(fields::TIMESTAMP, format!("Unrecognized timestamp: {text}"))
        })
}

/// Strength-training row as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExerciseRecord {
    /// Exercise name
    #[serde(default, alias = "exercise_name", alias = "name")]
    pub exercise_name: Option<String>,
    /// Load per repetition
    #[serde(default, alias = "weight_kg", alias = "weight")]
    pub weight_kg: Option<RawNumber>,
    /// Repetitions per set
    #[serde(default, alias = "reps")]
    pub repetitions: Option<RawNumber>,
    /// Number of sets
    #[serde(default)]
    pub sets: Option<RawNumber>,
    /// Logged-at timestamp
    #[serde(default, alias = "created_at", alias = "createdAt", alias = "date")]
    pub timestamp: Option<String>,
}

impl TryFrom<RawExerciseRecord> for LoggedExerciseSample {
    type Error = AppError;

    fn try_from(raw: RawExerciseRecord) -> AppResult<Self> {
        let exercise_name = raw
            .exercise_name
            .map(|name| name.trim().to_owned())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::missing_field(fields::EXERCISE_NAME))?;

        let weight_kg = optional_f64(raw.weight_kg.as_ref(), fields::WEIGHT_KG)?;
        if let Some(weight) = weight_kg {
            if weight < 0.0 || weight > limits::MAX_LIFT_WEIGHT_KG {
                return Err(AppError::out_of_range(
                    fields::WEIGHT_KG,
                    format!(
                        "Lifted weight must be between 0 and {} kg",
                        limits::MAX_LIFT_WEIGHT_KG
                    ),
                ));
            }
        }

        let sample = Self {
            exercise_name,
            weight_kg,
            repetitions: optional_count(
                raw.repetitions.as_ref(),
                limits::MAX_REPETITIONS,
                fields::REPETITIONS,
            )?,
            sets: optional_count(raw.sets.as_ref(), limits::MAX_SETS, fields::SETS)?,
            timestamp: parse_timestamp(raw.timestamp.as_deref())?,
        };

        if !sample.is_complete() {
            debug!(
                exercise = %sample.exercise_name,
                has_weight = sample.weight_kg.is_some(),
                has_reps = sample.repetitions.is_some(),
                has_sets = sample.sets.is_some(),
                "Accepted incomplete exercise record"
            );
        }
        Ok(sample)
    }
}

/// Running row as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRunRecord {
    /// Elapsed minutes
    #[serde(default, alias = "duration_minutes", alias = "duration")]
    pub duration_minutes: Option<RawNumber>,
    /// Distance in kilometers
    #[serde(default, alias = "distance_km", alias = "distance")]
    pub distance_km: Option<RawNumber>,
    /// Pace if the client stored one
    #[serde(default, alias = "pace_min_per_km", alias = "pace")]
    pub pace_min_per_km: Option<RawNumber>,
    /// Logged-at timestamp
    #[serde(default, alias = "created_at", alias = "createdAt", alias = "date")]
    pub timestamp: Option<String>,
}

impl TryFrom<RawRunRecord> for LoggedRunSample {
    type Error = AppError;

    fn try_from(raw: RawRunRecord) -> AppResult<Self> {
        let duration_minutes = check_positive(
            required_f64(raw.duration_minutes.as_ref(), fields::DURATION_MINUTES)?,
            limits::MAX_RUN_DURATION_MINUTES,
            fields::DURATION_MINUTES,
        )?;
        let distance_km = check_positive(
            required_f64(raw.distance_km.as_ref(), fields::DISTANCE_KM)?,
            limits::MAX_RUN_DISTANCE_KM,
            fields::DISTANCE_KM,
        )?;

        // A stored pace of zero is how the client marks "not computed"
        let pace_min_per_km = optional_f64(raw.pace_min_per_km.as_ref(), fields::PACE_MIN_PER_KM)?
            .filter(|pace| *pace > 0.0);

        Ok(Self {
            duration_minutes,
            distance_km,
            pace_min_per_km,
            timestamp: parse_timestamp(raw.timestamp.as_deref())?,
        })
    }
}

/// Profile row as stored
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProfileRecord {
    /// Body weight
    #[serde(default, alias = "weight_kg", alias = "weight")]
    pub weight_kg: Option<RawNumber>,
    /// Height
    #[serde(default, alias = "height_cm", alias = "height")]
    pub height_cm: Option<RawNumber>,
    /// Age in years
    #[serde(default, alias = "age_years", alias = "age")]
    pub age_years: Option<RawNumber>,
    /// Free-text sex column
    #[serde(default, alias = "biological_sex", alias = "sex", alias = "gender")]
    pub biological_sex: Option<String>,
}

impl TryFrom<RawProfileRecord> for BiometricProfile {
    type Error = AppError;

    fn try_from(raw: RawProfileRecord) -> AppResult<Self> {
        let weight_kg = check_positive(
            required_f64(raw.weight_kg.as_ref(), fields::WEIGHT_KG)?,
            limits::MAX_BODY_WEIGHT_KG,
            fields::WEIGHT_KG,
        )?;
        let height_cm = check_positive(
            required_f64(raw.height_cm.as_ref(), fields::HEIGHT_CM)?,
            limits::MAX_HEIGHT_CM,
            fields::HEIGHT_CM,
        )?;

        let age_years = optional_count(
            raw.age_years.as_ref(),
            limits::MAX_AGE_YEARS,
            fields::AGE_YEARS,
        )?;

        // Unrecognised values only cost advisory specificity
        let biological_sex = raw
            .biological_sex
            .as_deref()
            .and_then(|s| s.parse::<BiologicalSex>().ok());

        Ok(Self {
            weight_kg,
            height_cm,
            age_years,
            biological_sex,
        })
    }
}

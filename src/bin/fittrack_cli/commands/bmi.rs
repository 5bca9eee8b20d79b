// ABOUTME: BMI command for fittrack-cli
// ABOUTME: Builds a profile from flags or a profile record and prints the derived result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use fittrack::{
    bmi_calculator::{derive_bmi, weight_change_to_healthy_range, DerivedMetricResult},
    config::IntelligenceConfig,
    errors::{AppError, AppResult},
    models::{BiologicalSex, BiometricProfile, RawProfileRecord},
};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::helpers::{input::read_json, output::print_json};

type Result<T> = AppResult<T>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BmiReport {
    profile: BiometricProfile,
    #[serde(flatten)]
    result: DerivedMetricResult,
    weight_change_to_healthy_range_kg: f64,
}

fn profile_from_flags(
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    sex: Option<BiologicalSex>,
) -> Result<BiometricProfile> {
    let weight = weight.ok_or_else(|| AppError::missing_field("weight"))?;
    let height = height.ok_or_else(|| AppError::missing_field("height"))?;

    let mut profile = BiometricProfile::new(weight, height);
    profile.age_years = age;
    profile.biological_sex = sex;
    Ok(profile)
}

/// Derive BMI and print it with the weight change needed to reach the healthy range
pub fn derive(
    config: &IntelligenceConfig,
    weight: Option<f64>,
    height: Option<f64>,
    age: Option<u32>,
    sex: Option<BiologicalSex>,
    profile_path: Option<&Path>,
) -> Result<()> {
    let profile = match profile_path {
        Some(path) => BiometricProfile::try_from(read_json::<RawProfileRecord>(path)?)?,
        None => profile_from_flags(weight, height, age, sex)?,
    };

    let result = derive_bmi(&profile, &config.bmi)?;
    info!(bmi = result.value, category = %result.category, "BMI derived");

    let report = BmiReport {
        weight_change_to_healthy_range_kg: weight_change_to_healthy_range(
            &result,
            profile.weight_kg,
        ),
        profile,
        result,
    };
    print_json(&report)
}

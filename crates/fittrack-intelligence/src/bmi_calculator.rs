// ABOUTME: Body Mass Index derivation with table-driven classification and advisory text
// ABOUTME: Computes BMI, category, healthy weight range, and weight change to reach it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Calculator Module
//!
//! Derives Body Mass Index from a [`BiometricProfile`] and classifies it with
//! the category table configured for the user's age bracket.
//!
//! # Scientific References
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894.
//! - Winter, J.E., et al. (2014). BMI and all-cause mortality in older adults: a meta-analysis.
//!   *American Journal of Clinical Nutrition*, 99(4), 875-890.
//!   <https://doi.org/10.3945/ajcn.113.068122>

use crate::config::intelligence::{BmiCategoryTable, BmiConfig};
use crate::constants::{fields, units::CM_PER_METER};
use crate::errors::{AppError, AppResult};
use crate::models::{BiologicalSex, BiometricProfile};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// BMI category, ordered from lowest to highest band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below the healthy range
    Underweight,
    /// Healthy range
    Normal,
    /// Pre-obese
    Overweight,
    /// Obesity class I
    #[serde(rename = "obesity_class_i")]
    ObesityClassI,
    /// Obesity class II
    #[serde(rename = "obesity_class_ii")]
    ObesityClassII,
    /// Obesity class III
    #[serde(rename = "obesity_class_iii")]
    ObesityClassIII,
}

impl BmiCategory {
    /// Position in the ordering, 0 for underweight
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Underweight => 0,
            Self::Normal => 1,
            Self::Overweight => 2,
            Self::ObesityClassI => 3,
            Self::ObesityClassII => 4,
            Self::ObesityClassIII => 5,
        }
    }

    /// Machine-readable label, identical to the serialized form
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObesityClassI => "obesity_class_i",
            Self::ObesityClassII => "obesity_class_ii",
            Self::ObesityClassIII => "obesity_class_iii",
        }
    }

    /// Advisory template for this category
    #[must_use]
    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Underweight => {
                "Your BMI is below the healthy range. Consider a nutrient-dense diet with enough energy and protein, and talk to a healthcare professional if weight loss was unintentional."
            }
            Self::Normal => {
                "Your BMI is within the healthy range. Keep up regular activity and a balanced diet to maintain it."
            }
            Self::Overweight => {
                "Your BMI is above the healthy range. Regular aerobic and strength training combined with a modest calorie deficit can bring it down gradually."
            }
            Self::ObesityClassI => {
                "Your BMI is in the obesity class I range. A structured plan for nutrition and activity is recommended, ideally with guidance from a healthcare professional."
            }
            Self::ObesityClassII => {
                "Your BMI is in the obesity class II range, which carries an elevated health risk. Please discuss a weight management plan with a healthcare professional."
            }
            Self::ObesityClassIII => {
                "Your BMI is in the obesity class III range, which carries a high health risk. Medical supervision is strongly recommended before starting an intensive training program."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a derived body-composition metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetricResult {
    /// Metric value, rounded to one decimal
    pub value: f64,
    /// Category from the applicable table
    pub category: BmiCategory,
    /// Ordinal of `category`
    pub category_index: usize,
    /// Category advisory plus optional age/sex qualifiers
    pub advisory_text: String,
    /// Lowest healthy body weight for this height (kg)
    pub range_low: f64,
    /// Highest healthy body weight for this height (kg)
    pub range_high: f64,
}

/// Round to one decimal place
#[must_use]
pub fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn require_positive(value: f64, name: &str) -> AppResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "{name} must be a positive number, got {value}"
        ))
        .with_field(name));
    }
    Ok(value)
}

/// Validated height converted from centimeters to meters
fn height_in_meters(height_cm: f64) -> AppResult<f64> {
    Ok(require_positive(height_cm, fields::HEIGHT_CM)? / CM_PER_METER)
}

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_cm` / `CM_PER_METER`)^2, rounded to one decimal
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not a positive finite number
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    let weight_kg = require_positive(weight_kg, fields::WEIGHT_KG)?;
    let height_m = height_in_meters(height_cm)?;
    Ok(round_to_one_decimal(weight_kg / (height_m * height_m)))
}

/// Look up the category for a BMI value
///
/// # Errors
///
/// Returns `ConfigInvalid` if the table leaves `value` uncovered, which only
/// happens for tables that skipped validation
pub fn classify_bmi(value: f64, table: &BmiCategoryTable) -> AppResult<BmiCategory> {
    table
        .band_for(value)
        .map(|band| band.category)
        .ok_or_else(|| AppError::config(format!("BMI category table does not cover {value}")))
}

/// Healthy body-weight range for a height
///
/// Inverts the BMI formula at the configured healthy BMI bounds:
/// `weight = bmi * height_m^2`, each rounded to one decimal.
///
/// # Errors
///
/// Returns `InvalidInput` if height is not a positive finite number
pub fn healthy_weight_range(height_cm: f64, config: &BmiConfig) -> AppResult<(f64, f64)> {
    let height_m = height_in_meters(height_cm)?;
    let height_sq = height_m * height_m;
    Ok((
        round_to_one_decimal(config.healthy_bmi_low * height_sq),
        round_to_one_decimal(config.healthy_bmi_high * height_sq),
    ))
}

/// Build advisory text for a category, appending age and sex qualifiers when known
#[must_use]
pub fn build_advisory(
    category: BmiCategory,
    profile: &BiometricProfile,
    config: &BmiConfig,
) -> String {
    let mut sentences = vec![category.advisory().to_owned()];

    match profile.age_years {
        Some(age) if config.is_minor(age) => sentences.push(format!(
            "For people under {}, BMI should be read against age- and sex-specific growth percentiles, so ask a pediatric professional to interpret it.",
            config.adult_age_years
        )),
        Some(age) if age >= config.older_adult_age_years => sentences.push(format!(
            "From age {} a BMI slightly above the healthy range is not necessarily a concern; preserving muscle and bone matters as much as the number.",
            config.older_adult_age_years
        )),
        _ => {}
    }

    match profile.biological_sex {
        Some(BiologicalSex::Male) => sentences.push(
            "Men usually carry more lean mass than women at the same BMI, so a muscular build can read as overweight."
                .to_owned(),
        ),
        Some(BiologicalSex::Female) => sentences.push(
            "Women usually carry more body fat than men at the same BMI, so the same value can reflect a different body composition."
                .to_owned(),
        ),
        None => {}
    }

    sentences.join(" ")
}

/// Derive BMI, category, advisory text and healthy range for a profile
///
/// # Errors
///
/// Returns `InvalidInput` if weight or height is not a positive finite number
pub fn derive_bmi(profile: &BiometricProfile, config: &BmiConfig) -> AppResult<DerivedMetricResult> {
    let value = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let table = config.table_for_age(profile.age_years);
    let category = classify_bmi(value, table)?;
    let (range_low, range_high) = healthy_weight_range(profile.height_cm, config)?;

    debug!(
        bmi = value,
        category = %category,
        age_known = profile.age_years.is_some(),
        sex_known = profile.biological_sex.is_some(),
        "Derived BMI"
    );

    Ok(DerivedMetricResult {
        value,
        category,
        category_index: category.index(),
        advisory_text: build_advisory(category, profile, config),
        range_low,
        range_high,
    })
}

/// Signed weight change (kg) that would bring `weight_kg` into the healthy range
///
/// Positive means gain, negative means lose, zero means already inside.
#[must_use]
pub fn weight_change_to_healthy_range(result: &DerivedMetricResult, weight_kg: f64) -> f64 {
    if weight_kg < result.range_low {
        round_to_one_decimal(result.range_low - weight_kg)
    } else if weight_kg > result.range_high {
        round_to_one_decimal(result.range_high - weight_kg)
    } else {
        0.0
    }
}

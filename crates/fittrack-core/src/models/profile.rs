// ABOUTME: Biometric profile model with optional age and biological sex
// ABOUTME: Weight and height are mandatory, the rest only refines advisory text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex as recorded in the user's profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    /// Male
    Male,
    /// Female
    Female,
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for BiologicalSex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("Unknown biological sex: {other}")),
        }
    }
}

/// Body measurements for derived health metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in whole years, when the user provided it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_years: Option<u32>,
    /// Biological sex, when the user provided it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological_sex: Option<BiologicalSex>,
}

impl BiometricProfile {
    /// Profile with only the mandatory measurements
    #[must_use]
    pub const fn new(weight_kg: f64, height_cm: f64) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years: None,
            biological_sex: None,
        }
    }

    /// Attach an age
    #[must_use]
    pub const fn with_age(mut self, age_years: u32) -> Self {
        self.age_years = Some(age_years);
        self
    }

    /// Attach a biological sex
    #[must_use]
    pub const fn with_sex(mut self, sex: BiologicalSex) -> Self {
        self.biological_sex = Some(sex);
        self
    }
}

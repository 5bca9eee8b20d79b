// ABOUTME: BMI configuration: category tables per age bracket and healthy-range bounds
// ABOUTME: Tables are ordered threshold lists so brackets swap without touching the computation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Configuration
//!
//! Classification is a lookup in an ascending table of bands. The adult and
//! minor brackets each carry their own table.

use super::ConfigError;
use crate::bmi_calculator::BmiCategory;
use crate::physiological_constants::{age_brackets, bmi};
use serde::{Deserialize, Serialize};

/// One band of a category table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiBand {
    /// Exclusive upper bound; `None` marks the open-ended last band
    pub upper_bound: Option<f64>,
    /// Category assigned to values inside the band
    pub category: BmiCategory,
}

impl BmiBand {
    /// Band closed above at `upper_bound`
    #[must_use]
    pub const fn below(upper_bound: f64, category: BmiCategory) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            category,
        }
    }

    /// Open-ended band
    #[must_use]
    pub const fn open(category: BmiCategory) -> Self {
        Self {
            upper_bound: None,
            category,
        }
    }
}

/// Ascending list of BMI bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiCategoryTable {
    /// Bands sorted by ascending upper bound, last one open-ended
    pub bands: Vec<BmiBand>,
}

impl BmiCategoryTable {
    /// WHO adult table: `<18.5, <25, <30, <35, <40, else`
    #[must_use]
    pub fn adult() -> Self {
        Self {
            bands: vec![
                BmiBand::below(bmi::UNDERWEIGHT_UPPER, BmiCategory::Underweight),
                BmiBand::below(bmi::NORMAL_UPPER, BmiCategory::Normal),
                BmiBand::below(bmi::OVERWEIGHT_UPPER, BmiCategory::Overweight),
                BmiBand::below(bmi::OBESITY_I_UPPER, BmiCategory::ObesityClassI),
                BmiBand::below(bmi::OBESITY_II_UPPER, BmiCategory::ObesityClassII),
                BmiBand::open(BmiCategory::ObesityClassIII),
            ],
        }
    }

    /// Coarser table for users under the adult age: obesity is not graded
    #[must_use]
    pub fn minor() -> Self {
        Self {
            bands: vec![
                BmiBand::below(bmi::UNDERWEIGHT_UPPER, BmiCategory::Underweight),
                BmiBand::below(bmi::NORMAL_UPPER, BmiCategory::Normal),
                BmiBand::below(bmi::OVERWEIGHT_UPPER, BmiCategory::Overweight),
                BmiBand::open(BmiCategory::ObesityClassI),
            ],
        }
    }

    /// Band containing `value`, the first whose upper bound exceeds it
    #[must_use]
    pub fn band_for(&self, value: f64) -> Option<&BmiBand> {
        self.bands
            .iter()
            .find(|band| band.upper_bound.is_none_or(|upper| value < upper))
    }

    /// Check that bounds and categories both ascend and only the last band is open
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTable` describing the first violation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some((last, closed)) = self.bands.split_last() else {
            return Err(ConfigError::InvalidTable("table has no bands".into()));
        };
        if last.upper_bound.is_some() {
            return Err(ConfigError::InvalidTable(
                "last band must be open-ended".into(),
            ));
        }

        let mut previous: Option<&BmiBand> = None;
        for band in closed {
            let Some(upper) = band.upper_bound else {
                return Err(ConfigError::InvalidTable(format!(
                    "only the last band may be open-ended, found open {} band",
                    band.category
                )));
            };
            if !upper.is_finite() || upper <= 0.0 {
                return Err(ConfigError::InvalidTable(format!(
                    "bound {upper} for {} must be positive and finite",
                    band.category
                )));
            }
            if let Some(prev) = previous {
                if prev.upper_bound.is_some_and(|p| p >= upper) {
                    return Err(ConfigError::InvalidTable(format!(
                        "bounds must ascend: {} follows {}",
                        band.category, prev.category
                    )));
                }
                if prev.category >= band.category {
                    return Err(ConfigError::InvalidTable(format!(
                        "categories must ascend: {} follows {}",
                        band.category, prev.category
                    )));
                }
            }
            previous = Some(band);
        }

        if let Some(prev) = previous {
            if prev.category >= last.category {
                return Err(ConfigError::InvalidTable(format!(
                    "categories must ascend: {} follows {}",
                    last.category, prev.category
                )));
            }
        }
        Ok(())
    }
}

/// BMI derivation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiConfig {
    /// Category table for adults
    pub adult_table: BmiCategoryTable,
    /// Category table for users younger than `adult_age_years`
    pub minor_table: BmiCategoryTable,
    /// First age treated as adult
    pub adult_age_years: u32,
    /// Age from which the older-adult advisory qualifier applies
    pub older_adult_age_years: u32,
    /// BMI at the low end of the healthy range
    pub healthy_bmi_low: f64,
    /// BMI at the high end of the healthy range
    pub healthy_bmi_high: f64,
}

impl Default for BmiConfig {
    fn default() -> Self {
        Self {
            adult_table: BmiCategoryTable::adult(),
            minor_table: BmiCategoryTable::minor(),
            adult_age_years: age_brackets::ADULT_AGE_YEARS,
            older_adult_age_years: age_brackets::OLDER_ADULT_AGE_YEARS,
            healthy_bmi_low: bmi::HEALTHY_LOW,
            healthy_bmi_high: bmi::HEALTHY_HIGH,
        }
    }
}

impl BmiConfig {
    /// Table for the given age; unknown age reads as adult
    #[must_use]
    pub fn table_for_age(&self, age_years: Option<u32>) -> &BmiCategoryTable {
        match age_years {
            Some(age) if age < self.adult_age_years => &self.minor_table,
            _ => &self.adult_table,
        }
    }

    /// Whether `age_years` falls in the minor bracket
    #[must_use]
    pub fn is_minor(&self, age_years: u32) -> bool {
        age_years < self.adult_age_years
    }

    /// Validate both tables and the healthy range
    ///
    /// # Errors
    ///
    /// Returns an error if a table is malformed or the healthy range is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.adult_table.validate()?;
        self.minor_table.validate()?;

        if !(self.healthy_bmi_low.is_finite() && self.healthy_bmi_low > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "healthy_bmi_low must be positive",
            ));
        }
        if !self.healthy_bmi_high.is_finite() || self.healthy_bmi_low >= self.healthy_bmi_high {
            return Err(ConfigError::InvalidRange(
                "healthy_bmi_low must be < healthy_bmi_high",
            ));
        }
        if self.adult_age_years >= self.older_adult_age_years {
            return Err(ConfigError::InvalidRange(
                "adult_age_years must be < older_adult_age_years",
            ));
        }
        Ok(())
    }
}

// ABOUTME: Reference thresholds for body-mass classification and healthy ranges
// ABOUTME: WHO adult BMI cut-points and the age brackets that select a category table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Physiological constants based on public-health guidelines
//!
//! These are the defaults behind [`crate::config::intelligence::BmiConfig`];
//! deployments override them through configuration, never by editing the
//! classification code.

/// Adult BMI cut-points
///
/// References:
/// - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
///   WHO Technical Report Series 894.
/// - <https://www.who.int/europe/news-room/fact-sheets/item/a-healthy-lifestyle---who-recommendations>
pub mod bmi {
    /// Below this value: underweight
    pub const UNDERWEIGHT_UPPER: f64 = 18.5;
    /// Below this value: normal weight
    pub const NORMAL_UPPER: f64 = 25.0;
    /// Below this value: overweight (pre-obese)
    pub const OVERWEIGHT_UPPER: f64 = 30.0;
    /// Below this value: obesity class I
    pub const OBESITY_I_UPPER: f64 = 35.0;
    /// Below this value: obesity class II; at or above it: class III
    pub const OBESITY_II_UPPER: f64 = 40.0;

    /// Lowest BMI of the healthy weight range
    pub const HEALTHY_LOW: f64 = 18.5;
    /// Highest BMI of the healthy weight range, as quoted to users
    pub const HEALTHY_HIGH: f64 = 24.9;
}

/// Age brackets that change how a BMI is read
pub mod age_brackets {
    /// First age at which adult cut-points apply
    pub const ADULT_AGE_YEARS: u32 = 18;
    /// Age from which the older-adult qualifier is added
    ///
    /// Reference: Winter, J.E. et al. (2014). BMI and all-cause mortality in older adults.
    /// *American Journal of Clinical Nutrition*, 99(4), 875-890.
    pub const OLDER_ADULT_AGE_YEARS: u32 = 65;
}

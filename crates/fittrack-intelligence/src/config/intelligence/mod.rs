// ABOUTME: Intelligence module configuration for derived fitness metric computation
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `bmi` - Category tables per age bracket and healthy-range bounds
//! - `trend` - Metric polarity, tracked metric sets and stability tolerance
//! - `aggregation` - Volume policy and default time window
//!
//! Values come from [`Default`], then an optional JSON file, then
//! `FITTRACK_*` environment variables, and are validated last.

pub mod aggregation;
pub mod bmi;
pub mod error;
pub mod trend;

pub use aggregation::AggregationConfig;
pub use bmi::{BmiBand, BmiCategoryTable, BmiConfig};
pub use error::ConfigError;
pub use trend::TrendAnalysisConfig;

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntelligenceConfig {
    /// BMI classification and healthy range
    pub bmi: BmiConfig,
    /// Trend classification
    pub trend: TrendAnalysisConfig,
    /// Aggregation and volume policy
    pub aggregation: AggregationConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file, then apply environment overrides
    ///
    /// Sections missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or validation fails
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::Parse(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "Loaded intelligence config file");

        let config = config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bmi.validate()?;
        self.trend.validate()?;
        self.aggregation.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // BMI overrides
        Self::apply_env_var("FITTRACK_BMI_HEALTHY_LOW", &mut self.bmi.healthy_bmi_low)?;
        Self::apply_env_var("FITTRACK_BMI_HEALTHY_HIGH", &mut self.bmi.healthy_bmi_high)?;
        Self::apply_env_var("FITTRACK_BMI_ADULT_AGE", &mut self.bmi.adult_age_years)?;
        Self::apply_env_var(
            "FITTRACK_BMI_OLDER_ADULT_AGE",
            &mut self.bmi.older_adult_age_years,
        )?;

        // Trend overrides
        Self::apply_env_var(
            "FITTRACK_TREND_STABLE_TOLERANCE",
            &mut self.trend.stable_tolerance,
        )?;
        Self::apply_env_var("FITTRACK_TREND_WINDOW", &mut self.trend.baseline_window)?;

        // Aggregation overrides
        Self::apply_env_var(
            "FITTRACK_VOLUME_POLICY",
            &mut self.aggregation.volume_policy,
        )?;
        Self::apply_env_var(
            "FITTRACK_AGGREGATION_WINDOW_DAYS",
            &mut self.aggregation.default_window_days,
        )?;

        Ok(self)
    }
}

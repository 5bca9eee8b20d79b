// ABOUTME: Aggregation configuration for volume policy and default time windows
// ABOUTME: Chooses whether incomplete strength entries count toward training volume
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use crate::aggregation::VolumePolicy;
use serde::{Deserialize, Serialize};

/// Aggregation Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// How samples missing weight, reps or sets contribute to volume
    pub volume_policy: VolumePolicy,
    /// Window used by `last_days` filters when the caller gives none
    pub default_window_days: u32,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            volume_policy: VolumePolicy::ExcludeIncomplete,
            default_window_days: 30,
        }
    }
}

impl AggregationConfig {
    /// Validate the default window
    ///
    /// # Errors
    ///
    /// Returns an error if the window is zero days
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_window_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_window_days must be at least 1",
            ));
        }
        Ok(())
    }
}

//! Top-level fatigue engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    AnalysisConfig, BurnoutModel, DatasetConfig, FatigueAlertConfig, ObservabilityConfig,
    RecoveryModel,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Loaded once at startup and never mutated afterwards. The burnout and recovery
/// models are handed to the prediction engine by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FatigueConfig {
    pub dataset: DatasetConfig,
    pub analysis: AnalysisConfig,
    pub burnout: BurnoutModel,
    pub recovery: RecoveryModel,
    pub fatigue_alerts: FatigueAlertConfig,
    pub observability: ObservabilityConfig,
}

impl FatigueConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: FatigueConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing and embedding).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: FatigueConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.dataset;
        if !(d.spike_threshold_pct.is_finite() && d.spike_threshold_pct > 0.0) {
            return Err(validation("dataset.spike_threshold_pct", "must be greater than 0"));
        }
        if !(0.0..0.5).contains(&d.week_tolerance) {
            return Err(validation("dataset.week_tolerance", "must be in [0.0, 0.5)"));
        }

        let a = &self.analysis;
        if a.quantile_bands < 2 {
            return Err(validation("analysis.quantile_bands", "must be at least 2"));
        }
        if a.min_band_samples == 0 {
            return Err(validation("analysis.min_band_samples", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&a.insight_min_difference) {
            return Err(validation(
                "analysis.insight_min_difference",
                "must be between 0.0 and 1.0",
            ));
        }
        if a.min_correlation_pairs < 2 {
            return Err(validation("analysis.min_correlation_pairs", "must be at least 2"));
        }

        self.burnout.validate()?;
        self.recovery.validate()?;

        let f = &self.fatigue_alerts;
        if !f.frequency_threshold.is_finite() || !f.ctr_decline_threshold_pct.is_finite() {
            return Err(validation(
                "fatigue_alerts",
                "frequency_threshold and ctr_decline_threshold_pct must be finite",
            ));
        }
        if !(f.urgent_multiplier.is_finite() && f.urgent_multiplier >= 1.0) {
            return Err(validation(
                "fatigue_alerts.urgent_multiplier",
                "must be a finite number of at least 1.0",
            ));
        }
        Ok(())
    }
}

fn validation(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds for the creative-fatigue alert rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FatigueAlertConfig {
    /// Frequency above which the audience is considered saturated.
    pub frequency_threshold: f64,
    /// Week-over-week CTR change (percent, negative) below which the creative is fatigued.
    pub ctr_decline_threshold_pct: f64,
    /// Factor applied to both thresholds to escalate to an urgent replacement.
    pub urgent_multiplier: f64,
}

impl Default for FatigueAlertConfig {
    fn default() -> Self {
        Self {
            frequency_threshold: defaults::DEFAULT_FATIGUE_FREQUENCY_THRESHOLD,
            ctr_decline_threshold_pct: defaults::DEFAULT_FATIGUE_CTR_DECLINE_PCT,
            urgent_multiplier: defaults::DEFAULT_FATIGUE_URGENT_MULTIPLIER,
        }
    }
}

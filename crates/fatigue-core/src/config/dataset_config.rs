use serde::{Deserialize, Serialize};

use super::defaults;

/// Lead-lag dataset construction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Eligible feature rows an account needs before any dataset is built.
    pub min_sample_rows: usize,
    /// Cost-per-result increase (percent) that counts as a spike.
    pub spike_threshold_pct: f64,
    /// Relative tolerance applied to the 7- and 14-day spacing checks.
    pub week_tolerance: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            min_sample_rows: defaults::DEFAULT_MIN_SAMPLE_ROWS,
            spike_threshold_pct: defaults::DEFAULT_SPIKE_THRESHOLD_PCT,
            week_tolerance: defaults::DEFAULT_WEEK_TOLERANCE,
        }
    }
}

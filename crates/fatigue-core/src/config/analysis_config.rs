use serde::{Deserialize, Serialize};

use super::defaults;

/// Quantile, insight, and correlation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of equal-probability bands per metric.
    pub quantile_bands: usize,
    /// Non-null observations a metric needs before it is banded.
    pub min_band_samples: usize,
    /// Minimum |Q_max − Q1| 2-week spike-rate gap that produces an insight.
    pub insight_min_difference: f64,
    /// Paired observations required before a correlation is reported.
    pub min_correlation_pairs: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            quantile_bands: defaults::DEFAULT_QUANTILE_BANDS,
            min_band_samples: defaults::DEFAULT_MIN_BAND_SAMPLES,
            insight_min_difference: defaults::DEFAULT_INSIGHT_MIN_DIFFERENCE,
            min_correlation_pairs: defaults::DEFAULT_MIN_CORRELATION_PAIRS,
        }
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::LeadingMetric;

/// One quantile band of one leading metric and the cost outcomes observed in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantileBand {
    pub metric: LeadingMetric,
    /// 1-based band index (Q1 is the lowest).
    pub band: usize,
    pub lower: f64,
    pub upper: f64,
    pub sample_size: usize,
    /// Mean percent cost change over rows with a known 1-week change.
    pub mean_cpr_change_1w: Option<f64>,
    pub mean_cpr_change_2w: Option<f64>,
    /// Spiked rows divided by `sample_size`.
    pub spike_rate_1w: f64,
    pub spike_rate_2w: f64,
}

/// Bands per metric, lowest band first. Metrics without enough data are absent.
pub type QuantileAnalysis = BTreeMap<LeadingMetric, Vec<QuantileBand>>;

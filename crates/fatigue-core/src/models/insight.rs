use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::LeadingMetric;

/// Whether spikes become more likely as the metric rises or as it falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriggerDirection {
    Increase,
    Decrease,
}

impl TriggerDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

/// A threshold on a leading metric past which 2-week cost spikes become notably
/// more frequent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriggerInsight {
    pub metric: LeadingMetric,
    pub direction: TriggerDirection,
    pub threshold: f64,
    /// |spike rate(Q_max) − spike rate(Q1)| at the 2-week horizon, in [0, 1].
    pub predictive_power: f64,
    pub recommendation: String,
    /// 2-week spike rate of the band on the triggering side of the threshold.
    pub trigger_spike_rate: f64,
    /// Mean 2-week cost change in that band.
    pub trigger_mean_cpr_change: Option<f64>,
    pub trigger_sample_size: usize,
}

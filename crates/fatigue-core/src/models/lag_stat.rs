use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of a persisted lag-dependency statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionType {
    Recovery,
    Trigger,
}

impl PredictionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recovery => "recovery",
            Self::Trigger => "trigger",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "recovery" => Some(Self::Recovery),
            "trigger" => Some(Self::Trigger),
            _ => None,
        }
    }
}

/// Row of the lag-dependency statistics store.
///
/// Unique per `(account_id, result_family, metric_name)`; writes are upserts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LagDependencyStat {
    pub account_id: String,
    /// Conversion family the costs are measured in (e.g. "leads", "purchases").
    pub result_family: String,
    pub metric_name: String,
    pub prediction_type: PredictionType,
    pub avg_cpr_growth_when_triggered: Option<f64>,
    pub trigger_frequency: f64,
    pub predictive_power: f64,
    pub recommended_threshold: Option<f64>,
    pub time_lag_weeks: u32,
    pub sample_size: u32,
    pub computed_at: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{
    FatigueAlert, MetricCorrelation, PersistOutcome, PredictionResult, QuantileAnalysis,
    RecoveryPrediction, TriggerInsight,
};

/// Account-wide lead-lag analysis from a single dataset build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountAnalysis {
    pub account_id: String,
    /// Number of lead-lag rows; 0 when the account had too little data.
    pub dataset_size: usize,
    pub quantiles: QuantileAnalysis,
    /// Sorted by predictive power, strongest first.
    pub insights: Vec<TriggerInsight>,
    /// Sorted by |2-week correlation|, strongest first.
    pub correlations: Vec<MetricCorrelation>,
}

impl AccountAnalysis {
    pub fn is_insufficient(&self) -> bool {
        self.dataset_size == 0
    }
}

/// Combined burnout and recovery bundle for the reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecayRecoveryReport {
    pub account_id: String,
    pub result_family: String,
    pub generated_at: DateTime<Utc>,
    /// Sorted by risk, highest first.
    pub burnout: Vec<PredictionResult>,
    /// Sorted by recovery score, highest first.
    pub recovery: Vec<RecoveryPrediction>,
    pub fatigue_alerts: Vec<FatigueAlert>,
    pub high_risk_count: usize,
    pub likely_recovery_count: usize,
    pub burned_out_count: usize,
    pub recommendations: Vec<String>,
    /// Ads that failed during either batch.
    pub failed_ads: Vec<String>,
    pub persistence: PersistOutcome,
}

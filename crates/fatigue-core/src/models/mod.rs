//! Data model: weekly feature rows in, analysis and prediction structures out.

mod batch;
mod correlation;
mod feature_row;
mod insight;
mod lag_stat;
mod lead_lag;
mod prediction;
mod quantile;
mod report;

pub use batch::{AdFailure, BatchResult, LatestRow, PersistOutcome};
pub use correlation::MetricCorrelation;
pub use feature_row::{pct_change, FeatureRow};
pub use insight::{TriggerDirection, TriggerInsight};
pub use lag_stat::{LagDependencyStat, PredictionType};
pub use lead_lag::{Horizon, LeadLagRow, LeadingMetric};
pub use prediction::{
    AdStatus, FatigueAlert, FatigueRecommendation, PredictionResult, RecoveryPrediction,
    RecoveryTier, RiskDriver, RiskTier,
};
pub use quantile::{QuantileAnalysis, QuantileBand};
pub use report::{AccountAnalysis, DecayRecoveryReport};

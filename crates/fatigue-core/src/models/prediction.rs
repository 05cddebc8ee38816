use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Ordinal burnout risk tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskTier {
    /// Map a bounded score onto a tier using descending cutoffs
    /// `[critical, high, medium]`.
    pub fn from_score(score: f64, cutoffs: &[f64; 3]) -> Self {
        if score >= cutoffs[0] {
            Self::Critical
        } else if score >= cutoffs[1] {
            Self::High
        } else if score >= cutoffs[2] {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// Ordinal recovery likelihood tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RecoveryTier {
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

impl RecoveryTier {
    /// Map a bounded score onto a tier using descending cutoffs
    /// `[very_likely, likely, possible]`.
    pub fn from_score(score: f64, cutoffs: &[f64; 3]) -> Self {
        if score >= cutoffs[0] {
            Self::VeryLikely
        } else if score >= cutoffs[1] {
            Self::Likely
        } else if score >= cutoffs[2] {
            Self::Possible
        } else {
            Self::Unlikely
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unlikely => "unlikely",
            Self::Possible => "possible",
            Self::Likely => "likely",
            Self::VeryLikely => "very_likely",
        }
    }
}

/// Current health of an ad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AdStatus {
    Healthy,
    Degraded,
    BurnedOut,
}

impl AdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::BurnedOut => "burned_out",
        }
    }
}

/// A feature that pushed a score past its alert threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskDriver {
    pub metric: String,
    /// Raw feature value before normalization.
    pub value: f64,
    /// |normalized value × weight|.
    pub contribution: f64,
    pub warning: String,
}

/// Burnout prediction for one ad and week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResult {
    pub ad_id: String,
    pub week_start: NaiveDate,
    /// Risk in [0, 1].
    pub risk_score: f64,
    pub risk_tier: RiskTier,
    /// At most five drivers, largest contribution first.
    pub drivers: Vec<RiskDriver>,
    pub predicted_cpr_change_1w: f64,
    pub predicted_cpr_change_2w: f64,
    /// `min(1, weeks_with_data / confidence_weeks)`.
    pub confidence: f64,
}

/// Recovery prediction for one ad and week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecoveryPrediction {
    pub ad_id: String,
    pub week_start: NaiveDate,
    pub status: AdStatus,
    /// Recovery likelihood in [0, 1]; always 0 for healthy ads.
    pub recovery_score: f64,
    pub recovery_tier: RecoveryTier,
    pub drivers: Vec<RiskDriver>,
    /// Forecast percent cost change; zero or negative.
    pub predicted_cpr_change_1w: f64,
    pub predicted_cpr_change_2w: f64,
    pub confidence: f64,
    /// Weeks of history behind the prediction.
    pub weeks_with_data: u32,
}

/// Suggested action for a fatigued creative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FatigueRecommendation {
    Replace,
    UrgentReplace,
}

/// Audience-fatigue warning raised from the latest week's frequency and CTR trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FatigueAlert {
    pub ad_id: String,
    pub week_start: NaiveDate,
    pub frequency: f64,
    pub ctr_delta_pct: Option<f64>,
    pub recommendation: FatigueRecommendation,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One ad's aggregated metrics for one ISO week, as supplied by the feature store.
///
/// Nullable fields are `None` when the week has no data for them, which is not the
/// same thing as a measured zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureRow {
    pub ad_id: String,
    /// Monday of the ISO week.
    pub week_start: NaiveDate,
    pub spend: f64,
    pub frequency: f64,
    pub ctr: f64,
    pub cpc: f64,
    pub cpm: f64,
    pub reach: u64,
    /// Cost per result.
    pub cpr: Option<f64>,
    /// The ad's reference cost per result from its early, healthy weeks.
    pub baseline_cpr: Option<f64>,
    /// Week-over-week percentage changes.
    pub freq_delta_pct: Option<f64>,
    pub ctr_delta_pct: Option<f64>,
    pub cpc_delta_pct: Option<f64>,
    /// Linear slopes over the trailing window, in metric units per week.
    pub freq_slope: Option<f64>,
    pub ctr_slope: Option<f64>,
    pub reach_growth_rate: Option<f64>,
    pub spend_change_pct: Option<f64>,
    /// Platform ranking scores mapped to roughly −2 (bottom) … +2 (top).
    pub quality_rank_score: Option<f64>,
    pub engagement_rank_score: Option<f64>,
    pub weeks_with_data: u32,
    /// Rows failing this gate had too few conversions for stable ratios and are
    /// excluded from all analysis.
    pub min_results_met: bool,
}

impl FeatureRow {
    /// Cost-per-result change versus the ad's baseline, in percent.
    pub fn cpr_delta_pct(&self) -> Option<f64> {
        pct_change(self.baseline_cpr?, self.cpr?)
    }
}

/// `(later − earlier) / earlier × 100`, or `None` when `earlier` is not a positive
/// finite number.
pub fn pct_change(earlier: f64, later: f64) -> Option<f64> {
    if earlier.is_finite() && earlier > 0.0 && later.is_finite() {
        Some((later - earlier) / earlier * 100.0)
    } else {
        None
    }
}

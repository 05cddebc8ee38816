//! Rule-based ad health classification. Gates recovery prediction.

use fatigue_core::models::{AdStatus, FeatureRow};

/// Cost per result above baseline (percent) beyond which an ad is burned out.
const BURNED_OUT_CPR_DELTA: f64 = 30.0;
/// Week-over-week CTR change (percent) below which an ad is burned out.
const BURNED_OUT_CTR_DELTA: f64 = -20.0;
const DEGRADED_CPR_DELTA: f64 = 15.0;
const DEGRADED_CTR_DELTA: f64 = -10.0;
const DEGRADED_FREQ_DELTA: f64 = 30.0;

/// The three signals the classifier reads. A missing signal never satisfies a rule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatusSignals {
    pub cpr_delta_pct: Option<f64>,
    pub ctr_delta_pct: Option<f64>,
    pub freq_delta_pct: Option<f64>,
}

impl StatusSignals {
    /// Cost change versus baseline, plus the row's week-over-week CTR and frequency
    /// deltas.
    pub fn from_row(row: &FeatureRow) -> Self {
        Self {
            cpr_delta_pct: row.cpr_delta_pct(),
            ctr_delta_pct: row.ctr_delta_pct,
            freq_delta_pct: row.freq_delta_pct,
        }
    }
}

pub fn classify(signals: &StatusSignals) -> AdStatus {
    let above = |v: Option<f64>, t: f64| v.is_some_and(|v| v > t);
    let below = |v: Option<f64>, t: f64| v.is_some_and(|v| v < t);

    if above(signals.cpr_delta_pct, BURNED_OUT_CPR_DELTA)
        && below(signals.ctr_delta_pct, BURNED_OUT_CTR_DELTA)
    {
        AdStatus::BurnedOut
    } else if above(signals.cpr_delta_pct, DEGRADED_CPR_DELTA)
        || below(signals.ctr_delta_pct, DEGRADED_CTR_DELTA)
        || above(signals.freq_delta_pct, DEGRADED_FREQ_DELTA)
    {
        AdStatus::Degraded
    } else {
        AdStatus::Healthy
    }
}

pub fn classify_row(row: &FeatureRow) -> AdStatus {
    classify(&StatusSignals::from_row(row))
}

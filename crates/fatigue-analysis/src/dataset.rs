//! Lead-lag dataset builder.
//!
//! Pairs each ad's week t with weeks t+1 and t+2, but only when the three weeks are
//! actually consecutive. A paused ad resumed weeks later must not produce a pair
//! across the gap.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use fatigue_core::config::DatasetConfig;
use fatigue_core::constants::DAYS_PER_WEEK;
use fatigue_core::models::{pct_change, FeatureRow, LeadLagRow};

/// Build lead-lag rows from an account's feature rows.
///
/// Rows failing the minimum-results gate are ignored. Returns an empty vector when
/// fewer than `min_sample_rows` eligible rows remain; callers treat that as
/// insufficient data.
pub fn build_lead_lag_rows(rows: &[FeatureRow], config: &DatasetConfig) -> Vec<LeadLagRow> {
    let eligible: Vec<&FeatureRow> = rows.iter().filter(|r| r.min_results_met).collect();
    if eligible.len() < config.min_sample_rows {
        return Vec::new();
    }

    let mut by_ad: BTreeMap<&str, Vec<&FeatureRow>> = BTreeMap::new();
    for row in eligible {
        by_ad.entry(row.ad_id.as_str()).or_default().push(row);
    }

    let mut out = Vec::new();
    for (_, mut series) in by_ad {
        series.sort_by_key(|r| r.week_start);
        for window in series.windows(3) {
            let (t0, t1, t2) = (window[0], window[1], window[2]);
            if !spaced(t0.week_start, t1.week_start, 1.0, config.week_tolerance)
                || !spaced(t0.week_start, t2.week_start, 2.0, config.week_tolerance)
            {
                continue;
            }
            out.push(lead_lag_row(t0, t1, t2, config.spike_threshold_pct));
        }
    }
    out
}

/// True when `later` is `weeks` weeks after `earlier`, within a relative tolerance.
fn spaced(earlier: NaiveDate, later: NaiveDate, weeks: f64, tolerance: f64) -> bool {
    let expected = weeks * DAYS_PER_WEEK;
    let actual = (later - earlier).num_days() as f64;
    (actual - expected).abs() <= expected * tolerance
}

fn lead_lag_row(t0: &FeatureRow, t1: &FeatureRow, t2: &FeatureRow, spike_pct: f64) -> LeadLagRow {
    let change = |later: &FeatureRow| match (t0.cpr, later.cpr) {
        (Some(a), Some(b)) => pct_change(a, b),
        _ => None,
    };
    let cpr_change_1w = change(t1);
    let cpr_change_2w = change(t2);

    LeadLagRow {
        ad_id: t0.ad_id.clone(),
        week_start: t0.week_start,
        freq_t: t0.frequency,
        freq_delta_t: t0.freq_delta_pct,
        freq_slope_t: t0.freq_slope,
        ctr_t: t0.ctr,
        ctr_delta_t: t0.ctr_delta_pct,
        ctr_slope_t: t0.ctr_slope,
        cpc_t: t0.cpc,
        cpc_delta_t: t0.cpc_delta_pct,
        cpm_t: t0.cpm,
        reach_growth_t: t0.reach_growth_rate,
        spend_change_t: t0.spend_change_pct,
        cpr_t: t0.cpr,
        cpr_change_1w,
        cpr_change_2w,
        spike_1w: cpr_change_1w.is_some_and(|c| c >= spike_pct),
        spike_2w: cpr_change_2w.is_some_and(|c| c >= spike_pct),
    }
}

//! Creative-fatigue alerts from the latest week's frequency and CTR trend.

use fatigue_core::config::FatigueAlertConfig;
use fatigue_core::models::{FatigueAlert, FatigueRecommendation, FeatureRow};

/// Alert for one row, or `None` when the creative is not fatigued.
///
/// Fatigued when frequency exceeds the threshold or CTR fell more than the decline
/// threshold. Past either threshold scaled by `urgent_multiplier` the recommendation
/// escalates to an urgent replacement.
pub fn detect(row: &FeatureRow, config: &FatigueAlertConfig) -> Option<FatigueAlert> {
    let freq_over = |limit: f64| row.frequency > limit;
    let ctr_under = |limit: f64| row.ctr_delta_pct.is_some_and(|d| d < limit);

    if !freq_over(config.frequency_threshold) && !ctr_under(config.ctr_decline_threshold_pct) {
        return None;
    }
    let urgent = freq_over(config.frequency_threshold * config.urgent_multiplier)
        || ctr_under(config.ctr_decline_threshold_pct * config.urgent_multiplier);

    Some(FatigueAlert {
        ad_id: row.ad_id.clone(),
        week_start: row.week_start,
        frequency: row.frequency,
        ctr_delta_pct: row.ctr_delta_pct,
        recommendation: if urgent {
            FatigueRecommendation::UrgentReplace
        } else {
            FatigueRecommendation::Replace
        },
    })
}

/// Alerts over a set of rows, urgent first, then by frequency descending.
pub fn detect_all(rows: &[FeatureRow], config: &FatigueAlertConfig) -> Vec<FatigueAlert> {
    let mut alerts: Vec<FatigueAlert> = rows.iter().filter_map(|r| detect(r, config)).collect();
    alerts.sort_by(|a, b| {
        let urgency = |x: &FatigueAlert| x.recommendation == FatigueRecommendation::UrgentReplace;
        urgency(b)
            .cmp(&urgency(a))
            .then_with(|| b.frequency.total_cmp(&a.frequency))
    });
    alerts
}

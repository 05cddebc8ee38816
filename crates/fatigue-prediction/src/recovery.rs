//! Recovery predictor: likelihood that a degraded or burned-out ad's cost per result
//! comes back down.

use fatigue_core::config::RecoveryModel;
use fatigue_core::constants::PERCENT_DIVISOR;
use fatigue_core::models::{AdStatus, FeatureRow, RecoveryPrediction, RecoveryTier};

use crate::burnout::skip_reason;
use crate::scoring::{self, ScoredFeature};

/// Score one feature row for an ad in `status`.
///
/// Healthy ads have nothing to recover from: score 0, tier unlikely, no drivers,
/// zero forecasts. `None` when the row fails its gate or has too little history.
pub fn predict_row(row: &FeatureRow, status: AdStatus, model: &RecoveryModel) -> Option<RecoveryPrediction> {
    if skip_reason(row, model.min_weeks).is_some() {
        return None;
    }
    let confidence = scoring::confidence(row.weeks_with_data, model.confidence_weeks);

    if status == AdStatus::Healthy {
        return Some(RecoveryPrediction {
            ad_id: row.ad_id.clone(),
            week_start: row.week_start,
            status,
            recovery_score: 0.0,
            recovery_tier: RecoveryTier::Unlikely,
            drivers: Vec::new(),
            predicted_cpr_change_1w: 0.0,
            predicted_cpr_change_2w: 0.0,
            confidence,
            weeks_with_data: row.weeks_with_data,
        });
    }

    let w = &model.weights;
    let feature = |name, value, divisor, weight| ScoredFeature {
        name,
        value,
        divisor,
        weight,
    };
    let rank = model.rank_score_divisor;
    let features = [
        feature("freq_delta_pct", row.freq_delta_pct, PERCENT_DIVISOR, w.freq_delta_pct),
        feature("ctr_delta_pct", row.ctr_delta_pct, PERCENT_DIVISOR, w.ctr_delta_pct),
        feature("cpc_delta_pct", row.cpc_delta_pct, PERCENT_DIVISOR, w.cpc_delta_pct),
        feature("freq_slope", row.freq_slope, 1.0, w.freq_slope),
        feature("ctr_slope", row.ctr_slope, 1.0, w.ctr_slope),
        feature("reach_growth_rate", row.reach_growth_rate, PERCENT_DIVISOR, w.reach_growth_rate),
        feature("spend_change_pct", row.spend_change_pct, PERCENT_DIVISOR, w.spend_change_pct),
        feature("quality_rank_score", row.quality_rank_score, rank, w.quality_rank_score),
        feature("engagement_rank_score", row.engagement_rank_score, rank, w.engagement_rank_score),
    ];

    let scored = scoring::accumulate(&features, warning);
    let recovery_score = scoring::bounded(scored.raw, model.offset, model.scale);

    Some(RecoveryPrediction {
        ad_id: row.ad_id.clone(),
        week_start: row.week_start,
        status,
        recovery_score,
        recovery_tier: RecoveryTier::from_score(recovery_score, &model.tier_cutoffs),
        drivers: scored.drivers,
        // Recovery means cost going down.
        predicted_cpr_change_1w: -(recovery_score * model.forecast_1w),
        predicted_cpr_change_2w: -(recovery_score * model.forecast_2w),
        confidence,
        weeks_with_data: row.weeks_with_data,
    })
}

fn warning(metric: &str, v: f64) -> String {
    match metric {
        "freq_delta_pct" => format!("Частота снизилась на {:.1}%, аудитория отдохнула", v.abs()),
        "ctr_delta_pct" => format!("CTR вырос на {v:.1}% за неделю"),
        "cpc_delta_pct" => format!("CPC снизился на {:.1}%", v.abs()),
        "freq_slope" => format!("Частота устойчиво снижается ({v:+.3} в неделю)"),
        "ctr_slope" => format!("CTR устойчиво растёт ({v:+.3} в неделю)"),
        "reach_growth_rate" => format!("Охват снова растёт ({v:+.1}%)"),
        "spend_change_pct" => format!("Бюджет снижен на {:.1}%", v.abs()),
        "quality_rank_score" => format!("Рейтинг качества выше среднего ({v:+.1})"),
        "engagement_rank_score" => format!("Рейтинг вовлечённости выше среднего ({v:+.1})"),
        other => format!("{other}: {v:.2}"),
    }
}

//! Burnout predictor: risk that an ad's cost per result is about to rise.

use fatigue_core::config::BurnoutModel;
use fatigue_core::constants::PERCENT_DIVISOR;
use fatigue_core::models::{FeatureRow, PredictionResult, RiskTier};

use crate::scoring::{self, ScoredFeature};

/// Why a row was not scored, or `None` when it can be.
pub fn skip_reason(row: &FeatureRow, min_weeks: u32) -> Option<&'static str> {
    if !row.min_results_met {
        Some("min_results_not_met")
    } else if row.weeks_with_data < min_weeks {
        Some("insufficient_history")
    } else {
        None
    }
}

/// Score one feature row. `None` when the row fails its gate or has too little
/// history.
pub fn predict_row(row: &FeatureRow, model: &BurnoutModel) -> Option<PredictionResult> {
    if skip_reason(row, model.min_weeks).is_some() {
        return None;
    }

    let w = &model.weights;
    let pct = |name, value, weight| ScoredFeature {
        name,
        value,
        divisor: PERCENT_DIVISOR,
        weight,
    };
    let raw = |name, value, weight| ScoredFeature {
        name,
        value,
        divisor: 1.0,
        weight,
    };
    let features = [
        pct("freq_delta_pct", row.freq_delta_pct, w.freq_delta_pct),
        pct("ctr_delta_pct", row.ctr_delta_pct, w.ctr_delta_pct),
        pct("cpc_delta_pct", row.cpc_delta_pct, w.cpc_delta_pct),
        raw("freq_slope", row.freq_slope, w.freq_slope),
        raw("ctr_slope", row.ctr_slope, w.ctr_slope),
        pct("reach_growth_rate", row.reach_growth_rate, w.reach_growth_rate),
        pct("spend_change_pct", row.spend_change_pct, w.spend_change_pct),
    ];

    let scored = scoring::accumulate(&features, warning);
    let risk_score = scoring::bounded(scored.raw, model.offset, model.scale);

    Some(PredictionResult {
        ad_id: row.ad_id.clone(),
        week_start: row.week_start,
        risk_score,
        risk_tier: RiskTier::from_score(risk_score, &model.tier_cutoffs),
        drivers: scored.drivers,
        predicted_cpr_change_1w: risk_score * model.forecast_1w,
        predicted_cpr_change_2w: risk_score * model.forecast_2w,
        confidence: scoring::confidence(row.weeks_with_data, model.confidence_weeks),
    })
}

fn warning(metric: &str, v: f64) -> String {
    match metric {
        "freq_delta_pct" => format!("Частота выросла на {v:.1}% за неделю"),
        "ctr_delta_pct" => format!("CTR упал на {:.1}% за неделю", v.abs()),
        "cpc_delta_pct" => format!("CPC вырос на {v:.1}% за неделю"),
        "freq_slope" => format!("Частота устойчиво растёт ({v:+.3} в неделю)"),
        "ctr_slope" => format!("CTR устойчиво снижается ({v:+.3} в неделю)"),
        "reach_growth_rate" => format!("Охват сокращается ({v:.1}%)"),
        "spend_change_pct" => format!("Бюджет вырос на {v:.1}%, аудитория выгорает быстрее"),
        other => format!("{other}: {v:.2}"),
    }
}

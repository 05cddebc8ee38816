//! Insight generator: turns Q1/Q_max spike-rate asymmetries into threshold
//! recommendations.

use fatigue_core::config::AnalysisConfig;
use fatigue_core::models::{LeadingMetric, QuantileAnalysis, QuantileBand, TriggerDirection, TriggerInsight};

/// One insight per metric whose 2-week spike rate differs between the lowest and
/// highest band by more than `insight_min_difference`, strongest first.
pub fn generate_insights(analysis: &QuantileAnalysis, config: &AnalysisConfig) -> Vec<TriggerInsight> {
    let mut insights: Vec<TriggerInsight> = analysis
        .iter()
        .filter_map(|(&metric, bands)| insight_for(metric, bands, config))
        .collect();
    insights.sort_by(|a, b| b.predictive_power.total_cmp(&a.predictive_power));
    insights
}

fn insight_for(
    metric: LeadingMetric,
    bands: &[QuantileBand],
    config: &AnalysisConfig,
) -> Option<TriggerInsight> {
    if bands.len() < 2 {
        return None;
    }
    let low = bands.first()?;
    let high = bands.last()?;
    let difference = high.spike_rate_2w - low.spike_rate_2w;
    if difference.abs() <= config.insight_min_difference {
        return None;
    }

    let (direction, trigger) = if difference > 0.0 {
        (TriggerDirection::Increase, high)
    } else {
        (TriggerDirection::Decrease, low)
    };
    let threshold = match direction {
        TriggerDirection::Increase => high.lower,
        TriggerDirection::Decrease => low.upper,
    };

    Some(TriggerInsight {
        metric,
        direction,
        threshold,
        predictive_power: difference.abs().min(1.0),
        recommendation: recommendation(metric, direction, threshold),
        trigger_spike_rate: trigger.spike_rate_2w,
        trigger_mean_cpr_change: trigger.mean_cpr_change_2w,
        trigger_sample_size: trigger.sample_size,
    })
}

/// Templated recommendation for a metric moving in the triggering direction.
pub fn recommendation(metric: LeadingMetric, direction: TriggerDirection, threshold: f64) -> String {
    use LeadingMetric as M;
    use TriggerDirection::{Decrease, Increase};

    match (metric, direction) {
        (M::FreqT, Increase) => format!(
            "Частота выше {threshold:.2}: аудитория перегрета, расширьте таргетинг или смените креатив"
        ),
        (M::FreqDeltaT, Increase) => format!(
            "Рост частоты больше {threshold:.1}% за неделю предвещает рост цены результата: готовьте замену креатива"
        ),
        (M::FreqSlopeT, Increase) => format!(
            "Наклон частоты выше {threshold:.3} в неделю: частота устойчиво растёт"
        ),
        (M::CtrT, Decrease) => format!(
            "CTR ниже {threshold:.2}%: проверьте релевантность креатива"
        ),
        (M::CtrDeltaT, Decrease) => format!(
            "Падение CTR сильнее {threshold:.1}% за неделю: креатив выгорает"
        ),
        (M::CtrSlopeT, Decrease) => format!(
            "Наклон CTR ниже {threshold:.3} в неделю: CTR устойчиво снижается"
        ),
        (M::CpcT, Increase) => format!(
            "CPC выше {threshold:.2}: клики дорожают, пересмотрите ставки"
        ),
        (M::CpcDeltaT, Increase) => format!(
            "Рост CPC больше {threshold:.1}% за неделю: ожидайте рост цены результата"
        ),
        (M::CpmT, Increase) => format!(
            "CPM выше {threshold:.2}: аукцион дорожает, пересмотрите аудитории"
        ),
        (M::ReachGrowthT, Decrease) => format!(
            "Прирост охвата ниже {threshold:.1}%: аудитория исчерпана"
        ),
        _ => format!("{metric} threshold: {threshold:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_direction_falls_back_to_generic_text() {
        let text = recommendation(LeadingMetric::CtrT, TriggerDirection::Increase, 1.234);
        assert_eq!(text, "ctr_t threshold: 1.23");
    }

    #[test]
    fn mapped_template_embeds_threshold() {
        let text = recommendation(LeadingMetric::FreqDeltaT, TriggerDirection::Increase, 4.0);
        assert!(text.contains("4.0%"));
        assert!(text.contains("частоты"));
    }
}

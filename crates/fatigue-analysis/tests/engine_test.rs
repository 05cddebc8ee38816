use fatigue_analysis::AnalysisEngine;
use fatigue_core::models::{LeadingMetric, PredictionType, TriggerDirection};
use fatigue_core::models::FeatureRow;
use fatigue_core::traits::ILagStatsStore;
use test_fixtures::{week, weekly_series, FeatureRowBuilder, InMemoryStore};

/// Week-over-week frequency deltas of weeks 1..=10 (index 0 is week 1).
const FREQ_DELTAS: [f64; 10] = [-5.0, 10.0, 25.0, -10.0, 0.0, -8.0, 2.0, -3.0, 1.0, -2.0];

/// 5 ads × 10 weeks. Frequency jumps 25% in week 3 and cost per result rises 22% the
/// week after, staying there.
fn surge_account() -> Vec<FeatureRow> {
    let mut rows = Vec::new();
    for ad in 0..5 {
        for (i, delta) in FREQ_DELTAS.iter().enumerate() {
            let cpr = if i < 3 { 10.0 } else { 12.2 };
            rows.push(
                FeatureRowBuilder::new(&format!("ad-{ad}"), week(i as i64))
                    .freq_delta(*delta)
                    .cpr(Some(cpr))
                    .weeks_with_data(i as u32 + 1)
                    .build(),
            );
        }
    }
    rows
}

// ── Scenario: frequency surge precedes cost spike ──

#[test]
fn frequency_surge_produces_increase_insight() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", surge_account()));
    let analysis = engine.analyze_account("acc").unwrap();

    assert_eq!(analysis.dataset_size, 40);
    let bands = &analysis.quantiles[&LeadingMetric::FreqDeltaT];
    assert_eq!(bands.len(), 4);
    let q1 = bands.first().unwrap();
    let q4 = bands.last().unwrap();
    assert!(q4.spike_rate_2w > q1.spike_rate_2w + 0.5);

    assert!(!analysis.insights.is_empty());
    let top = &analysis.insights[0];
    assert_eq!(top.metric, LeadingMetric::FreqDeltaT);
    assert_eq!(top.direction, TriggerDirection::Increase);
    assert!((top.threshold - 4.0).abs() < 1e-9);
    assert!((top.predictive_power - 1.0).abs() < 1e-9);
    assert!(top.recommendation.contains("4.0%"));
}

#[test]
fn insights_sorted_by_predictive_power() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", surge_account()));
    let insights = engine.trigger_insights("acc").unwrap();
    assert!(insights
        .windows(2)
        .all(|w| w[0].predictive_power >= w[1].predictive_power));
}

#[test]
fn constant_metrics_correlate_to_zero() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", surge_account()));
    let correlations = engine.correlations("acc").unwrap();
    assert_eq!(correlations.len(), 10);
    let freq = correlations
        .iter()
        .find(|c| c.metric == LeadingMetric::FreqT)
        .unwrap();
    assert_eq!(freq.correlation_2w, 0.0);
    assert_eq!(freq.pairs_2w, 40);
}

// ── Insufficient data and failures ──

#[test]
fn small_account_is_insufficient_not_an_error() {
    let rows: Vec<FeatureRow> = (0..3)
        .flat_map(|i| weekly_series(&format!("ad-{i}"), 10))
        .collect();
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", rows));
    let analysis = engine.analyze_account("acc").unwrap();
    assert!(analysis.is_insufficient());
    assert!(analysis.quantiles.is_empty());
    assert!(analysis.insights.is_empty());
    assert!(analysis.correlations.is_empty());
}

#[test]
fn unknown_account_is_insufficient() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::new());
    assert!(engine.build_dataset("nobody").unwrap().is_empty());
}

#[test]
fn store_failure_propagates() {
    let store = InMemoryStore::with_rows("acc", surge_account());
    store.go_offline();
    let engine = AnalysisEngine::with_defaults(store);
    let err = engine.analyze_account("acc").unwrap_err();
    assert!(err.is_store_failure());
}

// ── Insight persistence ──

#[test]
fn persisted_insights_are_trigger_stats() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", surge_account()));
    let insights = engine.trigger_insights("acc").unwrap();
    let stats = InMemoryStore::new();

    let outcome = engine.persist_insights(&stats, "acc", "leads", &insights);
    assert!(outcome.is_complete());
    assert_eq!(outcome.written as usize, insights.len());

    let stored = stats.lag_stats("acc", "leads").unwrap();
    let freq = stored.iter().find(|s| s.metric_name == "freq_delta_t").unwrap();
    assert_eq!(freq.prediction_type, PredictionType::Trigger);
    assert_eq!(freq.time_lag_weeks, 2);
    assert_eq!(freq.recommended_threshold, Some(insights[0].threshold));
    assert_eq!(freq.sample_size, 10);
}

#[test]
fn persist_failures_are_counted_not_raised() {
    let engine = AnalysisEngine::with_defaults(InMemoryStore::with_rows("acc", surge_account()));
    let insights = engine.trigger_insights("acc").unwrap();
    let stats = InMemoryStore::new();
    stats.fail_upserts(true);

    let outcome = engine.persist_insights(&stats, "acc", "leads", &insights);
    assert_eq!(outcome.failed, outcome.attempted);
    assert_eq!(outcome.written, 0);
    assert!(stats.stored_stats().is_empty());
}

use chrono::NaiveDate;
use fatigue_core::config::BurnoutModel;
use fatigue_core::models::{FeatureRow, RiskTier};
use fatigue_prediction::burnout::predict_row;
use fatigue_prediction::PredictionEngine;
use test_fixtures::{load_fixture, week, FeatureRowBuilder, InMemoryStore};

fn eligible(ad: &str) -> FeatureRowBuilder {
    FeatureRowBuilder::new(ad, week(5)).weeks_with_data(6)
}

// ── Scenario: frequency surge on a four-week-old ad ──

#[test]
fn frequency_surge_is_high_risk_with_frequency_driver() {
    let rows: Vec<FeatureRow> = load_fixture("scenarios/single_ad_frequency_surge.json");
    assert_eq!(rows.len(), 4);
    let engine = PredictionEngine::with_defaults(InMemoryStore::with_rows("acc", rows));

    let week4 = NaiveDate::from_ymd_opt(2024, 1, 22).unwrap();
    let prediction = engine
        .predict_burnout("acc", "ad-surge", week4)
        .unwrap()
        .expect("four weeks of eligible data");

    assert!(prediction.risk_tier >= RiskTier::Medium);
    assert_eq!(prediction.risk_tier, RiskTier::High);
    assert!((prediction.risk_score - 0.575).abs() < 1e-9);
    assert!(prediction
        .drivers
        .iter()
        .any(|d| d.warning.contains("Частота")));
    assert_eq!(prediction.confidence, 0.5);
}

#[test]
fn third_week_has_too_little_history() {
    let rows: Vec<FeatureRow> = load_fixture("scenarios/single_ad_frequency_surge.json");
    let engine = PredictionEngine::with_defaults(InMemoryStore::with_rows("acc", rows));
    let week3 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    assert!(engine.predict_burnout("acc", "ad-surge", week3).unwrap().is_none());
}

// ── Gates ──

#[test]
fn missing_row_is_no_prediction() {
    let engine = PredictionEngine::with_defaults(InMemoryStore::new());
    assert!(engine.predict_burnout("acc", "ghost", week(0)).unwrap().is_none());
}

#[test]
fn gated_row_is_no_prediction() {
    let row = eligible("ad").min_results_met(false).freq_delta(80.0).build();
    assert!(predict_row(&row, &BurnoutModel::default()).is_none());
}

#[test]
fn three_weeks_is_not_enough() {
    let row = eligible("ad").weeks_with_data(3).build();
    assert!(predict_row(&row, &BurnoutModel::default()).is_none());
    let row = eligible("ad").weeks_with_data(4).build();
    assert!(predict_row(&row, &BurnoutModel::default()).is_some());
}

// ── Score shape ──

#[test]
fn favorable_extremes_are_low_and_unfavorable_are_critical() {
    let model = BurnoutModel::default();
    let calm = eligible("calm").freq_delta(-100.0).ctr_delta(100.0).build();
    let hot = eligible("hot").freq_delta(100.0).ctr_delta(-100.0).build();
    assert_eq!(predict_row(&calm, &model).unwrap().risk_tier, RiskTier::Low);
    assert_eq!(predict_row(&hot, &model).unwrap().risk_tier, RiskTier::Critical);
}

#[test]
fn all_signals_favorable_clamps_to_zero() {
    let row = eligible("ad")
        .freq_delta(-100.0)
        .ctr_delta(100.0)
        .cpc_delta(-100.0)
        .freq_slope(-1.0)
        .ctr_slope(1.0)
        .reach_growth(100.0)
        .spend_change(-100.0)
        .build();
    let p = predict_row(&row, &BurnoutModel::default()).unwrap();
    assert_eq!(p.risk_score, 0.0);
    assert!(p.drivers.is_empty());
    assert_eq!(p.predicted_cpr_change_2w, 0.0);
}

#[test]
fn all_signals_unfavorable_clamps_to_one_with_five_drivers() {
    let row = eligible("ad")
        .freq_delta(100.0)
        .ctr_delta(-100.0)
        .cpc_delta(100.0)
        .freq_slope(1.0)
        .ctr_slope(-1.0)
        .reach_growth(-100.0)
        .spend_change(100.0)
        .build();
    let p = predict_row(&row, &BurnoutModel::default()).unwrap();
    assert_eq!(p.risk_score, 1.0);
    assert_eq!(p.drivers.len(), 5);
    assert_eq!(p.drivers[0].metric, "freq_delta_pct");
    assert!(p
        .drivers
        .windows(2)
        .all(|w| w[0].contribution >= w[1].contribution));
    assert_eq!(p.predicted_cpr_change_1w, 30.0);
    assert_eq!(p.predicted_cpr_change_2w, 50.0);
}

#[test]
fn no_signals_sits_at_the_offset() {
    let p = predict_row(&eligible("ad").build(), &BurnoutModel::default()).unwrap();
    assert_eq!(p.risk_score, 0.5);
    assert_eq!(p.risk_tier, RiskTier::High);
    assert!(p.drivers.is_empty());
}

#[test]
fn forecasts_scale_linearly_with_risk() {
    let row = eligible("ad").freq_delta(-40.0).build();
    let p = predict_row(&row, &BurnoutModel::default()).unwrap();
    assert!((p.risk_score - 0.4).abs() < 1e-9);
    assert_eq!(p.risk_tier, RiskTier::Medium);
    assert!((p.predicted_cpr_change_1w - 12.0).abs() < 1e-9);
    assert!((p.predicted_cpr_change_2w - 20.0).abs() < 1e-9);
}

#[test]
fn configured_weights_change_the_score() {
    let mut model = BurnoutModel::default();
    model.weights.freq_delta_pct.weight = 0.5;
    let row = eligible("ad").freq_delta(30.0).build();
    let p = predict_row(&row, &model).unwrap();
    assert!((p.risk_score - 0.65).abs() < 1e-9);
}

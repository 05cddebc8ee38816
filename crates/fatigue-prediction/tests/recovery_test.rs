use fatigue_core::config::RecoveryModel;
use fatigue_core::models::{AdStatus, RecoveryTier};
use fatigue_prediction::recovery::predict_row;
use fatigue_prediction::status::classify_row;
use fatigue_prediction::PredictionEngine;
use test_fixtures::{week, FeatureRowBuilder, InMemoryStore};

fn eligible(ad: &str) -> FeatureRowBuilder {
    FeatureRowBuilder::new(ad, week(7)).weeks_with_data(8)
}

// ── Scenario: burned-out ad showing a reversal ──

#[test]
fn burned_out_ad_with_reversal_is_at_least_possible() {
    let burned = eligible("ad")
        .baseline_cpr(Some(10.0))
        .cpr(Some(13.5))
        .ctr_delta(-25.0)
        .build();
    let status = classify_row(&burned);
    assert_eq!(status, AdStatus::BurnedOut);

    let reversal = eligible("ad").ctr_delta(15.0).freq_delta(-15.0).build();
    let p = predict_row(&reversal, status, &RecoveryModel::default()).unwrap();
    assert!(p.recovery_tier >= RecoveryTier::Possible);
    assert!((p.recovery_score - 0.56).abs() < 1e-9);
    assert_eq!(p.recovery_tier, RecoveryTier::Likely);
    assert_eq!(p.status, AdStatus::BurnedOut);
    assert_eq!(p.drivers.len(), 2);
    assert!(p.predicted_cpr_change_1w < 0.0);
    assert!((p.predicted_cpr_change_2w + 0.56 * 25.0).abs() < 1e-9);
    assert_eq!(p.confidence, 1.0);
}

// ── Healthy ads ──

#[test]
fn healthy_ad_scores_zero_whatever_its_features() {
    let row = eligible("ad")
        .ctr_delta(80.0)
        .freq_delta(-80.0)
        .ranks(2.0, 2.0)
        .build();
    let p = predict_row(&row, AdStatus::Healthy, &RecoveryModel::default()).unwrap();
    assert_eq!(p.recovery_score, 0.0);
    assert_eq!(p.recovery_tier, RecoveryTier::Unlikely);
    assert!(p.drivers.is_empty());
    assert_eq!(p.predicted_cpr_change_1w, 0.0);
    assert_eq!(p.predicted_cpr_change_2w, 0.0);
}

#[test]
fn store_backed_prediction_classifies_the_scored_row() {
    let healthy = eligible("ad").ctr_delta(12.0).build();
    let engine = PredictionEngine::with_defaults(InMemoryStore::with_rows("acc", vec![healthy]));
    let p = engine.predict_recovery("acc", "ad", week(7)).unwrap().unwrap();
    assert_eq!(p.status, AdStatus::Healthy);
    assert_eq!(p.recovery_score, 0.0);
}

// ── Features ──

#[test]
fn rank_scores_are_halved_not_divided_by_hundred() {
    let model = RecoveryModel::default();
    let base = predict_row(&eligible("ad").build(), AdStatus::Degraded, &model).unwrap();
    let ranked = predict_row(&eligible("ad").ranks(2.0, 2.0).build(), AdStatus::Degraded, &model).unwrap();
    // 2 / 2 × 0.05 for each rank.
    assert!((ranked.recovery_score - base.recovery_score - 0.10).abs() < 1e-9);
    assert_eq!(ranked.drivers.len(), 2);
    assert!(ranked.drivers.iter().any(|d| d.metric == "quality_rank_score"));
}

#[test]
fn worsening_signals_push_recovery_down() {
    let row = eligible("ad").freq_delta(60.0).ctr_delta(-60.0).build();
    let p = predict_row(&row, AdStatus::Degraded, &RecoveryModel::default()).unwrap();
    assert!((p.recovery_score - 0.26).abs() < 1e-9);
    assert_eq!(p.recovery_tier, RecoveryTier::Unlikely);
    assert!(p.drivers.is_empty());
}

#[test]
fn gates_match_burnout() {
    let model = RecoveryModel::default();
    let young = eligible("ad").weeks_with_data(2).build();
    assert!(predict_row(&young, AdStatus::Degraded, &model).is_none());
    let gated = eligible("ad").min_results_met(false).build();
    assert!(predict_row(&gated, AdStatus::Healthy, &model).is_none());
}

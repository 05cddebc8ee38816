use chrono::NaiveDate;
use fatigue_core::models::*;

fn row() -> FeatureRow {
    FeatureRow {
        ad_id: "ad-1".into(),
        week_start: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        spend: 120.0,
        frequency: 2.1,
        ctr: 1.4,
        cpc: 0.8,
        cpm: 11.0,
        reach: 5400,
        cpr: Some(13.5),
        baseline_cpr: Some(10.0),
        freq_delta_pct: Some(12.0),
        ctr_delta_pct: None,
        cpc_delta_pct: None,
        freq_slope: None,
        ctr_slope: None,
        reach_growth_rate: None,
        spend_change_pct: None,
        quality_rank_score: None,
        engagement_rank_score: None,
        weeks_with_data: 6,
        min_results_met: true,
    }
}

#[test]
fn cpr_delta_is_relative_to_baseline() {
    let delta = row().cpr_delta_pct().unwrap();
    assert!((delta - 35.0).abs() < 1e-9);
}

#[test]
fn cpr_delta_missing_without_baseline() {
    let mut r = row();
    r.baseline_cpr = None;
    assert_eq!(r.cpr_delta_pct(), None);
}

#[test]
fn feature_row_json_tolerates_missing_optionals() {
    let json = r#"{
        "ad_id": "ad-9", "week_start": "2024-01-01",
        "spend": 10.0, "frequency": 1.2, "ctr": 0.9, "cpc": 0.5, "cpm": 7.0,
        "reach": 1000, "weeks_with_data": 1, "min_results_met": false
    }"#;
    let parsed: FeatureRow = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.cpr, None);
    assert_eq!(parsed.freq_delta_pct, None);
    assert!(!parsed.min_results_met);
}

#[test]
fn tiers_are_ordinal() {
    assert!(RiskTier::Critical > RiskTier::High);
    assert!(RiskTier::Medium > RiskTier::Low);
    assert!(RecoveryTier::VeryLikely > RecoveryTier::Likely);
    assert!(RecoveryTier::Possible > RecoveryTier::Unlikely);
}

#[test]
fn tier_cutoffs_are_inclusive() {
    let cutoffs = [0.7, 0.5, 0.3];
    assert_eq!(RiskTier::from_score(0.7, &cutoffs), RiskTier::Critical);
    assert_eq!(RiskTier::from_score(0.69, &cutoffs), RiskTier::High);
    assert_eq!(RiskTier::from_score(0.3, &cutoffs), RiskTier::Medium);
    assert_eq!(RiskTier::from_score(0.0, &cutoffs), RiskTier::Low);
    assert_eq!(RecoveryTier::from_score(0.5, &cutoffs), RecoveryTier::Likely);
    assert_eq!(RecoveryTier::from_score(0.29, &cutoffs), RecoveryTier::Unlikely);
}

#[test]
fn leading_metric_names_match_serde() {
    for metric in LeadingMetric::ALL {
        let json = serde_json::to_string(&metric).unwrap();
        assert_eq!(json, format!("\"{}\"", metric.as_str()));
    }
}

#[test]
fn batch_result_tracks_failures() {
    let mut batch = BatchResult::new(vec![1, 2, 3]);
    assert!(batch.is_clean());
    batch.add_error(
        "ad-3",
        fatigue_core::FatigueError::InvalidInput {
            reason: "bad".into(),
        },
    );
    assert_eq!(batch.error_count(), 1);
    assert_eq!(batch.errors[0].ad_id, "ad-3");
}

#[test]
fn prediction_type_parses_its_own_names() {
    for t in [PredictionType::Recovery, PredictionType::Trigger] {
        assert_eq!(PredictionType::parse(t.as_str()), Some(t));
    }
    assert_eq!(PredictionType::parse("burnout"), None);
}

// ── Properties ──

mod properties {
    use fatigue_core::models::{pct_change, RiskTier};
    use proptest::prelude::*;

    const CUTOFFS: [f64; 3] = [0.7, 0.5, 0.3];

    proptest! {
        #[test]
        fn tier_is_monotone_in_score(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(RiskTier::from_score(lo, &CUTOFFS) <= RiskTier::from_score(hi, &CUTOFFS));
        }

        #[test]
        fn pct_change_needs_a_positive_base(base in -100.0f64..=0.0, later in -100.0f64..100.0) {
            prop_assert_eq!(pct_change(base, later), None);
        }

        #[test]
        fn pct_change_sign_follows_direction(base in 0.01f64..1000.0, later in 0.0f64..1000.0) {
            let change = pct_change(base, later).unwrap();
            prop_assert_eq!(change > 0.0, later > base);
        }
    }
}

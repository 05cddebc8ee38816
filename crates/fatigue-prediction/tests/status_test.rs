use fatigue_core::models::AdStatus;
use fatigue_prediction::status::classify_row;
use fatigue_prediction::{classify, StatusSignals};
use test_fixtures::{week, FeatureRowBuilder};

fn signals(cpr: Option<f64>, ctr: Option<f64>, freq: Option<f64>) -> StatusSignals {
    StatusSignals {
        cpr_delta_pct: cpr,
        ctr_delta_pct: ctr,
        freq_delta_pct: freq,
    }
}

#[test]
fn cost_up_and_ctr_down_is_burned_out() {
    assert_eq!(classify(&signals(Some(35.0), Some(-25.0), None)), AdStatus::BurnedOut);
}

#[test]
fn one_burnout_signal_alone_is_degraded() {
    assert_eq!(classify(&signals(Some(35.0), Some(-5.0), None)), AdStatus::Degraded);
    assert_eq!(classify(&signals(Some(5.0), Some(-25.0), None)), AdStatus::Degraded);
}

#[test]
fn each_degraded_rule_fires_on_its_own() {
    assert_eq!(classify(&signals(Some(16.0), None, None)), AdStatus::Degraded);
    assert_eq!(classify(&signals(None, Some(-11.0), None)), AdStatus::Degraded);
    assert_eq!(classify(&signals(None, None, Some(31.0))), AdStatus::Degraded);
}

#[test]
fn thresholds_are_strict() {
    assert_eq!(
        classify(&signals(Some(15.0), Some(-10.0), Some(30.0))),
        AdStatus::Healthy
    );
}

#[test]
fn missing_signals_are_healthy() {
    assert_eq!(classify(&StatusSignals::default()), AdStatus::Healthy);
}

#[test]
fn row_cost_delta_is_measured_against_baseline() {
    let row = FeatureRowBuilder::new("ad", week(0))
        .baseline_cpr(Some(10.0))
        .cpr(Some(13.5))
        .ctr_delta(-25.0)
        .build();
    assert_eq!(classify_row(&row), AdStatus::BurnedOut);

    let no_baseline = FeatureRowBuilder::new("ad", week(0))
        .baseline_cpr(None)
        .cpr(Some(13.5))
        .ctr_delta(-25.0)
        .build();
    assert_eq!(classify_row(&no_baseline), AdStatus::Degraded);
}

use chrono::{Duration, NaiveDate};
use fatigue_analysis::build_lead_lag_rows;
use fatigue_core::config::DatasetConfig;
use fatigue_core::models::FeatureRow;
use test_fixtures::{monday, week, weekly_series, FeatureRowBuilder};

fn loose() -> DatasetConfig {
    DatasetConfig {
        min_sample_rows: 1,
        ..Default::default()
    }
}

fn at_days(ad_id: &str, days: &[i64]) -> Vec<FeatureRow> {
    days.iter()
        .map(|d| FeatureRowBuilder::new(ad_id, monday() + Duration::days(*d)).build())
        .collect()
}

fn starts(rows: &[fatigue_core::LeadLagRow]) -> Vec<NaiveDate> {
    rows.iter().map(|r| r.week_start).collect()
}

// ── Sample floor ──

#[test]
fn below_sample_floor_returns_empty() {
    let rows: Vec<FeatureRow> = (0..4)
        .flat_map(|i| weekly_series(&format!("ad-{i}"), 12))
        .collect();
    assert_eq!(rows.len(), 48);
    assert!(build_lead_lag_rows(&rows, &DatasetConfig::default()).is_empty());
}

#[test]
fn exactly_at_floor_builds_triples() {
    let rows: Vec<FeatureRow> = (0..5)
        .flat_map(|i| weekly_series(&format!("ad-{i}"), 10))
        .collect();
    let data = build_lead_lag_rows(&rows, &DatasetConfig::default());
    assert_eq!(data.len(), 5 * 8);
}

#[test]
fn ineligible_rows_do_not_count_toward_floor() {
    let mut rows: Vec<FeatureRow> = (0..5)
        .flat_map(|i| weekly_series(&format!("ad-{i}"), 10))
        .collect();
    rows[0].min_results_met = false;
    assert!(build_lead_lag_rows(&rows, &DatasetConfig::default()).is_empty());
}

// ── Gap detection ──

#[test]
fn eight_day_gap_breaks_the_spanning_triple() {
    let rows = at_days("ad", &[0, 8, 15, 22, 29]);
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(starts(&data), vec![monday() + Duration::days(8), monday() + Duration::days(15)]);
}

#[test]
fn fourteen_day_gap_breaks_both_windows_touching_it() {
    let rows = at_days("ad", &[0, 7, 21, 28, 35]);
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(starts(&data), vec![monday() + Duration::days(21)]);
}

#[test]
fn removing_one_week_drops_every_window_across_it() {
    let mut rows = weekly_series("ad", 10);
    rows.remove(5);
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(
        starts(&data),
        vec![week(0), week(1), week(2), week(6), week(7)]
    );
}

#[test]
fn rows_are_sorted_per_ad_before_pairing() {
    let mut rows = weekly_series("ad", 4);
    rows.reverse();
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(starts(&data), vec![week(0), week(1)]);
}

// ── Labels ──

#[test]
fn spike_labels_follow_cost_change() {
    let rows = vec![
        FeatureRowBuilder::new("ad", week(0)).cpr(Some(10.0)).build(),
        FeatureRowBuilder::new("ad", week(1)).cpr(Some(12.0)).build(),
        FeatureRowBuilder::new("ad", week(2)).cpr(Some(11.9)).build(),
    ];
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(data.len(), 1);
    let row = &data[0];
    assert!((row.cpr_change_1w.unwrap() - 20.0).abs() < 1e-9);
    assert!(row.spike_1w);
    assert!((row.cpr_change_2w.unwrap() - 19.0).abs() < 1e-9);
    assert!(!row.spike_2w);
}

#[test]
fn missing_cost_leaves_change_null_and_unspiked() {
    let rows = vec![
        FeatureRowBuilder::new("ad", week(0)).cpr(None).build(),
        FeatureRowBuilder::new("ad", week(1)).cpr(Some(50.0)).build(),
        FeatureRowBuilder::new("ad", week(2)).cpr(Some(50.0)).build(),
    ];
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(data[0].cpr_change_1w, None);
    assert_eq!(data[0].cpr_change_2w, None);
    assert!(!data[0].spike_1w && !data[0].spike_2w);
}

#[test]
fn zero_earlier_cost_leaves_change_null() {
    let rows = vec![
        FeatureRowBuilder::new("ad", week(0)).cpr(Some(0.0)).build(),
        FeatureRowBuilder::new("ad", week(1)).cpr(Some(5.0)).build(),
        FeatureRowBuilder::new("ad", week(2)).cpr(Some(5.0)).build(),
    ];
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(data[0].cpr_change_1w, None);
}

#[test]
fn leading_values_come_from_week_t() {
    let rows = vec![
        FeatureRowBuilder::new("ad", week(0)).frequency(2.0).freq_delta(12.5).build(),
        FeatureRowBuilder::new("ad", week(1)).frequency(3.0).freq_delta(50.0).build(),
        FeatureRowBuilder::new("ad", week(2)).build(),
    ];
    let data = build_lead_lag_rows(&rows, &loose());
    assert_eq!(data[0].freq_t, 2.0);
    assert_eq!(data[0].freq_delta_t, Some(12.5));
}

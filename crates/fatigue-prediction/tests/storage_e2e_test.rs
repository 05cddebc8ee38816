//! Predictions and persistence over the SQLite store.

use fatigue_core::models::{AdStatus, PredictionType};
use fatigue_core::traits::{CancellationToken, ILagStatsStore};
use fatigue_prediction::PredictionEngine;
use fatigue_storage::SqliteFatigueStore;
use std::sync::Arc;
use test_fixtures::{week, weekly_series, FeatureRowBuilder};

#[test]
fn report_over_sqlite_persists_recovery_stats() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteFatigueStore::open(&dir.path().join("fatigue.db")).unwrap());

    let mut rows = weekly_series("steady", 6);
    rows.extend(weekly_series("tired", 5));
    rows.push(
        FeatureRowBuilder::new("tired", week(5))
            .weeks_with_data(6)
            .cpr(Some(14.0))
            .ctr_delta(-25.0)
            .freq_delta(-20.0)
            .build(),
    );
    store.insert_feature_rows("acc", &rows).unwrap();

    let engine = PredictionEngine::with_defaults(Arc::clone(&store));
    let report = engine
        .decay_recovery_report("acc", "leads", store.as_ref(), &CancellationToken::new())
        .unwrap();

    assert_eq!(report.recovery.len(), 2);
    assert_eq!(report.recovery[0].ad_id, "tired");
    assert_eq!(report.recovery[0].status, AdStatus::BurnedOut);
    assert!(report.persistence.is_complete());

    let stats = store.lag_stats("acc", "leads").unwrap();
    assert_eq!(stats.len(), 2);
    assert!(stats.iter().all(|s| s.prediction_type == PredictionType::Recovery));

    // A second run overwrites rather than duplicates.
    engine
        .decay_recovery_report("acc", "leads", store.as_ref(), &CancellationToken::new())
        .unwrap();
    assert_eq!(store.lag_stats("acc", "leads").unwrap().len(), 2);
}

#[test]
fn corrupted_ad_on_disk_fails_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fatigue.db");
    {
        let store = SqliteFatigueStore::open(&path).unwrap();
        let mut rows = weekly_series("good", 6);
        rows.extend(weekly_series("bad", 6));
        store.insert_feature_rows("acc", &rows).unwrap();
    }
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute(
            "UPDATE ad_weekly_features SET weeks_with_data = -1 WHERE ad_id = 'bad'",
            [],
        )
        .unwrap();
    }

    let store = Arc::new(SqliteFatigueStore::open(&path).unwrap());
    let engine = PredictionEngine::with_defaults(Arc::clone(&store));

    let batch = engine
        .predict_all_ads("acc", &CancellationToken::new())
        .unwrap();
    assert_eq!(batch.data.len(), 1);
    assert_eq!(batch.data[0].ad_id, "good");
    assert_eq!(batch.error_count(), 1);
    assert_eq!(batch.errors[0].ad_id, "bad");
    assert!(batch.errors[0].error.is_store_failure());

    let report = engine
        .decay_recovery_report("acc", "leads", store.as_ref(), &CancellationToken::new())
        .unwrap();
    assert_eq!(report.failed_ads, vec!["bad".to_string()]);
    assert_eq!(report.recovery.len(), 1);
    assert_eq!(store.lag_stats("acc", "leads").unwrap().len(), 1);
}

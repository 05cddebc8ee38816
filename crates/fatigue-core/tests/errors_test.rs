use fatigue_core::errors::*;

#[test]
fn store_error_converts_to_fatigue_error() {
    let err: FatigueError = StoreError::Unavailable {
        message: "connection refused".into(),
    }
    .into();
    assert!(err.is_store_failure());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn config_error_converts_to_fatigue_error() {
    let err: FatigueError = ConfigError::ValidationFailed {
        field: "dataset.week_tolerance".into(),
        message: "must be in [0.0, 0.5)".into(),
    }
    .into();
    assert!(matches!(err, FatigueError::Config(_)));
    assert!(!err.is_store_failure());
}

#[test]
fn malformed_row_carries_ad_id() {
    let err = StoreError::MalformedRow {
        ad_id: "ad-17".into(),
        reason: "bad date".into(),
    };
    assert!(err.to_string().contains("ad-17"));
}

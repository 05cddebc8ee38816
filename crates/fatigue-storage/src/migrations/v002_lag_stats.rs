//! V002: lag-dependency statistics, upserted per (account, result family, metric).

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS lag_dependency_stats (
    account_id                    TEXT NOT NULL,
    result_family                 TEXT NOT NULL,
    metric_name                   TEXT NOT NULL,
    prediction_type               TEXT NOT NULL,
    avg_cpr_growth_when_triggered REAL,
    trigger_frequency             REAL NOT NULL,
    predictive_power              REAL NOT NULL,
    recommended_threshold         REAL,
    time_lag_weeks                INTEGER NOT NULL,
    sample_size                   INTEGER NOT NULL,
    computed_at                   TEXT NOT NULL,
    PRIMARY KEY (account_id, result_family, metric_name)
) STRICT;
"#;

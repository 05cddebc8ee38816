//! V001: weekly feature rows, one per (account, ad, ISO week).

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS ad_weekly_features (
    account_id            TEXT NOT NULL,
    ad_id                 TEXT NOT NULL,
    -- ISO date (YYYY-MM-DD) of the week's Monday.
    week_start            TEXT NOT NULL,
    spend                 REAL NOT NULL,
    frequency             REAL NOT NULL,
    ctr                   REAL NOT NULL,
    cpc                   REAL NOT NULL,
    cpm                   REAL NOT NULL,
    reach                 INTEGER NOT NULL,
    cpr                   REAL,
    baseline_cpr          REAL,
    freq_delta_pct        REAL,
    ctr_delta_pct         REAL,
    cpc_delta_pct         REAL,
    freq_slope            REAL,
    ctr_slope             REAL,
    reach_growth_rate     REAL,
    spend_change_pct      REAL,
    quality_rank_score    REAL,
    engagement_rank_score REAL,
    weeks_with_data       INTEGER NOT NULL,
    min_results_met       INTEGER NOT NULL,
    PRIMARY KEY (account_id, ad_id, week_start)
) STRICT;

CREATE INDEX IF NOT EXISTS idx_features_eligible
    ON ad_weekly_features(account_id, ad_id, week_start) WHERE min_results_met = 1;
"#;

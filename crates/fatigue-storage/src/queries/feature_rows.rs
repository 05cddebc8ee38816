//! Queries for `ad_weekly_features`.

use chrono::NaiveDate;
use fatigue_core::errors::{FatigueResult, StoreError};
use fatigue_core::models::{AdFailure, FeatureRow, LatestRow};
use rusqlite::{params, Connection, Row};

use crate::to_storage_err;

const DATE_FORMAT: &str = "%Y-%m-%d";

const COLUMNS: &str = "ad_id, week_start, spend, frequency, ctr, cpc, cpm, reach, cpr, \
     baseline_cpr, freq_delta_pct, ctr_delta_pct, cpc_delta_pct, freq_slope, ctr_slope, \
     reach_growth_rate, spend_change_pct, quality_rank_score, engagement_rank_score, \
     weeks_with_data, min_results_met";

/// A feature row as stored, before date and range decoding.
struct RawFeatureRow {
    ad_id: String,
    week_start: String,
    spend: f64,
    frequency: f64,
    ctr: f64,
    cpc: f64,
    cpm: f64,
    reach: i64,
    cpr: Option<f64>,
    baseline_cpr: Option<f64>,
    freq_delta_pct: Option<f64>,
    ctr_delta_pct: Option<f64>,
    cpc_delta_pct: Option<f64>,
    freq_slope: Option<f64>,
    ctr_slope: Option<f64>,
    reach_growth_rate: Option<f64>,
    spend_change_pct: Option<f64>,
    quality_rank_score: Option<f64>,
    engagement_rank_score: Option<f64>,
    weeks_with_data: i64,
    min_results_met: bool,
}

impl RawFeatureRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            ad_id: row.get(0)?,
            week_start: row.get(1)?,
            spend: row.get(2)?,
            frequency: row.get(3)?,
            ctr: row.get(4)?,
            cpc: row.get(5)?,
            cpm: row.get(6)?,
            reach: row.get(7)?,
            cpr: row.get(8)?,
            baseline_cpr: row.get(9)?,
            freq_delta_pct: row.get(10)?,
            ctr_delta_pct: row.get(11)?,
            cpc_delta_pct: row.get(12)?,
            freq_slope: row.get(13)?,
            ctr_slope: row.get(14)?,
            reach_growth_rate: row.get(15)?,
            spend_change_pct: row.get(16)?,
            quality_rank_score: row.get(17)?,
            engagement_rank_score: row.get(18)?,
            weeks_with_data: row.get(19)?,
            min_results_met: row.get(20)?,
        })
    }

    fn decode(self) -> Result<FeatureRow, StoreError> {
        let malformed = |reason: String| StoreError::MalformedRow {
            ad_id: self.ad_id.clone(),
            reason,
        };
        let week_start = NaiveDate::parse_from_str(&self.week_start, DATE_FORMAT)
            .map_err(|e| malformed(format!("week_start {:?}: {e}", self.week_start)))?;
        let reach = u64::try_from(self.reach)
            .map_err(|_| malformed(format!("negative reach {}", self.reach)))?;
        let weeks_with_data = u32::try_from(self.weeks_with_data)
            .map_err(|_| malformed(format!("weeks_with_data out of range: {}", self.weeks_with_data)))?;

        Ok(FeatureRow {
            ad_id: self.ad_id,
            week_start,
            spend: self.spend,
            frequency: self.frequency,
            ctr: self.ctr,
            cpc: self.cpc,
            cpm: self.cpm,
            reach,
            cpr: self.cpr,
            baseline_cpr: self.baseline_cpr,
            freq_delta_pct: self.freq_delta_pct,
            ctr_delta_pct: self.ctr_delta_pct,
            cpc_delta_pct: self.cpc_delta_pct,
            freq_slope: self.freq_slope,
            ctr_slope: self.ctr_slope,
            reach_growth_rate: self.reach_growth_rate,
            spend_change_pct: self.spend_change_pct,
            quality_rank_score: self.quality_rank_score,
            engagement_rank_score: self.engagement_rank_score,
            weeks_with_data,
            min_results_met: self.min_results_met,
        })
    }
}

/// Insert or replace the row keyed by (account, ad, week).
pub fn upsert_feature_row(conn: &Connection, account_id: &str, row: &FeatureRow) -> FatigueResult<()> {
    let reach = i64::try_from(row.reach).map_err(|_| StoreError::MalformedRow {
        ad_id: row.ad_id.clone(),
        reason: format!("reach {} exceeds storage range", row.reach),
    })?;
    conn.prepare_cached(
        "INSERT INTO ad_weekly_features (
            account_id, ad_id, week_start, spend, frequency, ctr, cpc, cpm, reach, cpr,
            baseline_cpr, freq_delta_pct, ctr_delta_pct, cpc_delta_pct, freq_slope, ctr_slope,
            reach_growth_rate, spend_change_pct, quality_rank_score, engagement_rank_score,
            weeks_with_data, min_results_met
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16,
                  ?17, ?18, ?19, ?20, ?21, ?22)
        ON CONFLICT(account_id, ad_id, week_start) DO UPDATE SET
            spend = excluded.spend,
            frequency = excluded.frequency,
            ctr = excluded.ctr,
            cpc = excluded.cpc,
            cpm = excluded.cpm,
            reach = excluded.reach,
            cpr = excluded.cpr,
            baseline_cpr = excluded.baseline_cpr,
            freq_delta_pct = excluded.freq_delta_pct,
            ctr_delta_pct = excluded.ctr_delta_pct,
            cpc_delta_pct = excluded.cpc_delta_pct,
            freq_slope = excluded.freq_slope,
            ctr_slope = excluded.ctr_slope,
            reach_growth_rate = excluded.reach_growth_rate,
            spend_change_pct = excluded.spend_change_pct,
            quality_rank_score = excluded.quality_rank_score,
            engagement_rank_score = excluded.engagement_rank_score,
            weeks_with_data = excluded.weeks_with_data,
            min_results_met = excluded.min_results_met",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            account_id,
            row.ad_id,
            row.week_start.format(DATE_FORMAT).to_string(),
            row.spend,
            row.frequency,
            row.ctr,
            row.cpc,
            row.cpm,
            reach,
            row.cpr,
            row.baseline_cpr,
            row.freq_delta_pct,
            row.ctr_delta_pct,
            row.cpc_delta_pct,
            row.freq_slope,
            row.ctr_slope,
            row.reach_growth_rate,
            row.spend_change_pct,
            row.quality_rank_score,
            row.engagement_rank_score,
            row.weeks_with_data,
            row.min_results_met,
        ])
    })
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Eligible rows of an account ordered by (ad, week).
pub fn eligible_rows(conn: &Connection, account_id: &str) -> FatigueResult<Vec<FeatureRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM ad_weekly_features
         WHERE account_id = ?1 AND min_results_met = 1
         ORDER BY ad_id, week_start"
    );
    query_rows(conn, &sql, account_id)
}

/// One row regardless of its gate.
pub fn get_row(
    conn: &Connection,
    account_id: &str,
    ad_id: &str,
    week_start: NaiveDate,
) -> FatigueResult<Option<FeatureRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM ad_weekly_features
         WHERE account_id = ?1 AND ad_id = ?2 AND week_start = ?3"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let mut rows = stmt
        .query_map(
            params![account_id, ad_id, week_start.format(DATE_FORMAT).to_string()],
            RawFeatureRow::from_row,
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    match rows.next() {
        Some(raw) => {
            let raw = raw.map_err(|e| to_storage_err(e.to_string()))?;
            Ok(Some(raw.decode()?))
        }
        None => Ok(None),
    }
}

/// The most recent eligible row of each ad, ordered by ad.
///
/// A row that fails to decode is returned as that ad's failure. Only a failing
/// statement fails the whole call.
pub fn latest_rows(conn: &Connection, account_id: &str) -> FatigueResult<Vec<LatestRow>> {
    let sql = format!(
        "SELECT {COLUMNS} FROM ad_weekly_features f
         WHERE f.account_id = ?1 AND f.min_results_met = 1
           AND f.week_start = (
               SELECT MAX(g.week_start) FROM ad_weekly_features g
               WHERE g.account_id = f.account_id AND g.ad_id = f.ad_id
                 AND g.min_results_met = 1
           )
         ORDER BY f.ad_id"
    );
    let mut stmt = conn
        .prepare_cached(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let entries = stmt
        .query_map(params![account_id], |row| {
            Ok((row.get::<_, String>(0)?, RawFeatureRow::from_row(row)))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(entries
        .into_iter()
        .map(|(ad_id, raw)| {
            let decoded = raw
                .map_err(|e| to_storage_err(e.to_string()))
                .and_then(|raw| raw.decode().map_err(Into::into));
            decoded.map_err(|error| AdFailure { ad_id, error })
        })
        .collect())
}

/// Number of rows stored for an account, eligible or not.
pub fn count_rows(conn: &Connection, account_id: &str) -> FatigueResult<u64> {
    conn.query_row(
        "SELECT COUNT(*) FROM ad_weekly_features WHERE account_id = ?1",
        params![account_id],
        |row| row.get::<_, i64>(0),
    )
    .map(|n| n.max(0) as u64)
    .map_err(|e| to_storage_err(e.to_string()))
}

fn query_rows(conn: &Connection, sql: &str, account_id: &str) -> FatigueResult<Vec<FeatureRow>> {
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let raws = stmt
        .query_map(params![account_id], RawFeatureRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raws.into_iter()
        .map(|raw| raw.decode().map_err(Into::into))
        .collect()
}

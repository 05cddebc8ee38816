//! Queries for `lag_dependency_stats`.

use chrono::{DateTime, Utc};
use fatigue_core::errors::FatigueResult;
use fatigue_core::models::{LagDependencyStat, PredictionType};
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// Insert or replace the stat keyed by (account, result family, metric name).
pub fn upsert_lag_stat(conn: &Connection, stat: &LagDependencyStat) -> FatigueResult<()> {
    conn.prepare_cached(
        "INSERT INTO lag_dependency_stats (
            account_id, result_family, metric_name, prediction_type,
            avg_cpr_growth_when_triggered, trigger_frequency, predictive_power,
            recommended_threshold, time_lag_weeks, sample_size, computed_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
        ON CONFLICT(account_id, result_family, metric_name) DO UPDATE SET
            prediction_type = excluded.prediction_type,
            avg_cpr_growth_when_triggered = excluded.avg_cpr_growth_when_triggered,
            trigger_frequency = excluded.trigger_frequency,
            predictive_power = excluded.predictive_power,
            recommended_threshold = excluded.recommended_threshold,
            time_lag_weeks = excluded.time_lag_weeks,
            sample_size = excluded.sample_size,
            computed_at = excluded.computed_at",
    )
    .and_then(|mut stmt| {
        stmt.execute(params![
            stat.account_id,
            stat.result_family,
            stat.metric_name,
            stat.prediction_type.as_str(),
            stat.avg_cpr_growth_when_triggered,
            stat.trigger_frequency,
            stat.predictive_power,
            stat.recommended_threshold,
            stat.time_lag_weeks,
            stat.sample_size,
            stat.computed_at.to_rfc3339(),
        ])
    })
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// All stats of an account and result family, ordered by metric name.
pub fn lag_stats(
    conn: &Connection,
    account_id: &str,
    result_family: &str,
) -> FatigueResult<Vec<LagDependencyStat>> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT account_id, result_family, metric_name, prediction_type,
                    avg_cpr_growth_when_triggered, trigger_frequency, predictive_power,
                    recommended_threshold, time_lag_weeks, sample_size, computed_at
             FROM lag_dependency_stats
             WHERE account_id = ?1 AND result_family = ?2
             ORDER BY metric_name",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let raws = stmt
        .query_map(params![account_id, result_family], |row| {
            Ok(RawLagStat {
                account_id: row.get(0)?,
                result_family: row.get(1)?,
                metric_name: row.get(2)?,
                prediction_type: row.get(3)?,
                avg_cpr_growth_when_triggered: row.get(4)?,
                trigger_frequency: row.get(5)?,
                predictive_power: row.get(6)?,
                recommended_threshold: row.get(7)?,
                time_lag_weeks: row.get(8)?,
                sample_size: row.get(9)?,
                computed_at: row.get(10)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raws.into_iter().map(RawLagStat::decode).collect()
}

/// A stat as stored, with its enum and timestamp still as text.
struct RawLagStat {
    account_id: String,
    result_family: String,
    metric_name: String,
    prediction_type: String,
    avg_cpr_growth_when_triggered: Option<f64>,
    trigger_frequency: f64,
    predictive_power: f64,
    recommended_threshold: Option<f64>,
    time_lag_weeks: u32,
    sample_size: u32,
    computed_at: String,
}

impl RawLagStat {
    fn decode(self) -> FatigueResult<LagDependencyStat> {
        let prediction_type = PredictionType::parse(&self.prediction_type).ok_or_else(|| {
            to_storage_err(format!(
                "unknown prediction type {:?} for {}",
                self.prediction_type, self.metric_name
            ))
        })?;
        let computed_at = DateTime::parse_from_rfc3339(&self.computed_at)
            .map_err(|e| to_storage_err(format!("computed_at {:?}: {e}", self.computed_at)))?
            .with_timezone(&Utc);

        Ok(LagDependencyStat {
            account_id: self.account_id,
            result_family: self.result_family,
            metric_name: self.metric_name,
            prediction_type,
            avg_cpr_growth_when_triggered: self.avg_cpr_growth_when_triggered,
            trigger_frequency: self.trigger_frequency,
            predictive_power: self.predictive_power,
            recommended_threshold: self.recommended_threshold,
            time_lag_weeks: self.time_lag_weeks,
            sample_size: self.sample_size,
            computed_at,
        })
    }
}

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use fatigue_core::errors::{FatigueError, FatigueResult, StoreError};
use fatigue_core::models::{AdFailure, FeatureRow, LagDependencyStat, LatestRow};
use fatigue_core::traits::{IFeatureStore, ILagStatsStore};

/// In-memory feature and lag-stat store for tests.
///
/// `fail_ad` makes every read of that ad's rows fail as a malformed row, `fail_upserts` makes every
/// lag-stat write fail, and `go_offline` makes every read fail.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<(String, FeatureRow)>>,
    stats: Mutex<Vec<LagDependencyStat>>,
    failing_ads: Mutex<HashSet<String>>,
    fail_upserts: Mutex<bool>,
    offline: Mutex<bool>,
    latest_reads: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(account_id: &str, rows: Vec<FeatureRow>) -> Self {
        let store = Self::new();
        store.insert(account_id, rows);
        store
    }

    pub fn insert(&self, account_id: &str, rows: Vec<FeatureRow>) {
        let mut guard = self.rows.lock().unwrap();
        guard.extend(rows.into_iter().map(|r| (account_id.to_string(), r)));
    }

    pub fn fail_ad(&self, ad_id: &str) {
        self.failing_ads.lock().unwrap().insert(ad_id.to_string());
    }

    pub fn fail_upserts(&self, fail: bool) {
        *self.fail_upserts.lock().unwrap() = fail;
    }

    pub fn go_offline(&self) {
        *self.offline.lock().unwrap() = true;
    }

    /// Number of `latest_rows` calls served so far.
    pub fn latest_reads(&self) -> usize {
        self.latest_reads.load(Ordering::SeqCst)
    }

    pub fn stored_stats(&self) -> Vec<LagDependencyStat> {
        self.stats.lock().unwrap().clone()
    }

    fn check_online(&self) -> FatigueResult<()> {
        if *self.offline.lock().unwrap() {
            return Err(StoreError::Unavailable {
                message: "feature store offline".into(),
            }
            .into());
        }
        Ok(())
    }

    fn is_failing(&self, ad_id: &str) -> bool {
        self.failing_ads.lock().unwrap().contains(ad_id)
    }

    fn account_rows(&self, account_id: &str) -> Vec<FeatureRow> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|(acc, _)| acc == account_id)
            .map(|(_, r)| r.clone())
            .collect()
    }
}

fn injected_failure(ad_id: &str) -> FatigueError {
    StoreError::MalformedRow {
        ad_id: ad_id.to_string(),
        reason: "injected failure".into(),
    }
    .into()
}

impl IFeatureStore for InMemoryStore {
    fn eligible_rows(&self, account_id: &str) -> FatigueResult<Vec<FeatureRow>> {
        self.check_online()?;
        let mut rows: Vec<FeatureRow> = self
            .account_rows(account_id)
            .into_iter()
            .filter(|r| r.min_results_met)
            .collect();
        rows.sort_by(|a, b| (&a.ad_id, a.week_start).cmp(&(&b.ad_id, b.week_start)));
        Ok(rows)
    }

    fn get_row(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<FeatureRow>> {
        self.check_online()?;
        if self.is_failing(ad_id) {
            return Err(injected_failure(ad_id));
        }
        Ok(self
            .account_rows(account_id)
            .into_iter()
            .find(|r| r.ad_id == ad_id && r.week_start == week_start))
    }

    fn latest_rows(&self, account_id: &str) -> FatigueResult<Vec<LatestRow>> {
        self.latest_reads.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.eligible_rows(account_id)?;
        rows.sort_by(|a, b| (&a.ad_id, b.week_start).cmp(&(&b.ad_id, a.week_start)));
        rows.dedup_by(|later, earlier| later.ad_id == earlier.ad_id);
        Ok(rows
            .into_iter()
            .map(|row| {
                if self.is_failing(&row.ad_id) {
                    Err(AdFailure {
                        error: injected_failure(&row.ad_id),
                        ad_id: row.ad_id,
                    })
                } else {
                    Ok(row)
                }
            })
            .collect())
    }
}

impl ILagStatsStore for InMemoryStore {
    fn upsert_lag_stat(&self, stat: &LagDependencyStat) -> FatigueResult<()> {
        if *self.fail_upserts.lock().unwrap() {
            return Err(StoreError::Unavailable {
                message: "stats store offline".into(),
            }
            .into());
        }
        let mut stats = self.stats.lock().unwrap();
        stats.retain(|s| {
            !(s.account_id == stat.account_id
                && s.result_family == stat.result_family
                && s.metric_name == stat.metric_name)
        });
        stats.push(stat.clone());
        Ok(())
    }

    fn lag_stats(
        &self,
        account_id: &str,
        result_family: &str,
    ) -> FatigueResult<Vec<LagDependencyStat>> {
        let mut out: Vec<LagDependencyStat> = self
            .stats
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.account_id == account_id && s.result_family == result_family)
            .cloned()
            .collect();
        out.sort_by(|a, b| a.metric_name.cmp(&b.metric_name));
        Ok(out)
    }
}

//! SqliteFatigueStore: owns the database and implements both store traits.

use std::path::Path;

use chrono::NaiveDate;
use fatigue_core::errors::FatigueResult;
use fatigue_core::models::{FeatureRow, LagDependencyStat, LatestRow};
use fatigue_core::traits::{IFeatureStore, ILagStatsStore};

use crate::connection::DatabaseManager;
use crate::queries::{feature_rows, lag_stats};
use crate::{migrations, to_storage_err};

pub struct SqliteFatigueStore {
    db: DatabaseManager,
}

impl SqliteFatigueStore {
    /// Open (or create) a database file and bring its schema up to date.
    pub fn open(path: &Path) -> FatigueResult<Self> {
        Ok(Self {
            db: DatabaseManager::open(path)?,
        })
    }

    /// Open a private in-memory database (for testing).
    pub fn open_in_memory() -> FatigueResult<Self> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Upsert a batch of feature rows in one transaction. Returns the number written.
    pub fn insert_feature_rows(&self, account_id: &str, rows: &[FeatureRow]) -> FatigueResult<usize> {
        self.db.with_writer(|conn| {
            let tx = conn
                .unchecked_transaction()
                .map_err(|e| to_storage_err(e.to_string()))?;
            for row in rows {
                feature_rows::upsert_feature_row(&tx, account_id, row)?;
            }
            tx.commit().map_err(|e| to_storage_err(e.to_string()))?;
            Ok(rows.len())
        })
    }

    /// Stored row count for an account, eligible or not.
    pub fn count_rows(&self, account_id: &str) -> FatigueResult<u64> {
        self.db
            .with_reader(|conn| feature_rows::count_rows(conn, account_id))
    }

    /// Applied schema version.
    pub fn schema_version(&self) -> FatigueResult<u32> {
        self.db.with_reader(migrations::current_version)
    }

    pub fn database(&self) -> &DatabaseManager {
        &self.db
    }
}

impl IFeatureStore for SqliteFatigueStore {
    fn eligible_rows(&self, account_id: &str) -> FatigueResult<Vec<FeatureRow>> {
        self.db
            .with_reader(|conn| feature_rows::eligible_rows(conn, account_id))
    }

    fn get_row(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<FeatureRow>> {
        self.db
            .with_reader(|conn| feature_rows::get_row(conn, account_id, ad_id, week_start))
    }

    fn latest_rows(&self, account_id: &str) -> FatigueResult<Vec<LatestRow>> {
        self.db
            .with_reader(|conn| feature_rows::latest_rows(conn, account_id))
    }
}

impl ILagStatsStore for SqliteFatigueStore {
    fn upsert_lag_stat(&self, stat: &LagDependencyStat) -> FatigueResult<()> {
        self.db
            .with_writer(|conn| lag_stats::upsert_lag_stat(conn, stat))
    }

    fn lag_stats(
        &self,
        account_id: &str,
        result_family: &str,
    ) -> FatigueResult<Vec<LagDependencyStat>> {
        self.db
            .with_reader(|conn| lag_stats::lag_stats(conn, account_id, result_family))
    }
}

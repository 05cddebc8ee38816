use std::sync::Arc;

use crate::errors::FatigueResult;
use crate::models::LagDependencyStat;

/// Write access to the lag-dependency statistics store.
pub trait ILagStatsStore: Send + Sync {
    /// Insert or replace the row keyed by (account, result family, metric name).
    fn upsert_lag_stat(&self, stat: &LagDependencyStat) -> FatigueResult<()>;

    /// All rows for an account and result family, ordered by metric name.
    fn lag_stats(&self, account_id: &str, result_family: &str)
        -> FatigueResult<Vec<LagDependencyStat>>;
}

impl<T: ILagStatsStore> ILagStatsStore for Arc<T> {
    fn upsert_lag_stat(&self, stat: &LagDependencyStat) -> FatigueResult<()> {
        (**self).upsert_lag_stat(stat)
    }
    fn lag_stats(
        &self,
        account_id: &str,
        result_family: &str,
    ) -> FatigueResult<Vec<LagDependencyStat>> {
        (**self).lag_stats(account_id, result_family)
    }
}

use std::sync::Arc;

use chrono::NaiveDate;

use crate::errors::FatigueResult;
use crate::models::{FeatureRow, LatestRow};

/// Read access to the weekly feature store.
///
/// Rows are computed and validated upstream. Implementations return errors only for
/// transport or decoding failures; the engine never retries them.
pub trait IFeatureStore: Send + Sync {
    /// All rows of the account with `min_results_met = true`, ordered by (ad, week).
    fn eligible_rows(&self, account_id: &str) -> FatigueResult<Vec<FeatureRow>>;

    /// A single row, regardless of its gate.
    fn get_row(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<FeatureRow>>;

    /// The most recent eligible row of every ad in the account, ordered by ad.
    ///
    /// The outer error means the account could not be enumerated at all. A single
    /// ad whose row fails to decode comes back as an `Err` entry carrying its id.
    fn latest_rows(&self, account_id: &str) -> FatigueResult<Vec<LatestRow>>;
}

/// Blanket impl: `Arc<T>` implements `IFeatureStore` by delegating to the inner `T`.
impl<T: IFeatureStore> IFeatureStore for Arc<T> {
    fn eligible_rows(&self, account_id: &str) -> FatigueResult<Vec<FeatureRow>> {
        (**self).eligible_rows(account_id)
    }
    fn get_row(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<FeatureRow>> {
        (**self).get_row(account_id, ad_id, week_start)
    }
    fn latest_rows(&self, account_id: &str) -> FatigueResult<Vec<LatestRow>> {
        (**self).latest_rows(account_id)
    }
}

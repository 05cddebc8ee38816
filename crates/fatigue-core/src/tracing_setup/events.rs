//! Structured log events for key engine operations.

/// A lead-lag dataset was built for an account.
pub fn dataset_built(account_id: &str, eligible_rows: usize, lead_lag_rows: usize) {
    tracing::info!(
        event = "dataset_built",
        account_id = %account_id,
        eligible_rows = eligible_rows,
        lead_lag_rows = lead_lag_rows,
        "lead-lag dataset built"
    );
}

/// An account or metric did not have enough data to analyze.
pub fn insufficient_data(account_id: &str, scope: &str, available: usize, required: usize) {
    tracing::debug!(
        event = "insufficient_data",
        account_id = %account_id,
        scope = %scope,
        available = available,
        required = required,
        "insufficient data"
    );
}

/// A per-ad prediction was not produced.
pub fn prediction_skipped(ad_id: &str, reason: &str) {
    tracing::debug!(
        event = "prediction_skipped",
        ad_id = %ad_id,
        reason = %reason,
        "prediction skipped"
    );
}

/// A per-ad prediction failed and the ad was left out of the batch.
pub fn ad_prediction_failed(ad_id: &str, error: &str) {
    tracing::warn!(
        event = "ad_prediction_failed",
        ad_id = %ad_id,
        error = %error,
        "ad prediction failed"
    );
}

/// A lag-stat upsert failed. Returned predictions are unaffected.
pub fn lag_stat_persist_failed(account_id: &str, metric_name: &str, error: &str) {
    tracing::warn!(
        event = "lag_stat_persist_failed",
        account_id = %account_id,
        metric_name = %metric_name,
        error = %error,
        "lag stat persist failed"
    );
}

/// A batch finished.
pub fn batch_completed(kind: &str, account_id: &str, predicted: usize, failed: usize) {
    tracing::info!(
        event = "batch_completed",
        kind = %kind,
        account_id = %account_id,
        predicted = predicted,
        failed = failed,
        "batch completed"
    );
}

/// A batch observed its cancellation token.
pub fn batch_cancelled(kind: &str, account_id: &str, processed: usize) {
    tracing::warn!(
        event = "batch_cancelled",
        kind = %kind,
        account_id = %account_id,
        processed = processed,
        "batch cancelled"
    );
}

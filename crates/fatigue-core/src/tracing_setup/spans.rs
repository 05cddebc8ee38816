//! Span definitions for account-level analysis and batch prediction runs.

/// Create an account analysis span.
#[macro_export]
macro_rules! analysis_span {
    ($account_id:expr) => {
        tracing::info_span!("fatigue.analysis", account_id = %$account_id)
    };
}

/// Create a batch prediction span.
#[macro_export]
macro_rules! batch_span {
    ($kind:expr, $account_id:expr) => {
        tracing::info_span!("fatigue.batch", kind = %$kind, account_id = %$account_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYSIS: &str = "fatigue.analysis";
    pub const BATCH: &str = "fatigue.batch";
}

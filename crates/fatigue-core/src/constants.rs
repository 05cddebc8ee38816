/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Percentage-like features are divided by this before weighting.
pub const PERCENT_DIVISOR: f64 = 100.0;

/// Days between consecutive weekly rows.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Lag, in weeks, of the longest forecast horizon.
pub const MAX_HORIZON_WEEKS: u32 = 2;

/// Maximum number of drivers attached to a single prediction.
pub const MAX_DRIVERS: usize = 5;

/// Number of per-ad recommendation lines added to the decay/recovery report.
pub const REPORT_TOP_ADS: usize = 3;

//! # fatigue-analysis
//!
//! Account-wide lead-lag analysis of weekly ad metrics.
//!
//! | Stage | Output |
//! |-------|--------|
//! | Dataset builder | (t, t+1, t+2) lead-lag rows over consecutive weeks |
//! | Quantile analyzer | Per-band mean cost growth and spike rate for ten metrics |
//! | Insight generator | Threshold recommendations from Q1/Q_max spike-rate gaps |
//! | Correlation engine | Pearson correlation of each metric with 1w/2w cost change |
//!
//! Every stage returns empty output, never an error, when there is not enough data.

pub mod correlation;
pub mod dataset;
pub mod engine;
pub mod insights;
pub mod quantile;

pub use correlation::{correlate, pearson};
pub use dataset::build_lead_lag_rows;
pub use engine::AnalysisEngine;
pub use insights::generate_insights;
pub use quantile::{analyze_all, analyze_metric, quantiles};

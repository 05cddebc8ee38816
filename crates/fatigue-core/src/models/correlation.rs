use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::LeadingMetric;

/// Pearson correlation of a leading metric with future cost change.
///
/// A correlation of exactly 0.0 with a sample size under the configured floor means
/// "not enough signal", not "no relationship".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricCorrelation {
    pub metric: LeadingMetric,
    pub correlation_1w: f64,
    pub correlation_2w: f64,
    pub pairs_1w: usize,
    pub pairs_2w: usize,
}

//! Pearson correlation between leading metrics and future cost change.

use fatigue_core::config::AnalysisConfig;
use fatigue_core::models::{Horizon, LeadLagRow, LeadingMetric, MetricCorrelation};

/// Pearson correlation coefficient of paired samples.
///
/// ```text
/// r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))
/// ```
///
/// Returns 0.0 for mismatched or empty input and when either side has no variance.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
        sum_xx += a * a;
        sum_yy += b * b;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let var_x = n * sum_xx - sum_x * sum_x;
    let var_y = n * sum_yy - sum_y * sum_y;
    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }
    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    (numerator / denominator).clamp(-1.0, 1.0)
}

/// Correlation of each leading metric with 1- and 2-week cost change, strongest
/// |2-week| correlation first.
///
/// A horizon with fewer than `min_correlation_pairs` pairs reports 0.0.
pub fn correlate(dataset: &[LeadLagRow], config: &AnalysisConfig) -> Vec<MetricCorrelation> {
    let mut out: Vec<MetricCorrelation> = LeadingMetric::ALL
        .iter()
        .map(|&metric| {
            let (correlation_1w, pairs_1w) =
                horizon_correlation(dataset, metric, Horizon::OneWeek, config);
            let (correlation_2w, pairs_2w) =
                horizon_correlation(dataset, metric, Horizon::TwoWeeks, config);
            MetricCorrelation {
                metric,
                correlation_1w,
                correlation_2w,
                pairs_1w,
                pairs_2w,
            }
        })
        .collect();

    out.sort_by(|a, b| b.correlation_2w.abs().total_cmp(&a.correlation_2w.abs()));
    out
}

fn horizon_correlation(
    dataset: &[LeadLagRow],
    metric: LeadingMetric,
    horizon: Horizon,
    config: &AnalysisConfig,
) -> (f64, usize) {
    let (xs, ys): (Vec<f64>, Vec<f64>) = dataset
        .iter()
        .filter_map(|row| Some((row.value(metric)?, row.cpr_change(horizon)?)))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .unzip();
    let pairs = xs.len();
    if pairs < config.min_correlation_pairs {
        return (0.0, pairs);
    }
    (pearson(&xs, &ys), pairs)
}

//! Quantile analyzer: equal-probability bands per leading metric and the cost
//! outcomes observed in each band.

use fatigue_core::config::AnalysisConfig;
use fatigue_core::models::{Horizon, LeadLagRow, LeadingMetric, QuantileAnalysis, QuantileBand};

/// Percentile boundaries of `values` at each probability in `probs`.
///
/// Standard linear interpolation: for `p`, index `p·(n−1)` is interpolated between its
/// floor and ceil neighbours in sorted order. Probabilities are clamped to [0, 1].
/// Returns an empty vector for empty input.
pub fn quantiles(values: &[f64], probs: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let last = (sorted.len() - 1) as f64;

    probs
        .iter()
        .map(|p| {
            let idx = p.clamp(0.0, 1.0) * last;
            let lo = idx.floor() as usize;
            let hi = idx.ceil() as usize;
            if lo == hi {
                sorted[lo]
            } else {
                let v = sorted[lo] + (sorted[hi] - sorted[lo]) * (idx - lo as f64);
                // Rounding must not carry the value outside its neighbours.
                v.max(sorted[lo]).min(sorted[hi])
            }
        })
        .collect()
}

/// Bands for one metric, lowest first. Empty when fewer than `min_band_samples` rows
/// carry the metric.
///
/// Band 1 is closed on both ends; later bands exclude their lower boundary so a value
/// equal to an interior boundary is counted once. Empty bands are left out.
pub fn analyze_metric(
    dataset: &[LeadLagRow],
    metric: LeadingMetric,
    config: &AnalysisConfig,
) -> Vec<QuantileBand> {
    let observed: Vec<(f64, &LeadLagRow)> = dataset
        .iter()
        .filter_map(|row| row.value(metric).filter(|v| v.is_finite()).map(|v| (v, row)))
        .collect();
    if observed.len() < config.min_band_samples || config.quantile_bands == 0 {
        return Vec::new();
    }

    let values: Vec<f64> = observed.iter().map(|(v, _)| *v).collect();
    let n = config.quantile_bands;
    let probs: Vec<f64> = (0..=n).map(|k| k as f64 / n as f64).collect();
    let bounds = quantiles(&values, &probs);

    let mut bands = Vec::with_capacity(n);
    for k in 1..=n {
        let (lower, upper) = (bounds[k - 1], bounds[k]);
        let members: Vec<&LeadLagRow> = observed
            .iter()
            .filter(|(v, _)| {
                let above = if k == 1 { *v >= lower } else { *v > lower };
                above && *v <= upper
            })
            .map(|(_, row)| *row)
            .collect();
        if members.is_empty() {
            continue;
        }
        bands.push(summarize(metric, k, lower, upper, &members));
    }
    bands
}

/// Bands for all ten leading metrics. Metrics without enough data are absent.
pub fn analyze_all(dataset: &[LeadLagRow], config: &AnalysisConfig) -> QuantileAnalysis {
    LeadingMetric::ALL
        .iter()
        .filter_map(|&metric| {
            let bands = analyze_metric(dataset, metric, config);
            (!bands.is_empty()).then_some((metric, bands))
        })
        .collect()
}

fn summarize(
    metric: LeadingMetric,
    band: usize,
    lower: f64,
    upper: f64,
    members: &[&LeadLagRow],
) -> QuantileBand {
    let size = members.len();
    QuantileBand {
        metric,
        band,
        lower,
        upper,
        sample_size: size,
        mean_cpr_change_1w: mean_change(members, Horizon::OneWeek),
        mean_cpr_change_2w: mean_change(members, Horizon::TwoWeeks),
        spike_rate_1w: spike_rate(members, Horizon::OneWeek),
        spike_rate_2w: spike_rate(members, Horizon::TwoWeeks),
    }
}

fn mean_change(members: &[&LeadLagRow], horizon: Horizon) -> Option<f64> {
    let known: Vec<f64> = members.iter().filter_map(|r| r.cpr_change(horizon)).collect();
    if known.is_empty() {
        None
    } else {
        Some(known.iter().sum::<f64>() / known.len() as f64)
    }
}

fn spike_rate(members: &[&LeadLagRow], horizon: Horizon) -> f64 {
    let spikes = members.iter().filter(|r| r.spiked(horizon)).count();
    spikes as f64 / members.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_interpolates_between_neighbours() {
        let q = quantiles(&[4.0, 1.0, 3.0, 2.0], &[0.5]);
        assert_eq!(q, vec![2.5]);
    }

    #[test]
    fn empty_input_has_no_quantiles() {
        assert!(quantiles(&[], &[0.0, 1.0]).is_empty());
    }
}

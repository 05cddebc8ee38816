//! Weighted-scoring kernel shared by the burnout and recovery predictors.

use fatigue_core::config::FeatureWeight;
use fatigue_core::constants::MAX_DRIVERS;
use fatigue_core::models::RiskDriver;

/// One scored feature of a row.
#[derive(Debug, Clone, Copy)]
pub struct ScoredFeature {
    pub name: &'static str,
    pub value: Option<f64>,
    /// Normalization divisor: 100 for percentages, 1 for slopes.
    pub divisor: f64,
    pub weight: FeatureWeight,
}

/// Raw accumulated score and the features that crossed their alert thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedScore {
    pub raw: f64,
    /// Largest contribution first, at most five.
    pub drivers: Vec<RiskDriver>,
}

/// Accumulate `value / divisor × weight` over the present features.
///
/// Missing or non-finite values contribute nothing and never alert. `warning` renders
/// the driver text from the feature name and raw value.
pub fn accumulate(features: &[ScoredFeature], warning: impl Fn(&str, f64) -> String) -> WeightedScore {
    let mut raw = 0.0;
    let mut drivers = Vec::new();
    for feature in features {
        let Some(value) = feature.value.filter(|v| v.is_finite()) else {
            continue;
        };
        let contribution = value / feature.divisor * feature.weight.weight;
        raw += contribution;
        if feature.weight.alerts(value) {
            drivers.push(RiskDriver {
                metric: feature.name.to_string(),
                value,
                contribution: contribution.abs(),
                warning: warning(feature.name, value),
            });
        }
    }
    drivers.sort_by(|a, b| b.contribution.total_cmp(&a.contribution));
    drivers.truncate(MAX_DRIVERS);
    WeightedScore { raw, drivers }
}

/// `(raw + offset) / scale` clamped to [0, 1].
pub fn bounded(raw: f64, offset: f64, scale: f64) -> f64 {
    ((raw + offset) / scale).clamp(0.0, 1.0)
}

/// `min(1, weeks / confidence_weeks)`.
pub fn confidence(weeks_with_data: u32, confidence_weeks: u32) -> f64 {
    if confidence_weeks == 0 {
        return 1.0;
    }
    (f64::from(weeks_with_data) / f64::from(confidence_weeks)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature(name: &'static str, value: Option<f64>, weight: f64, threshold: f64) -> ScoredFeature {
        ScoredFeature {
            name,
            value,
            divisor: 100.0,
            weight: FeatureWeight::new(weight, threshold),
        }
    }

    #[test]
    fn missing_value_is_not_zero_but_absent() {
        let score = accumulate(&[feature("a", None, 1.0, -1.0)], |_, _| String::new());
        assert_eq!(score.raw, 0.0);
        assert!(score.drivers.is_empty());
    }

    #[test]
    fn drivers_ranked_by_absolute_contribution() {
        let features = [
            feature("small", Some(30.0), 0.1, 0.0),
            feature("large", Some(-50.0), -0.4, 0.0),
            feature("quiet", Some(5.0), 0.5, 10.0),
        ];
        let score = accumulate(&features, |name, _| name.to_string());
        let names: Vec<&str> = score.drivers.iter().map(|d| d.metric.as_str()).collect();
        assert_eq!(names, vec!["large", "small"]);
        assert!((score.drivers[0].contribution - 0.2).abs() < 1e-12);
    }

    #[test]
    fn at_most_five_drivers() {
        let features: Vec<ScoredFeature> = (0..7)
            .map(|_| feature("f", Some(50.0), 0.1, 0.0))
            .collect();
        assert_eq!(accumulate(&features, |_, _| String::new()).drivers.len(), 5);
    }

    #[test]
    fn bounded_clamps_both_ends() {
        assert_eq!(bounded(-2.0, 0.5, 1.0), 0.0);
        assert_eq!(bounded(2.0, 0.5, 1.0), 1.0);
        assert!((bounded(0.075, 0.5, 1.0) - 0.575).abs() < 1e-12);
    }

    #[test]
    fn confidence_saturates() {
        assert_eq!(confidence(4, 8), 0.5);
        assert_eq!(confidence(12, 8), 1.0);
    }
}

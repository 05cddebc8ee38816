//! Weight tables and scoring parameters for the burnout and recovery predictors.
//!
//! Both predictors share the same shape: a weighted sum of normalized features,
//! an affine map `(sum + offset) / scale` clamped to [0, 1], three descending tier
//! cutoffs, and two linear forecast multipliers. The constants are domain choices,
//! not fitted coefficients, and can be overridden per deployment through TOML.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Weight and alert threshold of a single scored feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    /// Signed weight applied to the normalized value.
    pub weight: f64,
    /// Raw (un-normalized) value beyond which the feature is reported as a driver.
    pub alert_threshold: f64,
}

impl FeatureWeight {
    pub const fn new(weight: f64, alert_threshold: f64) -> Self {
        Self {
            weight,
            alert_threshold,
        }
    }

    /// True when `value` lies past the threshold in the direction the weight pushes
    /// the score: above it for positive weights, below it for negative weights.
    pub fn alerts(&self, value: f64) -> bool {
        if self.weight > 0.0 {
            value > self.alert_threshold
        } else if self.weight < 0.0 {
            value < self.alert_threshold
        } else {
            false
        }
    }
}

/// Burnout feature weights. Rising frequency and cost push risk up; rising CTR and
/// reach push it down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnoutWeights {
    pub freq_delta_pct: FeatureWeight,
    pub ctr_delta_pct: FeatureWeight,
    pub cpc_delta_pct: FeatureWeight,
    pub freq_slope: FeatureWeight,
    pub ctr_slope: FeatureWeight,
    pub reach_growth_rate: FeatureWeight,
    pub spend_change_pct: FeatureWeight,
}

impl Default for BurnoutWeights {
    fn default() -> Self {
        Self {
            freq_delta_pct: FeatureWeight::new(0.25, 20.0),
            ctr_delta_pct: FeatureWeight::new(-0.20, -15.0),
            cpc_delta_pct: FeatureWeight::new(0.15, 20.0),
            freq_slope: FeatureWeight::new(0.10, 0.1),
            ctr_slope: FeatureWeight::new(-0.10, -0.05),
            reach_growth_rate: FeatureWeight::new(-0.10, -10.0),
            spend_change_pct: FeatureWeight::new(0.10, 50.0),
        }
    }
}

impl BurnoutWeights {
    fn all(&self) -> [(&'static str, FeatureWeight); 7] {
        [
            ("freq_delta_pct", self.freq_delta_pct),
            ("ctr_delta_pct", self.ctr_delta_pct),
            ("cpc_delta_pct", self.cpc_delta_pct),
            ("freq_slope", self.freq_slope),
            ("ctr_slope", self.ctr_slope),
            ("reach_growth_rate", self.reach_growth_rate),
            ("spend_change_pct", self.spend_change_pct),
        ]
    }
}

/// Recovery feature weights: the burnout signs inverted, plus two ranking scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryWeights {
    pub freq_delta_pct: FeatureWeight,
    pub ctr_delta_pct: FeatureWeight,
    pub cpc_delta_pct: FeatureWeight,
    pub freq_slope: FeatureWeight,
    pub ctr_slope: FeatureWeight,
    pub reach_growth_rate: FeatureWeight,
    pub spend_change_pct: FeatureWeight,
    pub quality_rank_score: FeatureWeight,
    pub engagement_rank_score: FeatureWeight,
}

impl Default for RecoveryWeights {
    fn default() -> Self {
        Self {
            freq_delta_pct: FeatureWeight::new(-0.20, -10.0),
            ctr_delta_pct: FeatureWeight::new(0.20, 10.0),
            cpc_delta_pct: FeatureWeight::new(-0.15, -10.0),
            freq_slope: FeatureWeight::new(-0.10, -0.1),
            ctr_slope: FeatureWeight::new(0.10, 0.05),
            reach_growth_rate: FeatureWeight::new(0.10, 10.0),
            spend_change_pct: FeatureWeight::new(-0.05, -30.0),
            quality_rank_score: FeatureWeight::new(0.05, 0.5),
            engagement_rank_score: FeatureWeight::new(0.05, 0.5),
        }
    }
}

impl RecoveryWeights {
    fn all(&self) -> [(&'static str, FeatureWeight); 9] {
        [
            ("freq_delta_pct", self.freq_delta_pct),
            ("ctr_delta_pct", self.ctr_delta_pct),
            ("cpc_delta_pct", self.cpc_delta_pct),
            ("freq_slope", self.freq_slope),
            ("ctr_slope", self.ctr_slope),
            ("reach_growth_rate", self.reach_growth_rate),
            ("spend_change_pct", self.spend_change_pct),
            ("quality_rank_score", self.quality_rank_score),
            ("engagement_rank_score", self.engagement_rank_score),
        ]
    }
}

/// Burnout predictor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnoutModel {
    pub weights: BurnoutWeights,
    pub offset: f64,
    pub scale: f64,
    /// Descending cutoffs for critical, high, and medium.
    pub tier_cutoffs: [f64; 3],
    /// Percent cost change forecast per unit of risk, one week out.
    pub forecast_1w: f64,
    /// Percent cost change forecast per unit of risk, two weeks out.
    pub forecast_2w: f64,
    /// Weeks of history required before any prediction is made.
    pub min_weeks: u32,
    /// Weeks of history at which confidence saturates at 1.0.
    pub confidence_weeks: u32,
}

impl Default for BurnoutModel {
    fn default() -> Self {
        Self {
            weights: BurnoutWeights::default(),
            offset: defaults::DEFAULT_SCORE_OFFSET,
            scale: defaults::DEFAULT_SCORE_SCALE,
            tier_cutoffs: defaults::DEFAULT_TIER_CUTOFFS,
            forecast_1w: defaults::DEFAULT_BURNOUT_FORECAST_1W,
            forecast_2w: defaults::DEFAULT_BURNOUT_FORECAST_2W,
            min_weeks: defaults::DEFAULT_MIN_WEEKS,
            confidence_weeks: defaults::DEFAULT_CONFIDENCE_WEEKS,
        }
    }
}

impl BurnoutModel {
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scoring(
            "burnout",
            self.offset,
            self.scale,
            &self.tier_cutoffs,
            self.confidence_weeks,
        )?;
        validate_forecasts("burnout", self.forecast_1w, self.forecast_2w)?;
        validate_weights("burnout", &self.weights.all())
    }
}

/// Recovery predictor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryModel {
    pub weights: RecoveryWeights,
    pub offset: f64,
    pub scale: f64,
    /// Descending cutoffs for very likely, likely, and possible.
    pub tier_cutoffs: [f64; 3],
    /// Magnitude of the forecast cost decrease per unit of recovery, one week out.
    pub forecast_1w: f64,
    /// Magnitude of the forecast cost decrease per unit of recovery, two weeks out.
    pub forecast_2w: f64,
    /// Divisor applied to ranking-style scores instead of the percent divisor.
    pub rank_score_divisor: f64,
    pub min_weeks: u32,
    pub confidence_weeks: u32,
}

impl Default for RecoveryModel {
    fn default() -> Self {
        Self {
            weights: RecoveryWeights::default(),
            offset: defaults::DEFAULT_SCORE_OFFSET,
            scale: defaults::DEFAULT_SCORE_SCALE,
            tier_cutoffs: defaults::DEFAULT_TIER_CUTOFFS,
            forecast_1w: defaults::DEFAULT_RECOVERY_FORECAST_1W,
            forecast_2w: defaults::DEFAULT_RECOVERY_FORECAST_2W,
            rank_score_divisor: defaults::DEFAULT_RANK_SCORE_DIVISOR,
            min_weeks: defaults::DEFAULT_MIN_WEEKS,
            confidence_weeks: defaults::DEFAULT_CONFIDENCE_WEEKS,
        }
    }
}

impl RecoveryModel {
    /// Score at or above which a recovery counts as "likely".
    pub fn likely_cutoff(&self) -> f64 {
        self.tier_cutoffs[1]
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_scoring(
            "recovery",
            self.offset,
            self.scale,
            &self.tier_cutoffs,
            self.confidence_weeks,
        )?;
        validate_forecasts("recovery", self.forecast_1w, self.forecast_2w)?;
        if !(self.rank_score_divisor.is_finite() && self.rank_score_divisor > 0.0) {
            return Err(invalid("recovery.rank_score_divisor", "must be a positive number"));
        }
        validate_weights("recovery", &self.weights.all())
    }
}

fn validate_scoring(
    prefix: &str,
    offset: f64,
    scale: f64,
    cutoffs: &[f64; 3],
    confidence_weeks: u32,
) -> Result<(), ConfigError> {
    if !offset.is_finite() {
        return Err(invalid(&format!("{prefix}.offset"), "must be finite"));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(invalid(&format!("{prefix}.scale"), "must be a positive number"));
    }
    let in_range = cutoffs.iter().all(|c| *c > 0.0 && *c <= 1.0);
    let descending = cutoffs.windows(2).all(|w| w[0] > w[1]);
    if !in_range || !descending {
        return Err(invalid(
            &format!("{prefix}.tier_cutoffs"),
            "must be strictly descending values in (0, 1]",
        ));
    }
    if confidence_weeks == 0 {
        return Err(invalid(
            &format!("{prefix}.confidence_weeks"),
            "must be greater than 0",
        ));
    }
    Ok(())
}

/// Forecast multipliers are magnitudes; the recovery sign is applied by the scorer.
fn validate_forecasts(prefix: &str, one_week: f64, two_weeks: f64) -> Result<(), ConfigError> {
    for (name, value) in [("forecast_1w", one_week), ("forecast_2w", two_weeks)] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(invalid(
                &format!("{prefix}.{name}"),
                "must be a finite non-negative number",
            ));
        }
    }
    Ok(())
}

fn validate_weights(prefix: &str, weights: &[(&'static str, FeatureWeight)]) -> Result<(), ConfigError> {
    for (name, fw) in weights {
        if !fw.weight.is_finite() || !fw.alert_threshold.is_finite() {
            return Err(invalid(
                &format!("{prefix}.weights.{name}"),
                "weight and alert_threshold must be finite",
            ));
        }
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Leading indicators tested against future cost-per-result changes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LeadingMetric {
    FreqT,
    FreqDeltaT,
    FreqSlopeT,
    CtrT,
    CtrDeltaT,
    CtrSlopeT,
    CpcT,
    CpcDeltaT,
    CpmT,
    ReachGrowthT,
}

impl LeadingMetric {
    pub const ALL: [LeadingMetric; 10] = [
        LeadingMetric::FreqT,
        LeadingMetric::FreqDeltaT,
        LeadingMetric::FreqSlopeT,
        LeadingMetric::CtrT,
        LeadingMetric::CtrDeltaT,
        LeadingMetric::CtrSlopeT,
        LeadingMetric::CpcT,
        LeadingMetric::CpcDeltaT,
        LeadingMetric::CpmT,
        LeadingMetric::ReachGrowthT,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreqT => "freq_t",
            Self::FreqDeltaT => "freq_delta_t",
            Self::FreqSlopeT => "freq_slope_t",
            Self::CtrT => "ctr_t",
            Self::CtrDeltaT => "ctr_delta_t",
            Self::CtrSlopeT => "ctr_slope_t",
            Self::CpcT => "cpc_t",
            Self::CpcDeltaT => "cpc_delta_t",
            Self::CpmT => "cpm_t",
            Self::ReachGrowthT => "reach_growth_t",
        }
    }
}

impl std::fmt::Display for LeadingMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast horizon of a lead-lag label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    OneWeek,
    TwoWeeks,
}

impl Horizon {
    pub const ALL: [Horizon; 2] = [Horizon::OneWeek, Horizon::TwoWeeks];

    pub fn weeks(&self) -> u32 {
        match self {
            Self::OneWeek => 1,
            Self::TwoWeeks => 2,
        }
    }
}

/// Leading indicators at week t paired with cost outcomes at t+1 and t+2.
///
/// Built fresh for every analysis run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadLagRow {
    pub ad_id: String,
    pub week_start: NaiveDate,
    pub freq_t: f64,
    pub freq_delta_t: Option<f64>,
    pub freq_slope_t: Option<f64>,
    pub ctr_t: f64,
    pub ctr_delta_t: Option<f64>,
    pub ctr_slope_t: Option<f64>,
    pub cpc_t: f64,
    pub cpc_delta_t: Option<f64>,
    pub cpm_t: f64,
    pub reach_growth_t: Option<f64>,
    pub spend_change_t: Option<f64>,
    pub cpr_t: Option<f64>,
    /// Percent cost-per-result change from t to t+1.
    pub cpr_change_1w: Option<f64>,
    /// Percent cost-per-result change from t to t+2.
    pub cpr_change_2w: Option<f64>,
    pub spike_1w: bool,
    pub spike_2w: bool,
}

impl LeadLagRow {
    /// Value of a leading metric at week t.
    pub fn value(&self, metric: LeadingMetric) -> Option<f64> {
        match metric {
            LeadingMetric::FreqT => Some(self.freq_t),
            LeadingMetric::FreqDeltaT => self.freq_delta_t,
            LeadingMetric::FreqSlopeT => self.freq_slope_t,
            LeadingMetric::CtrT => Some(self.ctr_t),
            LeadingMetric::CtrDeltaT => self.ctr_delta_t,
            LeadingMetric::CtrSlopeT => self.ctr_slope_t,
            LeadingMetric::CpcT => Some(self.cpc_t),
            LeadingMetric::CpcDeltaT => self.cpc_delta_t,
            LeadingMetric::CpmT => Some(self.cpm_t),
            LeadingMetric::ReachGrowthT => self.reach_growth_t,
        }
    }

    pub fn cpr_change(&self, horizon: Horizon) -> Option<f64> {
        match horizon {
            Horizon::OneWeek => self.cpr_change_1w,
            Horizon::TwoWeeks => self.cpr_change_2w,
        }
    }

    pub fn spiked(&self, horizon: Horizon) -> bool {
        match horizon {
            Horizon::OneWeek => self.spike_1w,
            Horizon::TwoWeeks => self.spike_2w,
        }
    }
}

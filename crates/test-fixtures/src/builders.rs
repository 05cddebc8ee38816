use chrono::{Duration, NaiveDate};
use fatigue_core::FeatureRow;

/// The Monday every synthetic series starts on.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

/// Week `n` (0-based) of the synthetic calendar.
pub fn week(n: i64) -> NaiveDate {
    monday() + Duration::days(7 * n)
}

/// Builder for a single eligible feature row with neutral metrics.
#[derive(Debug, Clone)]
pub struct FeatureRowBuilder {
    row: FeatureRow,
}

impl FeatureRowBuilder {
    pub fn new(ad_id: &str, week_start: NaiveDate) -> Self {
        Self {
            row: FeatureRow {
                ad_id: ad_id.to_string(),
                week_start,
                spend: 100.0,
                frequency: 1.5,
                ctr: 1.2,
                cpc: 0.6,
                cpm: 9.0,
                reach: 4_000,
                cpr: Some(10.0),
                baseline_cpr: Some(10.0),
                freq_delta_pct: None,
                ctr_delta_pct: None,
                cpc_delta_pct: None,
                freq_slope: None,
                ctr_slope: None,
                reach_growth_rate: None,
                spend_change_pct: None,
                quality_rank_score: None,
                engagement_rank_score: None,
                weeks_with_data: 8,
                min_results_met: true,
            },
        }
    }

    pub fn frequency(mut self, v: f64) -> Self {
        self.row.frequency = v;
        self
    }

    pub fn ctr(mut self, v: f64) -> Self {
        self.row.ctr = v;
        self
    }

    pub fn cpr(mut self, v: Option<f64>) -> Self {
        self.row.cpr = v;
        self
    }

    pub fn baseline_cpr(mut self, v: Option<f64>) -> Self {
        self.row.baseline_cpr = v;
        self
    }

    pub fn freq_delta(mut self, v: f64) -> Self {
        self.row.freq_delta_pct = Some(v);
        self
    }

    pub fn ctr_delta(mut self, v: f64) -> Self {
        self.row.ctr_delta_pct = Some(v);
        self
    }

    pub fn cpc_delta(mut self, v: f64) -> Self {
        self.row.cpc_delta_pct = Some(v);
        self
    }

    pub fn freq_slope(mut self, v: f64) -> Self {
        self.row.freq_slope = Some(v);
        self
    }

    pub fn ctr_slope(mut self, v: f64) -> Self {
        self.row.ctr_slope = Some(v);
        self
    }

    pub fn reach_growth(mut self, v: f64) -> Self {
        self.row.reach_growth_rate = Some(v);
        self
    }

    pub fn spend_change(mut self, v: f64) -> Self {
        self.row.spend_change_pct = Some(v);
        self
    }

    pub fn ranks(mut self, quality: f64, engagement: f64) -> Self {
        self.row.quality_rank_score = Some(quality);
        self.row.engagement_rank_score = Some(engagement);
        self
    }

    pub fn weeks_with_data(mut self, n: u32) -> Self {
        self.row.weeks_with_data = n;
        self
    }

    pub fn min_results_met(mut self, met: bool) -> Self {
        self.row.min_results_met = met;
        self
    }

    pub fn build(self) -> FeatureRow {
        self.row
    }
}

/// `weeks` consecutive eligible rows for one ad with flat cost per result and a
/// running `weeks_with_data` count.
pub fn weekly_series(ad_id: &str, weeks: usize) -> Vec<FeatureRow> {
    (0..weeks)
        .map(|i| {
            FeatureRowBuilder::new(ad_id, week(i as i64))
                .weeks_with_data(i as u32 + 1)
                .freq_delta(0.0)
                .ctr_delta(0.0)
                .build()
        })
        .collect()
}

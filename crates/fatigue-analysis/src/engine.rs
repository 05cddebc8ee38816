//! AnalysisEngine: fetches an account's eligible rows once per call and runs the
//! lead-lag stages over them.

use chrono::Utc;
use fatigue_core::config::{AnalysisConfig, DatasetConfig};
use fatigue_core::errors::FatigueResult;
use fatigue_core::models::{
    AccountAnalysis, LagDependencyStat, LeadLagRow, MetricCorrelation, PersistOutcome,
    PredictionType, QuantileAnalysis, TriggerInsight,
};
use fatigue_core::tracing_setup::events;
use fatigue_core::traits::{IFeatureStore, ILagStatsStore};
use fatigue_core::FatigueConfig;

use crate::{correlation, dataset, insights, quantile};

/// Lag, in weeks, of the horizon insights are derived from.
const INSIGHT_LAG_WEEKS: u32 = 2;

/// Account-wide analysis over a feature store.
///
/// Store failures propagate and abort the current account's run. Insufficient data
/// yields empty results.
pub struct AnalysisEngine<S: IFeatureStore> {
    store: S,
    dataset: DatasetConfig,
    analysis: AnalysisConfig,
}

impl<S: IFeatureStore> AnalysisEngine<S> {
    pub fn new(store: S, config: &FatigueConfig) -> Self {
        Self {
            store,
            dataset: config.dataset.clone(),
            analysis: config.analysis.clone(),
        }
    }

    /// Engine with default configuration.
    pub fn with_defaults(store: S) -> Self {
        Self::new(store, &FatigueConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lead-lag rows for the account; empty when it has too few eligible rows.
    pub fn build_dataset(&self, account_id: &str) -> FatigueResult<Vec<LeadLagRow>> {
        let rows = self.store.eligible_rows(account_id)?;
        let eligible = rows.iter().filter(|r| r.min_results_met).count();
        if eligible < self.dataset.min_sample_rows {
            events::insufficient_data(account_id, "dataset", eligible, self.dataset.min_sample_rows);
            return Ok(Vec::new());
        }
        let built = dataset::build_lead_lag_rows(&rows, &self.dataset);
        events::dataset_built(account_id, eligible, built.len());
        Ok(built)
    }

    pub fn analyze_quantiles(&self, account_id: &str) -> FatigueResult<QuantileAnalysis> {
        let data = self.build_dataset(account_id)?;
        Ok(quantile::analyze_all(&data, &self.analysis))
    }

    /// Trigger insights, strongest first.
    pub fn trigger_insights(&self, account_id: &str) -> FatigueResult<Vec<TriggerInsight>> {
        let bands = self.analyze_quantiles(account_id)?;
        Ok(insights::generate_insights(&bands, &self.analysis))
    }

    /// Correlations, strongest |2-week| first.
    pub fn correlations(&self, account_id: &str) -> FatigueResult<Vec<MetricCorrelation>> {
        let data = self.build_dataset(account_id)?;
        Ok(correlation::correlate(&data, &self.analysis))
    }

    /// Quantiles, insights, and correlations from a single dataset build.
    pub fn analyze_account(&self, account_id: &str) -> FatigueResult<AccountAnalysis> {
        let _span = fatigue_core::analysis_span!(account_id).entered();

        let data = self.build_dataset(account_id)?;
        let quantiles = quantile::analyze_all(&data, &self.analysis);
        let trigger_insights = insights::generate_insights(&quantiles, &self.analysis);
        let correlations = if data.is_empty() {
            Vec::new()
        } else {
            correlation::correlate(&data, &self.analysis)
        };

        Ok(AccountAnalysis {
            account_id: account_id.to_string(),
            dataset_size: data.len(),
            quantiles,
            insights: trigger_insights,
            correlations,
        })
    }

    /// Upsert each insight as a `trigger` lag stat. Failures are logged and counted,
    /// never returned.
    pub fn persist_insights<T: ILagStatsStore + ?Sized>(
        &self,
        stats: &T,
        account_id: &str,
        result_family: &str,
        insights: &[TriggerInsight],
    ) -> PersistOutcome {
        let computed_at = Utc::now();
        let mut outcome = PersistOutcome::default();
        for insight in insights {
            let stat = LagDependencyStat {
                account_id: account_id.to_string(),
                result_family: result_family.to_string(),
                metric_name: insight.metric.as_str().to_string(),
                prediction_type: PredictionType::Trigger,
                avg_cpr_growth_when_triggered: insight.trigger_mean_cpr_change,
                trigger_frequency: insight.trigger_spike_rate,
                predictive_power: insight.predictive_power,
                recommended_threshold: Some(insight.threshold),
                time_lag_weeks: INSIGHT_LAG_WEEKS,
                sample_size: u32::try_from(insight.trigger_sample_size).unwrap_or(u32::MAX),
                computed_at,
            };
            outcome.attempted += 1;
            match stats.upsert_lag_stat(&stat) {
                Ok(()) => outcome.written += 1,
                Err(e) => {
                    outcome.failed += 1;
                    events::lag_stat_persist_failed(account_id, &stat.metric_name, &e.to_string());
                }
            }
        }
        outcome
    }
}

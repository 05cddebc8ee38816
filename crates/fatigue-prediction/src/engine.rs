//! PredictionEngine: per-ad predictions over a feature store, batch orchestration,
//! recovery persistence, and the combined decay/recovery report.

use chrono::{NaiveDate, Utc};
use fatigue_core::config::{BurnoutModel, FatigueAlertConfig, RecoveryModel};
use fatigue_core::constants::{MAX_HORIZON_WEEKS, REPORT_TOP_ADS};
use fatigue_core::errors::{FatigueError, FatigueResult};
use fatigue_core::models::{
    AdStatus, BatchResult, DecayRecoveryReport, FatigueAlert, FatigueRecommendation,
    FeatureRow, LagDependencyStat, LatestRow, PersistOutcome, PredictionResult, PredictionType,
    RecoveryPrediction, RecoveryTier, RiskTier,
};
use fatigue_core::tracing_setup::events;
use fatigue_core::traits::{Cancellable, IFeatureStore, ILagStatsStore};
use fatigue_core::FatigueConfig;

use crate::{burnout, fatigue_alert, recovery, status};

const BURNOUT_BATCH: &str = "burnout";
const RECOVERY_BATCH: &str = "recovery";

/// Prediction engine over a feature store. Models are fixed at construction.
pub struct PredictionEngine<S: IFeatureStore> {
    store: S,
    burnout: BurnoutModel,
    recovery: RecoveryModel,
    alerts: FatigueAlertConfig,
}

impl<S: IFeatureStore> PredictionEngine<S> {
    pub fn new(store: S, config: &FatigueConfig) -> Self {
        Self {
            store,
            burnout: config.burnout.clone(),
            recovery: config.recovery.clone(),
            alerts: config.fatigue_alerts.clone(),
        }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::new(store, &FatigueConfig::default())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Burnout risk for one ad and week.
    ///
    /// `Ok(None)` when the row is missing, fails its gate, or has too little history.
    pub fn predict_burnout(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<PredictionResult>> {
        let row = self.fetch(account_id, ad_id, week_start)?;
        Ok(row.and_then(|row| self.score_burnout(&row)))
    }

    /// Recovery likelihood for one ad and week, classifying the same row it scores.
    pub fn predict_recovery(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<RecoveryPrediction>> {
        let row = self.fetch(account_id, ad_id, week_start)?;
        Ok(row.and_then(|row| self.score_recovery(&row)))
    }

    /// Burnout for every ad's latest eligible week, highest risk first.
    ///
    /// A failed enumeration aborts the run. An ad whose row cannot be read is
    /// collected in `errors` and left out. Cancellation is checked before each ad.
    pub fn predict_all_ads(
        &self,
        account_id: &str,
        cancel: &impl Cancellable,
    ) -> FatigueResult<BatchResult<PredictionResult>> {
        let latest = self.store.latest_rows(account_id)?;
        self.burnout_batch(account_id, &latest, cancel)
    }

    /// Recovery for every ad's latest eligible week, highest score first. Healthy ads
    /// are included with score 0.
    pub fn predict_all_recovery(
        &self,
        account_id: &str,
        cancel: &impl Cancellable,
    ) -> FatigueResult<BatchResult<RecoveryPrediction>> {
        let latest = self.store.latest_rows(account_id)?;
        self.recovery_batch(account_id, &latest, cancel)
    }

    /// Fatigue alerts for every ad's latest eligible week, urgent first. Ads whose
    /// row cannot be read raise no alert.
    pub fn fatigue_alerts(&self, account_id: &str) -> FatigueResult<Vec<FatigueAlert>> {
        let latest = self.store.latest_rows(account_id)?;
        Ok(self.alerts_for(&latest))
    }

    /// Upsert each recovery prediction as a `recovery` lag stat.
    ///
    /// Failures are logged and counted. The predictions themselves are unaffected.
    pub fn persist_recovery<T: ILagStatsStore + ?Sized>(
        &self,
        stats: &T,
        account_id: &str,
        result_family: &str,
        predictions: &[RecoveryPrediction],
    ) -> PersistOutcome {
        let computed_at = Utc::now();
        let mut outcome = PersistOutcome::default();
        for p in predictions {
            let stat = LagDependencyStat {
                account_id: account_id.to_string(),
                result_family: result_family.to_string(),
                metric_name: format!("recovery:{}", p.ad_id),
                prediction_type: PredictionType::Recovery,
                avg_cpr_growth_when_triggered: Some(p.predicted_cpr_change_2w),
                trigger_frequency: p.confidence,
                predictive_power: p.recovery_score,
                recommended_threshold: Some(self.recovery.likely_cutoff()),
                time_lag_weeks: MAX_HORIZON_WEEKS,
                sample_size: p.weeks_with_data,
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

    /// Both batches, recovery persistence, fatigue alerts, and summary lines in one
    /// bundle for the reporting layer.
    pub fn decay_recovery_report<T: ILagStatsStore + ?Sized>(
        &self,
        account_id: &str,
        result_family: &str,
        stats: &T,
        cancel: &impl Cancellable,
    ) -> FatigueResult<DecayRecoveryReport> {
        let latest = self.store.latest_rows(account_id)?;
        let burnout = self.burnout_batch(account_id, &latest, cancel)?;
        let recovery = self.recovery_batch(account_id, &latest, cancel)?;
        let persistence = self.persist_recovery(stats, account_id, result_family, &recovery.data);
        let fatigue_alerts = self.alerts_for(&latest);

        let high_risk_count = burnout
            .data
            .iter()
            .filter(|p| p.risk_tier >= RiskTier::High)
            .count();
        let likely_recovery_count = recovery
            .data
            .iter()
            .filter(|p| p.recovery_tier >= RecoveryTier::Likely)
            .count();
        let burned_out_count = recovery
            .data
            .iter()
            .filter(|p| p.status == AdStatus::BurnedOut)
            .count();

        let mut failed_ads: Vec<String> = burnout
            .errors
            .iter()
            .chain(recovery.errors.iter())
            .map(|f| f.ad_id.clone())
            .collect();
        failed_ads.sort();
        failed_ads.dedup();

        let recommendations = recommendations(
            &burnout.data,
            &fatigue_alerts,
            high_risk_count,
            likely_recovery_count,
            burned_out_count,
        );

        Ok(DecayRecoveryReport {
            account_id: account_id.to_string(),
            result_family: result_family.to_string(),
            generated_at: Utc::now(),
            burnout: burnout.data,
            recovery: recovery.data,
            fatigue_alerts,
            high_risk_count,
            likely_recovery_count,
            burned_out_count,
            recommendations,
            failed_ads,
            persistence,
        })
    }

    fn fetch(
        &self,
        account_id: &str,
        ad_id: &str,
        week_start: NaiveDate,
    ) -> FatigueResult<Option<FeatureRow>> {
        let row = self.store.get_row(account_id, ad_id, week_start)?;
        if row.is_none() {
            events::prediction_skipped(ad_id, "row_missing");
        }
        Ok(row)
    }

    fn score_burnout(&self, row: &FeatureRow) -> Option<PredictionResult> {
        let prediction = burnout::predict_row(row, &self.burnout);
        if prediction.is_none() {
            log_skip(row, self.burnout.min_weeks);
        }
        prediction
    }

    fn score_recovery(&self, row: &FeatureRow) -> Option<RecoveryPrediction> {
        let ad_status = status::classify_row(row);
        let prediction = recovery::predict_row(row, ad_status, &self.recovery);
        if prediction.is_none() {
            log_skip(row, self.recovery.min_weeks);
        }
        prediction
    }

    fn burnout_batch(
        &self,
        account_id: &str,
        latest: &[LatestRow],
        cancel: &impl Cancellable,
    ) -> FatigueResult<BatchResult<PredictionResult>> {
        let mut batch = run_batch(BURNOUT_BATCH, account_id, latest, cancel, |row| {
            self.score_burnout(row)
        })?;
        batch
            .data
            .sort_by(|a, b| b.risk_score.total_cmp(&a.risk_score));
        Ok(batch)
    }

    fn recovery_batch(
        &self,
        account_id: &str,
        latest: &[LatestRow],
        cancel: &impl Cancellable,
    ) -> FatigueResult<BatchResult<RecoveryPrediction>> {
        let mut batch = run_batch(RECOVERY_BATCH, account_id, latest, cancel, |row| {
            self.score_recovery(row)
        })?;
        batch
            .data
            .sort_by(|a, b| b.recovery_score.total_cmp(&a.recovery_score));
        Ok(batch)
    }

    fn alerts_for(&self, latest: &[LatestRow]) -> Vec<FatigueAlert> {
        let readable: Vec<FeatureRow> = latest
            .iter()
            .filter_map(|entry| entry.as_ref().ok().cloned())
            .collect();
        fatigue_alert::detect_all(&readable, &self.alerts)
    }
}

/// Run `predict` sequentially over the latest eligible row of every ad.
fn run_batch<T>(
    kind: &str,
    account_id: &str,
    latest: &[LatestRow],
    cancel: &impl Cancellable,
    predict: impl Fn(&FeatureRow) -> Option<T>,
) -> FatigueResult<BatchResult<T>> {
    let _span = fatigue_core::batch_span!(kind, account_id).entered();

    let mut batch = BatchResult::default();
    for (processed, entry) in latest.iter().enumerate() {
        if cancel.is_cancelled() {
            events::batch_cancelled(kind, account_id, processed);
            return Err(FatigueError::Cancelled);
        }
        match entry {
            Ok(row) => batch.data.extend(predict(row)),
            Err(failure) => {
                events::ad_prediction_failed(&failure.ad_id, &failure.error.to_string());
                batch.add_error(failure.ad_id.clone(), failure.error.clone());
            }
        }
    }
    events::batch_completed(kind, account_id, batch.data.len(), batch.error_count());
    Ok(batch)
}

fn log_skip(row: &FeatureRow, min_weeks: u32) {
    if let Some(reason) = burnout::skip_reason(row, min_weeks) {
        events::prediction_skipped(&row.ad_id, reason);
    }
}

fn recommendations(
    burnout: &[PredictionResult],
    alerts: &[FatigueAlert],
    high_risk: usize,
    likely_recovery: usize,
    burned_out: usize,
) -> Vec<String> {
    let mut lines = vec![
        format!("Высокий риск выгорания: {high_risk} объявлений"),
        format!("Вероятное восстановление: {likely_recovery} объявлений"),
        format!("Полностью выгоревших: {burned_out} объявлений"),
    ];
    // Burnout is sorted by risk, so the first high-tier entries are the worst.
    for p in burnout
        .iter()
        .filter(|p| p.risk_tier >= RiskTier::High)
        .take(REPORT_TOP_ADS)
    {
        lines.push(format!(
            "{}: риск {} ({:.2}), прогноз CPR {:+.0}% за 2 недели",
            p.ad_id,
            p.risk_tier.as_str(),
            p.risk_score,
            p.predicted_cpr_change_2w
        ));
    }
    for alert in alerts
        .iter()
        .filter(|a| a.recommendation == FatigueRecommendation::UrgentReplace)
    {
        lines.push(format!(
            "{}: срочно замените креатив (частота {:.1})",
            alert.ad_id, alert.frequency
        ));
    }
    lines
}

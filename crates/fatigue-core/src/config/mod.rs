//! Configuration for the fatigue engine.
//! TOML-based; every field has a compiled default and unknown keys are ignored.
//! Weight tables are loaded once and passed explicitly into the predictors.

pub mod analysis_config;
pub mod dataset_config;
pub mod defaults;
pub mod fatigue_alert_config;
pub mod fatigue_config;
pub mod model_config;
pub mod observability_config;

pub use analysis_config::AnalysisConfig;
pub use dataset_config::DatasetConfig;
pub use fatigue_alert_config::FatigueAlertConfig;
pub use fatigue_config::FatigueConfig;
pub use model_config::{BurnoutModel, BurnoutWeights, FeatureWeight, RecoveryModel, RecoveryWeights};
pub use observability_config::ObservabilityConfig;

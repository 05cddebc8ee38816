//! # fatigue-core
//!
//! Foundation crate for the ad-fatigue prediction engine.
//! Defines the weekly feature model, analysis and prediction outputs, store traits,
//! errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::FatigueConfig;
pub use errors::{FatigueError, FatigueResult};
pub use models::{FeatureRow, LeadLagRow, LeadingMetric};
pub use traits::{Cancellable, CancellationToken, IFeatureStore, ILagStatsStore};

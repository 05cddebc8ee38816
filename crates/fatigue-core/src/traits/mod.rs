//! Seams between the engine and its collaborators.

pub mod cancellation;
pub mod feature_store;
pub mod stats_store;

pub use cancellation::{Cancellable, CancellationToken};
pub use feature_store::IFeatureStore;
pub use stats_store::ILagStatsStore;

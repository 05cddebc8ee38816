//! Error handling for the fatigue engine.
//! One error enum per subsystem, `thiserror` only.
//!
//! "Not enough data yet" is never an error: builders and predictors return empty
//! vectors or `None` for it.

pub mod config_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use store_error::StoreError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FatigueError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("run cancelled")]
    Cancelled,
}

impl FatigueError {
    /// True for failures caused by the feature or statistics store.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

pub type FatigueResult<T> = Result<T, FatigueError>;

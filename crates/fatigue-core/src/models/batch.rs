use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::FeatureRow;
use crate::errors::FatigueError;

/// A per-ad failure that was isolated from the rest of a batch.
#[derive(Debug, Clone)]
pub struct AdFailure {
    pub ad_id: String,
    pub error: FatigueError,
}

/// One ad's latest row as enumerated by the feature store. A row that fails to
/// decode is reported against its ad instead of failing the whole enumeration.
pub type LatestRow = Result<FeatureRow, AdFailure>;

/// Result of a batch run that accumulates non-fatal per-ad errors.
/// One bad ad never aborts the batch; it is logged and left out of `data`.
#[derive(Debug)]
pub struct BatchResult<T> {
    pub data: Vec<T>,
    pub errors: Vec<AdFailure>,
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> BatchResult<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Record a failed ad.
    pub fn add_error(&mut self, ad_id: impl Into<String>, error: FatigueError) {
        self.errors.push(AdFailure {
            ad_id: ad_id.into(),
            error,
        });
    }

    /// Returns true if no ad failed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

/// Outcome of an explicit persistence step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersistOutcome {
    pub attempted: u32,
    pub written: u32,
    pub failed: u32,
}

impl PersistOutcome {
    pub fn is_complete(&self) -> bool {
        self.failed == 0 && self.written == self.attempted
    }
}

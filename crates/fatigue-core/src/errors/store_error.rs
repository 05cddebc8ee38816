/// Errors raised by feature-store reads and lag-stat writes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {message}")]
    Unavailable { message: String },

    #[error("SQLite error: {message}")]
    Sqlite { message: String },

    #[error("malformed feature row for ad {ad_id}: {reason}")]
    MalformedRow { ad_id: String, reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}

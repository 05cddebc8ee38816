//! Versioned schema migrations tracked in `schema_version`.

pub mod v001_feature_rows;
pub mod v002_lag_stats;

use fatigue_core::errors::{FatigueResult, StoreError};
use rusqlite::{params, Connection};

use crate::to_storage_err;

/// Ordered (version, sql) pairs.
const MIGRATIONS: &[(u32, &str)] = &[
    (1, v001_feature_rows::MIGRATION_SQL),
    (2, v002_lag_stats::MIGRATION_SQL),
];

/// Highest schema version this build knows.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the recorded version, each in its own transaction.
pub fn run_migrations(conn: &Connection) -> FatigueResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        ) STRICT;",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        apply(conn, version, sql).map_err(|reason| StoreError::MigrationFailed { version, reason })?;
        tracing::info!(version, "applied schema migration");
    }
    Ok(())
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> FatigueResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply(conn: &Connection, version: u32, sql: &str) -> Result<(), String> {
    let tx = conn.unchecked_transaction().map_err(|e| e.to_string())?;
    tx.execute_batch(sql).map_err(|e| e.to_string())?;
    tx.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        params![version],
    )
    .map_err(|e| e.to_string())?;
    tx.commit().map_err(|e| e.to_string())
}

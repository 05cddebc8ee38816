//! PRAGMA configuration: WAL, NORMAL sync, 5s busy timeout on the writer;
//! query-only readers.

use fatigue_core::errors::FatigueResult;
use rusqlite::Connection;

use crate::to_storage_err;

/// Pragmas for the write connection.
pub fn apply_pragmas(conn: &Connection) -> FatigueResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA cache_size = -16000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Pragmas for pooled read connections.
pub fn apply_read_pragmas(conn: &Connection) -> FatigueResult<()> {
    conn.execute_batch(
        "
        PRAGMA busy_timeout = 5000;
        PRAGMA query_only = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// True when the connection runs in WAL mode.
pub fn verify_wal_mode(conn: &Connection) -> FatigueResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}

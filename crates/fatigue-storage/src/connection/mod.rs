//! Connection management: one serialized writer plus pooled readers.

pub mod pool;
pub mod pragmas;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fatigue_core::errors::{FatigueResult, StoreError};
use rusqlite::Connection;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::{migrations, to_storage_err};

/// Owns the write connection and, for file-backed databases, the read pool.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    /// `None` in memory: a second in-memory connection is a separate database.
    readers: Option<ReadPool>,
    path: Option<PathBuf>,
}

impl DatabaseManager {
    /// Open a database file, apply pragmas, run migrations.
    pub fn open(path: &Path) -> FatigueResult<Self> {
        let writer = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, ReadPool::default_size())?;
        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database. Reads go through the writer.
    pub fn open_in_memory() -> FatigueResult<Self> {
        let writer = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&writer)?;
        migrations::run_migrations(&writer)?;
        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            path: None,
        })
    }

    /// Run a closure on the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> FatigueResult<T>
    where
        F: FnOnce(&Connection) -> FatigueResult<T>,
    {
        let guard = self.writer.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&guard)
    }

    /// Run a closure on a read connection.
    pub fn with_reader<F, T>(&self, f: F) -> FatigueResult<T>
    where
        F: FnOnce(&Connection) -> FatigueResult<T>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Database file path (`None` in memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

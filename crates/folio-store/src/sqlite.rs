// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Key-value storage backed by a single SQLite table.
//
// Schema:
//   kv(
//     key   TEXT PRIMARY KEY,
//     value TEXT NOT NULL
//   )

use std::path::Path;

use folio_core::error::{FolioError, Result};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info, instrument};

use crate::kv::KeyValueStore;

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS kv (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
"#;

/// Convert a `rusqlite::Error` into a `FolioError::Database`.
fn db_err(e: rusqlite::Error) -> FolioError {
    FolioError::Database(e.to_string())
}

/// Durable key-value store in a SQLite file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the store at `path`.
    ///
    /// WAL mode keeps the file consistent across unclean shutdowns.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref())
            .map_err(|e| FolioError::Database(format!("open: {e}")))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| FolioError::Database(format!("WAL pragma: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| FolioError::Database(format!("create table: {e}")))?;

        info!("key-value store opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database (useful for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| FolioError::Database(format!("open in-memory: {e}")))?;

        conn.execute_batch(CREATE_TABLE_SQL)
            .map_err(|e| FolioError::Database(format!("create table: {e}")))?;

        debug!("in-memory key-value store opened");
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(db_err)
    }

    #[instrument(skip(self, value), fields(%key, len = value.len()))]
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(db_err)?;
        debug!("value stored");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(db_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrite_and_delete() {
        let mut store = SqliteStore::open_in_memory().expect("open in-memory db");
        assert_eq!(store.get("portfolio-projects").unwrap(), None);

        store.set("portfolio-projects", "[]").unwrap();
        store.set("portfolio-projects", "[1]").unwrap();
        assert_eq!(
            store.get("portfolio-projects").unwrap().as_deref(),
            Some("[1]")
        );

        store.remove("portfolio-projects").unwrap();
        assert_eq!(store.get("portfolio-projects").unwrap(), None);
    }

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.db");

        {
            let mut store = SqliteStore::open(&path).expect("open");
            store.set("greeting", "مرحبا").unwrap();
        }

        let store = SqliteStore::open(&path).expect("reopen");
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("مرحبا"));
    }
}

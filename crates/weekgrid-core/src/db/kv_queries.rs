//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM kv WHERE key = ?1";

impl super::Database {
    /// Reads the value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read stored value")
    }

    /// Stores `value` under `key`, replacing any previous value. The write
    /// runs in its own transaction, so a failure leaves the old value in place.
    pub fn put_value(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write stored value")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// When the value under `key` was last written.
    pub fn updated_at(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read update time")?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}

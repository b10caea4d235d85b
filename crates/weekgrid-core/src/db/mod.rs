//! SQLite-backed key-value storage for the planner state.
//!
//! The planner persists a single JSON document under one key. This module
//! provides the SQLite connection, the schema for the key-value table and the
//! [`StateBackend`] implementation the task store writes through.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    store::{StateBackend, STATE_KEY},
};

pub mod kv_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl StateBackend for Database {
    fn read(&self) -> Result<Option<String>> {
        self.get_value(STATE_KEY)
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.put_value(STATE_KEY, contents)
    }
}

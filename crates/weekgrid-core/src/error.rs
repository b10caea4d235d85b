//! Error types for the planner library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Day;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Task not found in the given day bucket
    #[error("Task '{id}' not found on {day}")]
    TaskNotFound { day: Day, id: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Imported planner state did not have the expected shape
    #[error("Import rejected: {reason}")]
    ImportRejected { reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PlannerError {
        PlannerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an import rejection with the given reason.
    pub fn import_rejected(reason: impl Into<String>) -> Self {
        Self::ImportRejected {
            reason: reason.into(),
        }
    }

    /// Creates a not-found error for a task in a day bucket.
    pub fn task_not_found(day: Day, id: impl Into<String>) -> Self {
        Self::TaskNotFound { day, id: id.into() }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message).with_source(e))
    }
}

/// Extension trait attaching a path to I/O failures.
pub trait FileSystemResultExt<T> {
    /// Map I/O errors to [`PlannerError::FileSystem`] for `path`.
    fn fs_context(self, path: &std::path::Path) -> Result<T>;
}

impl<T> FileSystemResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| PlannerError::FileSystem {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = PlannerError::invalid_input("slot_minutes").with_reason("must divide 60");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'slot_minutes': must divide 60"
        );
    }

    #[test]
    fn test_task_not_found_message() {
        let err = PlannerError::task_not_found(Day::Wed, "abc");
        assert_eq!(err.to_string(), "Task 'abc' not found on Wed");
    }

    #[test]
    fn test_fs_context_keeps_path() {
        let path = std::path::Path::new("/nonexistent/planner.json");
        let err = std::fs::read_to_string(path).fs_context(path).unwrap_err();
        match err {
            PlannerError::FileSystem { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }
}

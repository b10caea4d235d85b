//! One-line outcome messages for commands that have no task to show.

use std::fmt;

/// Outcome of clear, import and export, or of a gesture whose task was gone.
///
/// Rendered as `Success: <message>` or `Error: <message>`.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_outcome(true, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::with_outcome(false, message)
    }

    fn with_outcome(success: bool, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.success {
            true => "Success:",
            false => "Error:",
        };
        writeln!(f, "{label} {}", self.message)
    }
}

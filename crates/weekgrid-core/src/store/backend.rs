//! Key-value backends holding the serialized planner state.

use crate::error::Result;

/// Single-key storage for the serialized planner state.
///
/// A write replaces the whole value; a backend must either store the new value
/// completely or leave the previous one intact.
pub trait StateBackend {
    /// Reads the stored value, `None` if nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored value.
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// Backend that keeps the value in memory; used by tests and ephemeral
/// planners.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    value: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a pre-existing stored value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.value = Some(contents.to_string());
        Ok(())
    }
}

//! Task model definition.

use serde::{Deserialize, Serialize};

use super::TaskColor;

/// A scheduled block of time within one day.
///
/// `start_min` and `duration_min` are the canonical time fields: minutes since
/// the configured day-start hour and the block length. Pixel geometry is
/// always derived from them, never the other way around outside a commit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    pub id: String,

    /// Display text
    pub title: String,

    /// Color tag from the palette
    pub color: TaskColor,

    /// Minutes elapsed since the configured day start
    pub start_min: u32,

    /// Length of the block in minutes
    pub duration_min: u32,
}

impl Task {
    /// Minute at which the block ends, relative to the day start.
    pub fn end_min(&self) -> u32 {
        self.start_min + self.duration_min
    }
}

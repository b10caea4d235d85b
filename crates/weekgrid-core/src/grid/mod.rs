//! Time-grid geometry: the mapping between minutes and pixels.
//!
//! The grid is described by a [`GridConfig`] (slot size and the visible hour
//! range) and scaled to pixels by a [`TimeScale`] (pixels per slot). The scale
//! converts canonical time fields into [`Geometry`] and back, and provides the
//! snapping and clamping rules used when a gesture is committed.
//!
//! ```rust
//! use weekgrid_core::grid::{GridConfig, TimeScale};
//!
//! let scale = TimeScale::new(GridConfig::default(), 20.0);
//!
//! // 9:00 to 10:00 with a 05:00 day start
//! let geometry = scale.geometry(240, 60);
//! assert_eq!(geometry.top_px, 160.0);
//! assert_eq!(geometry.height_px, 40.0);
//!
//! // Arbitrary pixels quantize onto the 30 minute grid
//! assert_eq!(scale.pixels_to_minutes(185.0), 270);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};

pub mod scale;
pub mod snap;

pub use scale::TimeScale;
pub use snap::ResizeEdge;

/// Default slot granularity in minutes.
pub const DEFAULT_SLOT_MINUTES: u32 = 30;
/// Default first visible hour.
pub const DEFAULT_DAY_START_HOUR: u32 = 5;
/// Default end of the visible day (exclusive).
pub const DEFAULT_DAY_END_HOUR: u32 = 23;
/// Default rendered height of one slot.
pub const DEFAULT_SLOT_HEIGHT_PX: f64 = 20.0;
/// Smallest slot height the viewport rescaler will produce.
pub const MIN_SLOT_HEIGHT_PX: f64 = 12.0;

/// Clock hour at which new tasks start unless told otherwise.
pub const DEFAULT_TASK_START_HOUR: u32 = 9;
/// Length of new tasks unless told otherwise.
pub const DEFAULT_TASK_DURATION_MIN: u32 = 60;

/// Slot size and visible hour range of the day columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid granularity in minutes; divides 60
    pub slot_minutes: u32,
    /// First visible hour (inclusive)
    pub day_start_hour: u32,
    /// Last visible hour (exclusive), at most 24
    pub day_end_hour: u32,
}

impl GridConfig {
    /// Creates a validated grid configuration.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the slot size does not divide an
    /// hour or the hour range is empty or exceeds a day.
    pub fn new(slot_minutes: u32, day_start_hour: u32, day_end_hour: u32) -> Result<Self> {
        let config = Self {
            slot_minutes,
            day_start_hour,
            day_end_hour,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(PlannerError::invalid_input("slot_minutes")
                .with_reason(format!("{} does not divide an hour", self.slot_minutes)));
        }
        if self.day_end_hour > 24 {
            return Err(PlannerError::invalid_input("day_end_hour")
                .with_reason(format!("{} is past the end of the day", self.day_end_hour)));
        }
        if self.day_start_hour >= self.day_end_hour {
            return Err(PlannerError::invalid_input("day_start_hour").with_reason(format!(
                "{} is not before the end hour {}",
                self.day_start_hour, self.day_end_hour
            )));
        }
        Ok(())
    }

    /// Length of the visible day in minutes.
    pub fn day_length_min(&self) -> u32 {
        (self.day_end_hour - self.day_start_hour) * 60
    }

    /// Number of slots in the visible day.
    pub fn total_slots(&self) -> u32 {
        self.day_length_min() / self.slot_minutes
    }

    /// Rounds a minute value to the nearest slot boundary, halves rounding up.
    /// Values too large to round up stay on the slot below.
    pub fn snap_minutes(&self, minutes: u32) -> u32 {
        minutes.saturating_add(self.slot_minutes / 2) / self.slot_minutes * self.slot_minutes
    }

    /// Forces an arbitrary span onto the grid and inside the day: the duration
    /// becomes a whole number of slots (at least one), and the start is moved
    /// up if the block would run past the end of the day.
    pub fn normalize_span(&self, start_min: u32, duration_min: u32) -> (u32, u32) {
        let day = self.day_length_min();
        let duration = self
            .snap_minutes(duration_min.min(day))
            .clamp(self.slot_minutes, day);
        let start = self.snap_minutes(start_min.min(day)).min(day - duration);
        (start, duration)
    }

    /// Start offset for new tasks: 9:00, or the day start if that is later.
    pub fn default_start_min(&self) -> u32 {
        (DEFAULT_TASK_START_HOUR * 60).saturating_sub(self.day_start_hour * 60)
    }

    /// Minutes since midnight for an offset relative to the day start.
    pub fn clock_minutes(&self, offset_min: u32) -> u32 {
        self.day_start_hour * 60 + offset_min
    }

    /// Offset relative to the day start for a clock time, `None` if the time
    /// lies outside the visible day.
    pub fn offset_for_clock(&self, hour: u32, minute: u32) -> Option<u32> {
        let clock = hour * 60 + minute;
        let start = self.day_start_hour * 60;
        clock
            .checked_sub(start)
            .filter(|offset| *offset <= self.day_length_min())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            day_start_hour: DEFAULT_DAY_START_HOUR,
            day_end_hour: DEFAULT_DAY_END_HOUR,
        }
    }
}

/// Pixel placement of a task block within its day column.
///
/// Always derived from a task's canonical fields and the current scale; it is
/// a cache for the rendering layer, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub top_px: f64,
    pub height_px: f64,
}

impl Geometry {
    pub fn new(top_px: f64, height_px: f64) -> Self {
        Self { top_px, height_px }
    }

    /// Bottom edge of the block.
    pub fn bottom_px(&self) -> f64 {
        self.top_px + self.height_px
    }
}

/// One horizontal grid line of a day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Vertical offset from the top of the column
    pub top_px: f64,
    /// Minutes since midnight at this line
    pub clock_min: u32,
    /// True on full hours, which carry a label
    pub is_hour: bool,
}

//! Conversion between minutes and pixels at a given slot height.

use super::{Geometry, GridConfig, GridLine, MIN_SLOT_HEIGHT_PX};
use crate::models::Task;

/// A grid configuration rendered at a particular slot height.
///
/// The slot height is the only mutable part of the scale; it changes when the
/// viewport is resized. Minutes that are already slot-aligned survive a trip
/// through pixels unchanged; arbitrary pixel offsets quantize to the nearest
/// slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    config: GridConfig,
    slot_height_px: f64,
}

impl TimeScale {
    /// Creates a scale. A slot height that is not a positive finite number
    /// falls back to [`MIN_SLOT_HEIGHT_PX`].
    pub fn new(config: GridConfig, slot_height_px: f64) -> Self {
        Self {
            config,
            slot_height_px: usable_slot_height(slot_height_px),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Pixels per slot.
    pub fn slot_height_px(&self) -> f64 {
        self.slot_height_px
    }

    /// Changes the pixels per slot, with the same fallback as [`Self::new`].
    pub fn set_slot_height_px(&mut self, slot_height_px: f64) {
        self.slot_height_px = usable_slot_height(slot_height_px);
    }

    fn slot_minutes(&self) -> f64 {
        f64::from(self.config.slot_minutes)
    }

    /// Vertical offset for a minute offset, rounded to whole pixels.
    pub fn minutes_to_pixels(&self, minutes: u32) -> f64 {
        (f64::from(minutes) * self.slot_height_px / self.slot_minutes()).round()
    }

    /// Minute offset for a pixel offset, rounded to the nearest slot and
    /// clamped to the visible day.
    pub fn pixels_to_minutes(&self, px: f64) -> u32 {
        self.whole_slots(px)
            .saturating_mul(self.config.slot_minutes)
            .min(self.config.day_length_min())
    }

    /// Duration in minutes for a pixel height: whole slots, at least one, at
    /// most the visible day.
    pub fn duration_from_pixels(&self, px: f64) -> u32 {
        self.whole_slots(px)
            .max(1)
            .saturating_mul(self.config.slot_minutes)
            .min(self.config.day_length_min())
    }

    /// Nearest whole number of slots for a pixel distance; negative and
    /// non-finite distances count as zero.
    pub(crate) fn whole_slots(&self, px: f64) -> u32 {
        let slots = (px / self.slot_height_px).round();
        if slots.is_finite() && slots > 0.0 {
            slots as u32
        } else {
            0
        }
    }

    /// Height of the whole visible day.
    pub fn day_height_px(&self) -> f64 {
        f64::from(self.config.day_length_min()) * self.slot_height_px / self.slot_minutes()
    }

    /// Geometry for a canonical span.
    pub fn geometry(&self, start_min: u32, duration_min: u32) -> Geometry {
        Geometry {
            top_px: self.minutes_to_pixels(start_min),
            height_px: self.minutes_to_pixels(duration_min),
        }
    }

    /// Geometry for a task's canonical fields.
    pub fn task_geometry(&self, task: &Task) -> Geometry {
        self.geometry(task.start_min, task.duration_min)
    }

    /// One line per slot boundary, top to bottom, including both day edges.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        (0..=self.config.total_slots())
            .map(|slot| {
                let offset = slot * self.config.slot_minutes;
                let clock_min = self.config.clock_minutes(offset);
                GridLine {
                    top_px: f64::from(slot) * self.slot_height_px,
                    clock_min,
                    is_hour: clock_min % 60 == 0,
                }
            })
            .collect()
    }
}

fn usable_slot_height(px: f64) -> f64 {
    if px.is_finite() && px > 0.0 {
        px
    } else {
        MIN_SLOT_HEIGHT_PX
    }
}

//! Grid snapping and day-bound clamping for gesture geometry.

use super::{Geometry, TimeScale};

/// Edge of a task block being dragged by a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Top,
    Bottom,
}

impl TimeScale {
    /// Rounds a pixel offset to the nearest slot boundary.
    pub fn snap_to_slot(&self, px: f64) -> f64 {
        f64::from(self.whole_slots(px)) * self.slot_height_px()
    }

    /// Smallest height a block may be rendered at: one slot.
    pub fn min_block_height(&self) -> f64 {
        self.slot_height_px()
    }

    /// Bounds a live (unsnapped) top so a block of `height_px` stays inside the
    /// day.
    pub fn clamp_top(&self, top_px: f64, height_px: f64) -> f64 {
        let max_top = (self.day_height_px() - height_px).max(0.0);
        finite_or_zero(top_px).clamp(0.0, max_top)
    }

    /// Applies a live resize of one edge. The moved edge is bounded by the day
    /// and by the opposite edge minus one slot; the opposite edge stays put.
    pub fn clamp_resize(&self, start: Geometry, edge: ResizeEdge, edge_px: f64) -> Geometry {
        let min = self.min_block_height();
        let day = self.day_height_px();
        let edge_px = finite_or_zero(edge_px);
        match edge {
            ResizeEdge::Top => {
                let bottom = start.bottom_px().min(day);
                let top = edge_px.clamp(0.0, (bottom - min).max(0.0));
                Geometry::new(top, bottom - top)
            }
            ResizeEdge::Bottom => {
                let top = start.top_px.clamp(0.0, (day - min).max(0.0));
                let bottom = edge_px.clamp(top + min, day.max(top + min));
                Geometry::new(top, bottom - top)
            }
        }
    }

    /// The commit rule: snap height to whole slots (at least one, at most the
    /// day), snap top to the grid, then pull the top back up if the snapped
    /// block would cross the bottom of the day.
    ///
    /// Computed in whole slots so the result is exact multiples of the slot
    /// height and converts back to minutes without rounding error.
    pub fn snap_geometry(&self, raw: Geometry) -> Geometry {
        let total = self.config().total_slots();
        let height_slots = self.whole_slots(raw.height_px).clamp(1, total);
        let top_slots = self.whole_slots(raw.top_px).min(total - height_slots);
        let slot = self.slot_height_px();
        Geometry::new(f64::from(top_slots) * slot, f64::from(height_slots) * slot)
    }
}

fn finite_or_zero(px: f64) -> f64 {
    if px.is_finite() {
        px
    } else {
        0.0
    }
}

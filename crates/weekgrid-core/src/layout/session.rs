//! Interaction sessions: the Active state of a drag or resize gesture.
//!
//! A session captures the task's geometry when the gesture starts and tracks
//! the cumulative pointer delta. Every move yields a provisional geometry,
//! clamped into the day but not snapped, for the rendering layer only. The
//! session never touches the task store; dropping it without committing
//! discards the gesture.

use crate::{
    grid::{Geometry, ResizeEdge, TimeScale},
    models::Day,
};

/// An in-progress vertical drag of one task within its day.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    day: Day,
    id: String,
    start: Geometry,
    delta_y: f64,
    current: Geometry,
}

impl DragSession {
    pub(crate) fn new(day: Day, id: String, start: Geometry) -> Self {
        Self {
            day,
            id,
            start,
            delta_y: 0.0,
            current: start,
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Geometry captured at gesture start.
    pub fn start(&self) -> Geometry {
        self.start
    }

    /// Latest provisional geometry.
    pub fn provisional(&self) -> Geometry {
        self.current
    }

    /// Cumulative pointer movement since gesture start.
    pub fn delta_y(&self) -> f64 {
        self.delta_y
    }

    /// Places the block `delta_y` pixels from where it started, keeping it
    /// inside the day.
    pub fn move_to(&mut self, scale: &TimeScale, delta_y: f64) -> Geometry {
        self.delta_y = delta_y;
        let top = scale.clamp_top(self.start.top_px + delta_y, self.start.height_px);
        self.current = Geometry::new(top, self.start.height_px);
        self.current
    }

    /// Adds an incremental pointer movement to the cumulative delta.
    pub fn move_by(&mut self, scale: &TimeScale, dy: f64) -> Geometry {
        self.move_to(scale, self.delta_y + dy)
    }
}

/// An in-progress resize of one task. Top and bottom edges are tracked
/// independently; moving one leaves the other where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    day: Day,
    id: String,
    start: Geometry,
    current: Geometry,
}

impl ResizeSession {
    pub(crate) fn new(day: Day, id: String, start: Geometry) -> Self {
        Self {
            day,
            id,
            start,
            current: start,
        }
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Geometry captured at gesture start.
    pub fn start(&self) -> Geometry {
        self.start
    }

    /// Latest provisional geometry.
    pub fn provisional(&self) -> Geometry {
        self.current
    }

    /// Moves `edge` to `delta_y` pixels from its starting position.
    pub fn move_edge(&mut self, scale: &TimeScale, edge: ResizeEdge, delta_y: f64) -> Geometry {
        let edge_px = match edge {
            ResizeEdge::Top => self.start.top_px + delta_y,
            ResizeEdge::Bottom => self.start.bottom_px() + delta_y,
        };
        self.current = scale.clamp_resize(self.current, edge, edge_px);
        self.current
    }

    /// Applies an absolute rectangle reported by the gesture source, relative
    /// to the top of the day column.
    pub fn set_rect(&mut self, scale: &TimeScale, top_px: f64, height_px: f64) -> Geometry {
        let top = scale.clamp_top(top_px, scale.min_block_height());
        self.current = scale.clamp_resize(
            Geometry::new(top, 0.0),
            ResizeEdge::Bottom,
            top + height_px,
        );
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridConfig;

    fn scale() -> TimeScale {
        TimeScale::new(GridConfig::default(), 20.0)
    }

    #[test]
    fn test_drag_uses_cumulative_delta() {
        let scale = scale();
        let mut session = DragSession::new(Day::Mon, "t".to_string(), Geometry::new(160.0, 40.0));
        session.move_by(&scale, 10.0);
        let g = session.move_by(&scale, 15.0);
        assert_eq!(g, Geometry::new(185.0, 40.0));
        assert_eq!(session.delta_y(), 25.0);
        // Absolute delta replaces the accumulated one
        assert_eq!(session.move_to(&scale, -5.0), Geometry::new(155.0, 40.0));
        assert_eq!(session.start(), Geometry::new(160.0, 40.0));
    }

    #[test]
    fn test_drag_clamps_live() {
        let scale = scale();
        let mut session = DragSession::new(Day::Mon, "t".to_string(), Geometry::new(160.0, 40.0));
        assert_eq!(session.move_to(&scale, -500.0).top_px, 0.0);
        assert_eq!(session.move_to(&scale, 1000.0).top_px, 680.0);
    }

    #[test]
    fn test_resize_edges_are_independent() {
        let scale = scale();
        let mut session =
            ResizeSession::new(Day::Mon, "t".to_string(), Geometry::new(160.0, 40.0));
        let g = session.move_edge(&scale, ResizeEdge::Bottom, 7.0);
        assert_eq!(g, Geometry::new(160.0, 47.0));
        let g = session.move_edge(&scale, ResizeEdge::Top, -30.0);
        assert_eq!(g, Geometry::new(130.0, 77.0));
        // Bottom cannot rise past top + one slot
        let g = session.move_edge(&scale, ResizeEdge::Bottom, -100.0);
        assert_eq!(g, Geometry::new(130.0, 20.0));
    }

    #[test]
    fn test_resize_set_rect() {
        let scale = scale();
        let mut session =
            ResizeSession::new(Day::Mon, "t".to_string(), Geometry::new(160.0, 40.0));
        assert_eq!(
            session.set_rect(&scale, 100.0, 5.0),
            Geometry::new(100.0, 20.0)
        );
        assert_eq!(
            session.set_rect(&scale, -10.0, 900.0),
            Geometry::new(0.0, 720.0)
        );
    }
}

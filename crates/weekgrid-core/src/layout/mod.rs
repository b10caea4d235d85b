//! Layout engine: the only path from gestures to canonical task time.
//!
//! Every interaction follows the same shape:
//!
//! ```text
//! Idle ──begin──▶ Active ──move──▶ Active ──commit──▶ Committing ──▶ Idle
//!                 (session)        (provisional         (snap, clamp,
//!                                   geometry only)       write back, save)
//! ```
//!
//! `begin_*` captures the task's geometry in a session ([`DragSession`] or
//! [`ResizeSession`]). Moves update the session's provisional geometry only.
//! The commit snaps that geometry to the slot grid, clamps it into the day,
//! converts it to `start_min`/`duration_min`, writes those to the task and
//! persists the store. Committing the same canonical geometry again yields the
//! same result.
//!
//! Moving a task to another day is a separate operation,
//! [`LayoutEngine::move_to_day`], that ends in the same commit step.

use log::debug;

use crate::{
    error::Result,
    grid::{Geometry, TimeScale},
    models::Day,
    store::TaskStore,
};

pub mod session;

#[cfg(test)]
mod tests;

pub use session::{DragSession, ResizeSession};

/// Converts gestures into canonical task fields using a [`TimeScale`].
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    scale: TimeScale,
}

impl LayoutEngine {
    pub fn new(scale: TimeScale) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &TimeScale {
        &self.scale
    }

    /// Mutable access for the viewport rescaler.
    pub fn scale_mut(&mut self) -> &mut TimeScale {
        &mut self.scale
    }

    /// Current geometry of a task, derived from its canonical fields.
    pub fn geometry_of(&self, store: &TaskStore, day: Day, id: &str) -> Option<Geometry> {
        store
            .task(day, id)
            .map(|task| self.scale.task_geometry(task))
    }

    /// Starts a drag. `None` if the task does not exist.
    pub fn begin_drag(&self, store: &TaskStore, day: Day, id: &str) -> Option<DragSession> {
        let start = self.geometry_of(store, day, id)?;
        Some(DragSession::new(day, id.to_string(), start))
    }

    /// Starts a resize. `None` if the task does not exist.
    pub fn begin_resize(&self, store: &TaskStore, day: Day, id: &str) -> Option<ResizeSession> {
        let start = self.geometry_of(store, day, id)?;
        Some(ResizeSession::new(day, id.to_string(), start))
    }

    /// Ends a drag: snaps the provisional geometry and writes it back.
    /// Returns the committed geometry, or `None` if the task disappeared while
    /// the gesture was active.
    pub fn commit_drag(
        &self,
        store: &mut TaskStore,
        session: &DragSession,
    ) -> Result<Option<Geometry>> {
        self.commit(store, session.day(), session.id(), session.provisional())
    }

    /// Ends a resize: snaps top and height and writes them back.
    pub fn commit_resize(
        &self,
        store: &mut TaskStore,
        session: &ResizeSession,
    ) -> Result<Option<Geometry>> {
        self.commit(store, session.day(), session.id(), session.provisional())
    }

    /// Re-runs the commit step on a task's current canonical geometry.
    pub fn settle(&self, store: &mut TaskStore, day: Day, id: &str) -> Result<Option<Geometry>> {
        let Some(current) = self.geometry_of(store, day, id) else {
            return Ok(None);
        };
        self.commit(store, day, id, current)
    }

    /// Handles a release of task `id` over another day's column.
    ///
    /// `drop_offset_px` is the pointer position relative to the top of the
    /// destination column, `scroll_offset_px` that column's scroll position.
    /// The task moves to the end of the destination bucket and is placed at
    /// the drop point, snapped like a drag. If the task is not in `from`,
    /// nothing changes and `None` is returned. Releasing over the task's own
    /// day is not a move and leaves the task as it is.
    pub fn move_to_day(
        &self,
        store: &mut TaskStore,
        from: Day,
        to: Day,
        id: &str,
        drop_offset_px: f64,
        scroll_offset_px: f64,
    ) -> Result<Option<Geometry>> {
        if from == to {
            return Ok(self.geometry_of(store, from, id));
        }

        let local_y = drop_offset_px + scroll_offset_px;
        let Some(task) = store.move_task(from, to, id) else {
            debug!("Task {id} not found on {from}, drop on {to} ignored");
            return Ok(None);
        };

        let height = self.scale.minutes_to_pixels(task.duration_min);
        let max_top = (self.scale.day_height_px() - self.scale.min_block_height()).max(0.0);
        let top = if local_y.is_finite() {
            local_y.clamp(0.0, max_top)
        } else {
            0.0
        };

        self.commit(store, to, id, Geometry::new(top, height))
    }

    /// The Committing step shared by every gesture.
    fn commit(
        &self,
        store: &mut TaskStore,
        day: Day,
        id: &str,
        provisional: Geometry,
    ) -> Result<Option<Geometry>> {
        let snapped = self.scale.snap_geometry(provisional);
        let Some(task) = store.task_mut(day, id) else {
            debug!("Task {id} vanished from {day} before commit");
            return Ok(None);
        };

        task.start_min = self.scale.pixels_to_minutes(snapped.top_px);
        task.duration_min = self.scale.duration_from_pixels(snapped.height_px);
        let committed = self.scale.task_geometry(task);
        debug!(
            "Committed task {id} on {day}: start {} duration {}",
            task.start_min, task.duration_min
        );

        store.save()?;
        Ok(Some(committed))
    }
}

//! Gesture operations for the Planner.
//!
//! Each method here runs one whole interaction (start, move, release) through
//! the layout engine, for front ends that report a gesture only once it is
//! finished. Interactive front ends drive the sessions themselves via
//! [`Planner::interact`].

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    grid::Geometry,
    params::{DragTask, MoveTask, ResizeTask},
    viewport::{self, WeekLayout},
};

impl Planner {
    /// Drags a task vertically within its day by `delta_y` pixels and commits
    /// the snapped position.
    pub fn drag_task(&mut self, params: &DragTask) -> Result<Geometry> {
        let (day, id) = (params.task.day, params.task.id.as_str());
        let mut session = self
            .engine
            .begin_drag(&self.store, day, id)
            .ok_or_else(|| PlannerError::task_not_found(day, id))?;
        session.move_to(self.engine.scale(), params.delta_y);
        self.engine
            .commit_drag(&mut self.store, &session)?
            .ok_or_else(|| PlannerError::task_not_found(day, id))
    }

    /// Moves one edge of a task by `delta_y` pixels and commits the snapped
    /// size.
    pub fn resize_task(&mut self, params: &ResizeTask) -> Result<Geometry> {
        let (day, id) = (params.task.day, params.task.id.as_str());
        let mut session = self
            .engine
            .begin_resize(&self.store, day, id)
            .ok_or_else(|| PlannerError::task_not_found(day, id))?;
        session.move_edge(self.engine.scale(), params.edge, params.delta_y);
        self.engine
            .commit_resize(&mut self.store, &session)?
            .ok_or_else(|| PlannerError::task_not_found(day, id))
    }

    /// Drops a task onto another day. `None` if the task was not on its
    /// source day; both days are then left unchanged.
    pub fn move_task(&mut self, params: &MoveTask) -> Result<Option<Geometry>> {
        self.engine.move_to_day(
            &mut self.store,
            params.task.day,
            params.to,
            &params.task.id,
            params.drop_offset_px,
            params.scroll_offset_px,
        )
    }

    /// Geometry of every task at the current scale.
    pub fn layout(&self) -> WeekLayout {
        viewport::layout(self.engine.scale(), self.store.state())
    }

    /// Fits the day into `available_px` and lays out every task again.
    pub fn rescale(&mut self, available_px: f64) -> WeekLayout {
        self.rescaler
            .rescale(self.engine.scale_mut(), self.store.state(), available_px)
    }
}

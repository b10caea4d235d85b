//! Viewport rescaling: fitting the day to the available height.
//!
//! When the space available for the day columns changes, the slot height is
//! recomputed and every task's geometry is derived again from its canonical
//! `start_min`/`duration_min`. Geometry is never derived from previous
//! geometry, so repeated resizes cannot accumulate rounding drift: after any
//! sequence of rescales a task's placement depends only on its stored time and
//! the current scale.

use log::debug;

use crate::{
    grid::{Geometry, GridLine, TimeScale, MIN_SLOT_HEIGHT_PX},
    models::{Day, PlannerState},
};

/// Placement of one task in the week layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTask {
    pub day: Day,
    pub id: String,
    pub geometry: Geometry,
}

/// Everything the rendering layer needs to draw the week at one scale.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub slot_height_px: f64,
    pub day_height_px: f64,
    pub grid_lines: Vec<GridLine>,
    pub tasks: Vec<PlacedTask>,
}

impl WeekLayout {
    /// Placement of the task with `id`, if it is in the layout.
    pub fn placement(&self, id: &str) -> Option<&PlacedTask> {
        self.tasks.iter().find(|placed| placed.id == id)
    }

    /// Placements on one day, in bucket order.
    pub fn day(&self, day: Day) -> impl Iterator<Item = &PlacedTask> {
        self.tasks.iter().filter(move |placed| placed.day == day)
    }
}

/// Recomputes the scale from available space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportRescaler {
    floor_px: f64,
}

impl ViewportRescaler {
    /// Creates a rescaler that never produces slots shorter than `floor_px`.
    pub fn new(floor_px: f64) -> Self {
        let floor_px = if floor_px.is_finite() && floor_px > 0.0 {
            floor_px
        } else {
            MIN_SLOT_HEIGHT_PX
        };
        Self { floor_px }
    }

    pub fn floor_px(&self) -> f64 {
        self.floor_px
    }

    /// Slot height that fits the whole day into `available_px`, but no less
    /// than the floor. Unusable measurements fall back to the floor.
    pub fn slot_height_for(&self, scale: &TimeScale, available_px: f64) -> f64 {
        let slots = f64::from(scale.config().total_slots());
        let fitted = available_px / slots;
        if fitted.is_finite() {
            fitted.max(self.floor_px)
        } else {
            self.floor_px
        }
    }

    /// Updates `scale` for `available_px` and lays out every task again from
    /// its canonical time fields.
    pub fn rescale(
        &self,
        scale: &mut TimeScale,
        state: &PlannerState,
        available_px: f64,
    ) -> WeekLayout {
        let slot_height = self.slot_height_for(scale, available_px);
        debug!("Rescaling for {available_px}px: slot height {slot_height}px");
        scale.set_slot_height_px(slot_height);
        layout(scale, state)
    }
}

impl Default for ViewportRescaler {
    fn default() -> Self {
        Self::new(MIN_SLOT_HEIGHT_PX)
    }
}

/// Lays out every task at the current scale.
pub fn layout(scale: &TimeScale, state: &PlannerState) -> WeekLayout {
    let tasks = state
        .buckets()
        .flat_map(|(day, tasks)| {
            tasks.iter().map(move |task| PlacedTask {
                day,
                id: task.id.clone(),
                geometry: scale.task_geometry(task),
            })
        })
        .collect();

    WeekLayout {
        slot_height_px: scale.slot_height_px(),
        day_height_px: scale.day_height_px(),
        grid_lines: scale.grid_lines(),
        tasks,
    }
}

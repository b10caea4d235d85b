//! High-level planner API.
//!
//! [`Planner`] ties together the [`TaskStore`], the [`LayoutEngine`] and the
//! [`ViewportRescaler`], and exposes the operations a front end wires to its
//! controls. Each operation runs to completion and persists the full state
//! before returning.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Planner      │    │  LayoutEngine   │    │   TaskStore     │
//! │ (task_ops,      │───▶│  (sessions,     │───▶│ (state, save    │
//! │  gesture_ops)   │    │   commit)       │    │  via backend)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`task_ops`]: add, rename, recolor, remove, clear, import and export
//! - [`gesture_ops`]: drag, resize, cross-day move, layout and rescale
//!
//! # Usage
//!
//! ```rust
//! use weekgrid_core::{
//!     models::Day,
//!     params::{DragTask, NewTask, TaskRef},
//!     PlannerBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new().in_memory().build()?;
//!
//! let task = planner.add_task(Day::Mon, NewTask::default())?;
//! let geometry = planner.drag_task(&DragTask {
//!     task: TaskRef::new(Day::Mon, &task.id),
//!     delta_y: 25.0,
//! })?;
//! assert_eq!(geometry.top_px, 180.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod gesture_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

use crate::{
    grid::{GridConfig, TimeScale},
    layout::LayoutEngine,
    models::PlannerState,
    store::TaskStore,
    viewport::ViewportRescaler,
};

/// Main planner interface.
pub struct Planner {
    store: TaskStore,
    engine: LayoutEngine,
    rescaler: ViewportRescaler,
}

impl Planner {
    pub(crate) fn new(store: TaskStore, engine: LayoutEngine, rescaler: ViewportRescaler) -> Self {
        Self {
            store,
            engine,
            rescaler,
        }
    }

    pub fn state(&self) -> &PlannerState {
        self.store.state()
    }

    pub fn config(&self) -> &GridConfig {
        self.store.config()
    }

    pub fn scale(&self) -> &TimeScale {
        self.engine.scale()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// The layout engine and the store it commits to, for clients that drive
    /// gesture sessions themselves.
    pub fn interact(&mut self) -> (&LayoutEngine, &mut TaskStore) {
        (&self.engine, &mut self.store)
    }
}

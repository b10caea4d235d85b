//! Core library for the Weekgrid weekly time-block planner.
//!
//! This crate provides the business logic behind a seven-day grid of
//! time-blocked tasks: the task data model, the minute/pixel conversion that
//! keeps every block on the slot grid, drag and resize sessions that snap on
//! release, cross-day moves, viewport-driven rescaling and persistence of the
//! whole week as one JSON document.
//!
//! # Architecture
//!
//! - **Grid** ([`grid`]): [`GridConfig`] holds the slot size and visible hours;
//!   [`TimeScale`] converts between minutes and pixels at the current slot
//!   height and snaps geometry back onto the grid
//! - **Store** ([`store`]): [`TaskStore`] owns the [`PlannerState`] and writes
//!   it through a [`StateBackend`], by default the SQLite [`Database`]
//! - **Layout** ([`layout`]): [`LayoutEngine`] runs drag and resize sessions
//!   and commits their snapped result to the store
//! - **Viewport** ([`viewport`]): [`ViewportRescaler`] fits the day into the
//!   available height and re-derives every task's geometry
//! - **Display Wrappers** ([`display`]): markdown formatting for terminal
//!   front ends
//!
//! Minutes are the canonical representation. Pixel geometry is always derived
//! from `start_min` and `duration_min` at the current scale and never stored.
//!
//! # Quick Start
//!
//! ```rust
//! use weekgrid_core::{
//!     models::Day,
//!     params::{NewTask, ResizeTask, TaskRef},
//!     PlannerBuilder, ResizeEdge,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut planner = PlannerBuilder::new().in_memory().build()?;
//!
//! let task = planner.add_task(
//!     Day::Wed,
//!     NewTask {
//!         title: Some("Design review".to_string()),
//!         ..Default::default()
//!     },
//! )?;
//!
//! // Pull the bottom edge down by a little over one slot.
//! let geometry = planner.resize_task(&ResizeTask {
//!     task: TaskRef::new(Day::Wed, &task.id),
//!     edge: ResizeEdge::Bottom,
//!     delta_y: 27.0,
//! })?;
//! assert_eq!(geometry.height_px, 60.0);
//!
//! let layout = planner.layout();
//! assert_eq!(layout.tasks.len(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod grid;
pub mod layout;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;
pub mod viewport;

// Re-export commonly used types
pub use db::Database;
pub use display::{DayAgenda, LayoutTable, OperationStatus, TaskResult, WeekAgenda};
pub use error::{PlannerError, Result};
pub use grid::{Geometry, GridConfig, ResizeEdge, TimeScale};
pub use layout::{DragSession, LayoutEngine, ResizeSession};
pub use models::{Day, PlannerState, Task, TaskColor};
pub use params::{DragTask, MoveTask, NewTask, RecolorTask, RenameTask, ResizeTask, TaskRef};
pub use planner::{Planner, PlannerBuilder};
pub use store::{MemoryBackend, StateBackend, TaskStore};
pub use viewport::{ViewportRescaler, WeekLayout};

//! Parameter structures for planner operations.
//!
//! Plain structures shared by the interfaces that drive the planner (the CLI
//! today), free of any framework-specific derives. Interface layers define
//! their own argument types and convert into these before calling the planner.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Planner      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    grid::ResizeEdge,
    models::{Day, TaskColor},
};

/// Fields for a new task. Anything left as `None` takes the planner default:
/// "New Task", yellow, 9:00, one hour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub color: Option<TaskColor>,
    /// Minutes since the day start
    pub start_min: Option<u32>,
    pub duration_min: Option<u32>,
}

/// Identifies one task within its day bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRef {
    pub day: Day,
    pub id: String,
}

impl TaskRef {
    pub fn new(day: Day, id: impl Into<String>) -> Self {
        Self { day, id: id.into() }
    }
}

/// Parameters for renaming a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameTask {
    pub task: TaskRef,
    pub title: String,
}

/// Parameters for recoloring a task. Without an explicit color the palette
/// advances by one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecolorTask {
    pub task: TaskRef,
    pub color: Option<TaskColor>,
}

/// A complete vertical drag within the task's own day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragTask {
    pub task: TaskRef,
    /// Cumulative vertical pointer movement in pixels
    pub delta_y: f64,
}

/// A complete resize of one edge of a task.
#[derive(Debug, Clone)]
pub struct ResizeTask {
    pub task: TaskRef,
    pub edge: ResizeEdge,
    /// Cumulative movement of the edge in pixels
    pub delta_y: f64,
}

/// A release over another day's column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveTask {
    pub task: TaskRef,
    pub to: Day,
    /// Pointer offset from the top of the destination column
    pub drop_offset_px: f64,
    /// Scroll offset of the destination column
    #[serde(default)]
    pub scroll_offset_px: f64,
}

//! Data models for tasks and the weekly planner state.
//!
//! This module contains the persisted domain models of the planner:
//!
//! - [`Task`]: a block of time within one day, carrying the canonical time
//!   fields `start_min` and `duration_min`
//! - [`Day`]: the seven fixed day columns
//! - [`TaskColor`]: the color palette, with passthrough for unknown values
//! - [`PlannerState`]: the per-day buckets, the sole persisted aggregate
//!
//! Pixel geometry is not a model; it lives in [`crate::grid`] and is always
//! derived from the canonical fields.
//!
//! # Persisted format
//!
//! ```rust
//! use weekgrid_core::models::{Day, PlannerState};
//!
//! let json = r#"{"Mon": [{"id": "a", "title": "Standup", "color": "bg-blue-200",
//!                "startMin": 240, "durationMin": 30}]}"#;
//! let state: PlannerState = serde_json::from_str(json).unwrap();
//!
//! // Missing days are present and empty
//! assert_eq!(state.bucket(Day::Mon).len(), 1);
//! assert!(state.bucket(Day::Sun).is_empty());
//! ```

pub mod color;
pub mod day;
pub mod state;
pub mod task;


pub use color::TaskColor;
pub use day::Day;
pub use state::PlannerState;
pub use task::Task;

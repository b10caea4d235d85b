//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::TaskLine;
use crate::{
    grid::GridConfig,
    models::{Day, Task},
};

/// Wrapper for displaying a task after an operation changed it.
///
/// Formats a one-line summary (`Added task on Mon`) followed by the task as
/// it now stands.
///
/// ```rust
/// use weekgrid_core::{
///     display::TaskResult,
///     grid::GridConfig,
///     models::{Day, Task, TaskColor},
/// };
///
/// let task = Task {
///     id: "a1".to_string(),
///     title: "Standup".to_string(),
///     color: TaskColor::Blue,
///     start_min: 240,
///     duration_min: 30,
/// };
/// let config = GridConfig::default();
/// let output = TaskResult::new("Added", Day::Mon, &task, &config).to_string();
/// assert!(output.contains("Added task on Mon"));
/// assert!(output.contains("09:00–09:30"));
/// ```
pub struct TaskResult<'a> {
    pub action: &'a str,
    pub day: Day,
    pub task: &'a Task,
    pub config: &'a GridConfig,
}

impl<'a> TaskResult<'a> {
    pub fn new(action: &'a str, day: Day, task: &'a Task, config: &'a GridConfig) -> Self {
        Self {
            action,
            day,
            task,
            config,
        }
    }
}

impl fmt::Display for TaskResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} task on {}", self.action, self.day)?;
        writeln!(f)?;
        write!(f, "{}", TaskLine::new(self.config, self.task))
    }
}

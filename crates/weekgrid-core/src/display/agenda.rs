//! Agenda views: tasks listed by day with their clock times.

use std::fmt;

use super::ClockTime;
use crate::{
    grid::GridConfig,
    models::{Day, PlannerState, Task},
};

/// One task as a markdown list item:
/// `- 09:00–10:00 **Title** (yellow) ` followed by the id in backticks.
pub struct TaskLine<'a> {
    pub config: &'a GridConfig,
    pub task: &'a Task,
}

impl<'a> TaskLine<'a> {
    pub fn new(config: &'a GridConfig, task: &'a Task) -> Self {
        Self { config, task }
    }
}

impl fmt::Display for TaskLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = ClockTime(self.config.clock_minutes(self.task.start_min));
        let end = ClockTime(self.config.clock_minutes(self.task.end_min()));
        writeln!(
            f,
            "- {start}–{end} **{}** ({}) `{}`",
            self.task.title, self.task.color, self.task.id
        )
    }
}

/// The tasks of one day, earliest first.
pub struct DayAgenda<'a> {
    pub config: &'a GridConfig,
    pub day: Day,
    pub tasks: &'a [Task],
}

impl fmt::Display for DayAgenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.day)?;
        writeln!(f)?;
        if self.tasks.is_empty() {
            return writeln!(f, "No tasks.");
        }
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by_key(|task| (task.start_min, task.duration_min));
        for task in sorted {
            write!(f, "{}", TaskLine::new(self.config, task))?;
        }
        Ok(())
    }
}

/// All seven days in column order.
pub struct WeekAgenda<'a> {
    pub config: &'a GridConfig,
    pub state: &'a PlannerState,
}

impl fmt::Display for WeekAgenda<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (day, tasks)) in self.state.buckets().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}",
                DayAgenda {
                    config: self.config,
                    day,
                    tasks,
                }
            )?;
        }
        Ok(())
    }
}

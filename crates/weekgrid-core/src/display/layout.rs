//! Geometry table for a week layout.

use std::fmt;

use super::HourLabel;
use crate::{models::PlannerState, viewport::WeekLayout};

/// Markdown table of every task's pixel placement, with the scale and hour
/// grid used to compute it.
pub struct LayoutTable<'a> {
    pub layout: &'a WeekLayout,
    pub state: &'a PlannerState,
}

impl fmt::Display for LayoutTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Layout")?;
        writeln!(f)?;
        writeln!(
            f,
            "Slot height: {}px, day height: {}px",
            self.layout.slot_height_px, self.layout.day_height_px
        )?;

        let hours: Vec<String> = self
            .layout
            .grid_lines
            .iter()
            .filter(|line| line.is_hour)
            .map(|line| format!("{} @ {}px", HourLabel(line.clock_min), line.top_px))
            .collect();
        writeln!(f, "Hours: {}", hours.join(", "))?;
        writeln!(f)?;

        if self.layout.tasks.is_empty() {
            return writeln!(f, "No tasks.");
        }

        writeln!(f, "| Day | Task | Top | Height |")?;
        writeln!(f, "|-----|------|-----|--------|")?;
        for placed in &self.layout.tasks {
            let title = self
                .state
                .bucket(placed.day)
                .iter()
                .find(|task| task.id == placed.id)
                .map_or("?", |task| task.title.as_str());
            writeln!(
                f,
                "| {} | {} | {}px | {}px |",
                placed.day, title, placed.geometry.top_px, placed.geometry.height_px
            )?;
        }
        Ok(())
    }
}

//! Command-line interface definitions using clap
//!
//! Argument structures stay in the CLI crate and are converted into the core
//! parameter types before any planner call:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Commands that name a task take an id or an unambiguous id prefix. The
//! task's day is looked up by the planner, so the conversion into core
//! parameters receives the resolved [`TaskRef`] alongside the arguments.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use weekgrid_core::{
    models::{Day, TaskColor},
    params::{DragTask, MoveTask, NewTask, RecolorTask, RenameTask, ResizeTask, TaskRef},
    GridConfig, ResizeEdge,
};

/// Weekly time-block planner
///
/// Weekgrid keeps a seven-day grid of tasks, each occupying whole 30 minute
/// slots between 05:00 and 23:00. Tasks can be dragged, resized and moved
/// between days with the same snapping rules as the graphical grid.
#[derive(Parser)]
#[command(version, about, name = "wg")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/weekgrid/weekgrid.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Rendered height of one slot in pixels
    #[arg(long, global = true)]
    pub slot_height: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Weekgrid CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to a day
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// Show the tasks of the week or of one day
    #[command(alias = "ls")]
    List(ListArgs),
    /// Change a task's title
    Rename(RenameArgs),
    /// Set a task's color, or cycle to the next palette color
    Color(ColorArgs),
    /// Drag a task up or down within its day
    Drag(DragArgs),
    /// Move the top or bottom edge of a task
    Resize(ResizeArgs),
    /// Drop a task onto another day
    #[command(alias = "mv")]
    Move(MoveArgs),
    /// Delete a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),
    /// Delete every task
    Clear(ClearArgs),
    /// Write the whole planner to a JSON file
    Export(FileArgs),
    /// Replace the whole planner with a JSON file
    Import(FileArgs),
    /// Show the pixel placement of every task
    Layout(LayoutArgs),
}

/// Add a task
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Day to add the task to (Mon..Sun)
    pub day: Day,
    /// Title of the task
    pub title: Option<String>,
    /// Start time as HH:MM; defaults to 09:00
    #[arg(long, value_parser = parse_clock)]
    pub at: Option<(u32, u32)>,
    /// Duration in minutes, rounded to whole slots
    #[arg(short, long)]
    pub duration: Option<u32>,
    /// Palette color (yellow, blue, green, pink, purple, orange)
    #[arg(short, long)]
    pub color: Option<TaskColor>,
}

impl AddTaskArgs {
    /// Converts the arguments into core parameters, placing `--at` on the grid
    /// described by `config`.
    pub fn into_params(self, config: &GridConfig) -> Result<(Day, NewTask), String> {
        let start_min = match self.at {
            Some((hour, minute)) => Some(config.offset_for_clock(hour, minute).ok_or_else(
                || {
                    format!(
                        "{hour:02}:{minute:02} is outside the visible day \
                         ({:02}:00–{:02}:00)",
                        config.day_start_hour, config.day_end_hour
                    )
                },
            )?),
            None => None,
        };
        Ok((
            self.day,
            NewTask {
                title: self.title,
                color: self.color,
                start_min,
                duration_min: self.duration,
            },
        ))
    }
}

/// Parses `HH:MM` into an hour and a minute.
fn parse_clock(s: &str) -> Result<(u32, u32), String> {
    let (hour, minute) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid time '{s}', expected HH:MM"))?;
    let hour: u32 = hour
        .parse()
        .map_err(|_| format!("Invalid hour in '{s}'"))?;
    let minute: u32 = minute
        .parse()
        .map_err(|_| format!("Invalid minute in '{s}'"))?;
    if hour > 24 || minute > 59 || (hour == 24 && minute > 0) {
        return Err(format!("Invalid time '{s}'"));
    }
    Ok((hour, minute))
}

/// List tasks
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only show this day
    pub day: Option<Day>,
}

/// Rename a task
#[derive(ClapArgs)]
pub struct RenameArgs {
    /// Task id or unique id prefix
    pub id: String,
    /// New title; blank titles are ignored
    pub title: String,
}

impl RenameArgs {
    pub fn into_params(self, task: TaskRef) -> RenameTask {
        RenameTask {
            task,
            title: self.title,
        }
    }
}

/// Recolor a task
#[derive(ClapArgs)]
pub struct ColorArgs {
    /// Task id or unique id prefix
    pub id: String,
    /// Palette color; omit to cycle to the next one
    pub color: Option<TaskColor>,
}

impl ColorArgs {
    pub fn into_params(self, task: TaskRef) -> RecolorTask {
        RecolorTask {
            task,
            color: self.color,
        }
    }
}

/// Drag a task
#[derive(ClapArgs)]
pub struct DragArgs {
    /// Task id or unique id prefix
    pub id: String,
    /// Vertical distance in pixels; negative moves up
    #[arg(allow_negative_numbers = true)]
    pub delta: f64,
}

impl DragArgs {
    pub fn into_params(self, task: TaskRef) -> DragTask {
        DragTask {
            task,
            delta_y: self.delta,
        }
    }
}

/// Which edge a resize moves
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum EdgeArg {
    Top,
    Bottom,
}

impl From<EdgeArg> for ResizeEdge {
    fn from(val: EdgeArg) -> Self {
        match val {
            EdgeArg::Top => ResizeEdge::Top,
            EdgeArg::Bottom => ResizeEdge::Bottom,
        }
    }
}

/// Resize a task
#[derive(ClapArgs)]
pub struct ResizeArgs {
    /// Task id or unique id prefix
    pub id: String,
    /// Edge to move
    #[arg(value_enum)]
    pub edge: EdgeArg,
    /// Vertical distance in pixels; negative moves up
    #[arg(allow_negative_numbers = true)]
    pub delta: f64,
}

impl ResizeArgs {
    pub fn into_params(self, task: TaskRef) -> ResizeTask {
        ResizeTask {
            task,
            edge: self.edge.into(),
            delta_y: self.delta,
        }
    }
}

/// Move a task to another day
#[derive(ClapArgs)]
pub struct MoveArgs {
    /// Task id or unique id prefix
    pub id: String,
    /// Destination day
    pub to: Day,
    /// Drop position in pixels from the top of the destination column
    #[arg(long, default_value_t = 0.0)]
    pub offset: f64,
    /// Scroll position of the destination column in pixels
    #[arg(long, default_value_t = 0.0)]
    pub scroll: f64,
}

impl MoveArgs {
    pub fn into_params(self, task: TaskRef) -> MoveTask {
        MoveTask {
            task,
            to: self.to,
            drop_offset_px: self.offset,
            scroll_offset_px: self.scroll,
        }
    }
}

/// Remove a task
#[derive(ClapArgs)]
pub struct RemoveArgs {
    /// Task id or unique id prefix
    pub id: String,
}

/// Delete every task
#[derive(ClapArgs)]
pub struct ClearArgs {
    /// Required to actually delete anything
    #[arg(long)]
    pub confirm: bool,
}

/// File argument for import and export
#[derive(ClapArgs)]
pub struct FileArgs {
    /// Path to the JSON file
    pub file: PathBuf,
}

/// Show the layout
#[derive(ClapArgs)]
pub struct LayoutArgs {
    /// Fit the day into this many pixels before laying out
    #[arg(long)]
    pub viewport_height: Option<f64>,
}

//! Command handlers for the CLI.
//!
//! [`Cli`] owns the planner and the renderer for the duration of one command.
//! Each handler converts its arguments into core parameters, runs the planner
//! operation and renders the result through the core display wrappers.

use anyhow::Result;
use log::debug;
use weekgrid_core::{
    display::{DayAgenda, LayoutTable, OperationStatus, TaskResult, WeekAgenda},
    models::{Day, Task},
    Planner, PlannerError,
};

use crate::{
    args::{
        AddTaskArgs, ClearArgs, ColorArgs, Commands, DragArgs, FileArgs, LayoutArgs, ListArgs,
        MoveArgs, RemoveArgs, RenameArgs, ResizeArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub fn handle_command(mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add(args) => self.add_task(args),
            Commands::List(args) => self.list(&args),
            Commands::Rename(args) => self.rename_task(args),
            Commands::Color(args) => self.recolor_task(args),
            Commands::Drag(args) => self.drag_task(args),
            Commands::Resize(args) => self.resize_task(args),
            Commands::Move(args) => self.move_task(args),
            Commands::Remove(args) => self.remove_task(&args),
            Commands::Clear(args) => self.clear(&args),
            Commands::Export(args) => self.export(&args),
            Commands::Import(args) => self.import(&args),
            Commands::Layout(args) => self.layout(&args),
        }
    }

    fn add_task(&mut self, args: AddTaskArgs) -> Result<()> {
        let (day, params) = args
            .into_params(self.planner.config())
            .map_err(|reason| PlannerError::invalid_input("at").with_reason(reason))?;
        let task = self.planner.add_task(day, params)?;
        self.render_task("Added", day, &task)
    }

    pub fn list(&self, args: &ListArgs) -> Result<()> {
        let config = self.planner.config();
        let state = self.planner.state();
        let output = match args.day {
            Some(day) => DayAgenda {
                config,
                day,
                tasks: state.bucket(day),
            }
            .to_string(),
            None => WeekAgenda { config, state }.to_string(),
        };
        self.renderer.render(&output)
    }

    fn rename_task(&mut self, args: RenameArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let day = task_ref.day;
        let task = self.planner.rename_task(&args.into_params(task_ref))?;
        self.render_task("Renamed", day, &task)
    }

    fn recolor_task(&mut self, args: ColorArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let day = task_ref.day;
        let task = self.planner.recolor_task(&args.into_params(task_ref))?;
        self.render_task("Recolored", day, &task)
    }

    fn drag_task(&mut self, args: DragArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let (day, id) = (task_ref.day, task_ref.id.clone());
        let geometry = self.planner.drag_task(&args.into_params(task_ref))?;
        debug!("Task {id} now at {}px", geometry.top_px);
        self.render_stored("Dragged", day, &id)
    }

    fn resize_task(&mut self, args: ResizeArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let (day, id) = (task_ref.day, task_ref.id.clone());
        let geometry = self.planner.resize_task(&args.into_params(task_ref))?;
        debug!("Task {id} now {}px tall", geometry.height_px);
        self.render_stored("Resized", day, &id)
    }

    fn move_task(&mut self, args: MoveArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let (to, id) = (args.to, task_ref.id.clone());
        match self.planner.move_task(&args.into_params(task_ref))? {
            Some(_) => self.render_stored("Moved", to, &id),
            None => self.render_status(&OperationStatus::failure(format!("Task {id} not found"))),
        }
    }

    fn remove_task(&mut self, args: &RemoveArgs) -> Result<()> {
        let task_ref = self.planner.resolve(&args.id)?;
        let day = task_ref.day;
        match self.planner.remove_task(&task_ref)? {
            Some(task) => self.render_task("Removed", day, &task),
            None => self.render_status(&OperationStatus::failure(format!(
                "Task {} not found",
                task_ref.id
            ))),
        }
    }

    fn clear(&mut self, args: &ClearArgs) -> Result<()> {
        if !args.confirm {
            return Err(PlannerError::invalid_input("confirm")
                .with_reason("Clearing requires --confirm")
                .into());
        }
        let count = self.planner.state().task_count();
        self.planner.clear()?;
        self.render_status(&OperationStatus::success(format!("Cleared {count} tasks")))
    }

    fn export(&self, args: &FileArgs) -> Result<()> {
        self.planner.export_to(&args.file)?;
        self.render_status(&OperationStatus::success(format!(
            "Exported {} tasks to {}",
            self.planner.state().task_count(),
            args.file.display()
        )))
    }

    fn import(&mut self, args: &FileArgs) -> Result<()> {
        let count = self.planner.import_from(&args.file)?;
        self.render_status(&OperationStatus::success(format!(
            "Imported {count} tasks from {}",
            args.file.display()
        )))
    }

    fn layout(&mut self, args: &LayoutArgs) -> Result<()> {
        let layout = match args.viewport_height {
            Some(available) => self.planner.rescale(available),
            None => self.planner.layout(),
        };
        let output = LayoutTable {
            layout: &layout,
            state: self.planner.state(),
        }
        .to_string();
        self.renderer.render(&output)
    }

    fn render_task(&self, action: &str, day: Day, task: &Task) -> Result<()> {
        let output = TaskResult::new(action, day, task, self.planner.config()).to_string();
        self.renderer.render(&output)
    }

    fn render_stored(&self, action: &str, day: Day, id: &str) -> Result<()> {
        match self.planner.store().task(day, id) {
            Some(task) => self.render_task(action, day, task),
            None => Err(PlannerError::task_not_found(day, id).into()),
        }
    }

    fn render_status(&self, status: &OperationStatus) -> Result<()> {
        self.renderer.render(&status.to_string())
    }
}

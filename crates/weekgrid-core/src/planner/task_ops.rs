//! Task operations for the Planner: field edits, bulk replacement and
//! import/export.

use std::path::Path;

use log::info;

use super::Planner;
use crate::{
    error::{FileSystemResultExt, PlannerError, Result},
    models::{Day, Task},
    params::{NewTask, RecolorTask, RenameTask, TaskRef},
};

impl Planner {
    /// Finds a task by exact id or by an unambiguous id prefix.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if nothing matches or the prefix
    /// matches more than one task.
    pub fn resolve(&self, id_or_prefix: &str) -> Result<TaskRef> {
        if let Some((day, task)) = self.store.find(id_or_prefix) {
            return Ok(TaskRef::new(day, &task.id));
        }

        let matches: Vec<TaskRef> = self
            .state()
            .buckets()
            .flat_map(|(day, tasks)| {
                tasks
                    .iter()
                    .filter(|task| !id_or_prefix.is_empty() && task.id.starts_with(id_or_prefix))
                    .map(move |task| TaskRef::new(day, &task.id))
            })
            .collect();

        match matches.as_slice() {
            [only] => Ok(only.clone()),
            [] => Err(PlannerError::invalid_input("id")
                .with_reason(format!("no task matches '{id_or_prefix}'"))),
            many => Err(PlannerError::invalid_input("id")
                .with_reason(format!("'{id_or_prefix}' matches {} tasks", many.len()))),
        }
    }

    /// Creates a task on `day` and persists it.
    pub fn add_task(&mut self, day: Day, fields: NewTask) -> Result<Task> {
        let task = self.store.add_task(day, fields);
        self.store.save()?;
        Ok(task)
    }

    /// Renames a task. Blank titles keep the current title.
    pub fn rename_task(&mut self, params: &RenameTask) -> Result<Task> {
        let TaskRef { day, id } = &params.task;
        let task = self
            .store
            .rename(*day, id, &params.title)
            .cloned()
            .ok_or_else(|| PlannerError::task_not_found(*day, id.as_str()))?;
        self.store.save()?;
        Ok(task)
    }

    /// Sets a task's color, or advances it through the palette when no color
    /// is given.
    pub fn recolor_task(&mut self, params: &RecolorTask) -> Result<Task> {
        let TaskRef { day, id } = &params.task;
        let updated = match &params.color {
            Some(color) => self.store.set_color(*day, id, color.clone()),
            None => self.store.cycle_color(*day, id),
        };
        let task = updated
            .cloned()
            .ok_or_else(|| PlannerError::task_not_found(*day, id.as_str()))?;
        self.store.save()?;
        Ok(task)
    }

    /// Deletes a task. Absence is not an error: `None` is returned and nothing
    /// is written.
    pub fn remove_task(&mut self, params: &TaskRef) -> Result<Option<Task>> {
        let Some(task) = self.store.remove_task(params.day, &params.id) else {
            return Ok(None);
        };
        self.store.save()?;
        Ok(Some(task))
    }

    /// Removes every task from every day.
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear();
        self.store.save()?;
        info!("Cleared all tasks");
        Ok(())
    }

    /// Writes the current state to `path` as pretty-printed JSON.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        let json = self.store.export_json()?;
        std::fs::write(path, json).fs_context(path)?;
        info!("Exported planner state to {}", path.display());
        Ok(())
    }

    /// Replaces the whole state with the JSON document at `path`. Returns the
    /// number of tasks imported.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::FileSystem` if the file cannot be read and
    /// `PlannerError::ImportRejected` if it is not a valid planner document.
    /// The current state is untouched in both cases.
    pub fn import_from(&mut self, path: &Path) -> Result<usize> {
        let json = std::fs::read_to_string(path).fs_context(path)?;
        self.store.replace_all(&json)?;
        self.store.save()?;
        let count = self.state().task_count();
        info!("Imported {count} tasks from {}", path.display());
        Ok(count)
    }
}

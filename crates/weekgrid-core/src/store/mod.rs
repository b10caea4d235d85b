//! Task store: the owner of the planner state.
//!
//! [`TaskStore`] holds the in-memory [`PlannerState`] together with the
//! [`StateBackend`] it persists to. Mutating methods only touch memory; callers
//! (the layout engine's commit step and the planner facade) call
//! [`TaskStore::save`] once the mutation is complete, which overwrites the
//! stored value with the full state.
//!
//! Loading never fails: absent or malformed stored data is logged and replaced
//! by an empty state with all seven day buckets.

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    grid::{GridConfig, DEFAULT_TASK_DURATION_MIN},
    models::{Day, PlannerState, Task, TaskColor},
    params::NewTask,
};

pub mod backend;

pub use backend::{MemoryBackend, StateBackend};

/// Key under which the serialized state is stored.
pub const STATE_KEY: &str = "tasks_v2";

/// Title given to tasks created without one.
pub const DEFAULT_TASK_TITLE: &str = "New Task";

/// In-memory planner state plus its persistence backend.
pub struct TaskStore {
    config: GridConfig,
    state: PlannerState,
    backend: Box<dyn StateBackend>,
}

impl TaskStore {
    /// Opens a store over `backend` and loads whatever it holds.
    pub fn open(config: GridConfig, backend: Box<dyn StateBackend>) -> Self {
        let mut store = Self {
            config,
            state: PlannerState::new(),
            backend,
        };
        store.load();
        store
    }

    /// Re-reads the state from the backend, replacing the in-memory state.
    /// Malformed or absent data yields an empty state.
    pub fn load(&mut self) -> &PlannerState {
        let mut state = match self.backend.read() {
            Ok(Some(text)) => serde_json::from_str::<PlannerState>(&text).unwrap_or_else(|e| {
                warn!("Stored planner state is malformed, starting empty: {e}");
                PlannerState::new()
            }),
            Ok(None) => {
                debug!("No stored planner state, starting empty");
                PlannerState::new()
            }
            Err(e) => {
                warn!("Could not read stored planner state, starting empty: {e}");
                PlannerState::new()
            }
        };
        normalize_state(&self.config, &mut state);
        self.state = state;
        &self.state
    }

    /// Serializes the full state and overwrites the stored value.
    pub fn save(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        self.backend.write(&json)?;
        debug!("Saved planner state ({} tasks)", self.state.task_count());
        Ok(())
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The persistence backend, for inspecting what was written.
    pub fn backend(&self) -> &dyn StateBackend {
        self.backend.as_ref()
    }

    /// Creates a task on `day` with a fresh id, filling unset fields with
    /// defaults and forcing its span onto the grid.
    pub fn add_task(&mut self, day: Day, fields: NewTask) -> Task {
        let (start_min, duration_min) = self.config.normalize_span(
            fields
                .start_min
                .unwrap_or_else(|| self.config.default_start_min()),
            fields.duration_min.unwrap_or(DEFAULT_TASK_DURATION_MIN),
        );
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: fields
                .title
                .unwrap_or_else(|| DEFAULT_TASK_TITLE.to_string()),
            color: fields.color.unwrap_or_default(),
            start_min,
            duration_min,
        };
        debug!("Adding task {} to {day}", task.id);
        self.state.bucket_mut(day).push(task.clone());
        task
    }

    pub fn task(&self, day: Day, id: &str) -> Option<&Task> {
        self.state.bucket(day).iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, day: Day, id: &str) -> Option<&mut Task> {
        self.state.bucket_mut(day).iter_mut().find(|t| t.id == id)
    }

    /// Finds a task anywhere in the week.
    pub fn find(&self, id: &str) -> Option<(Day, &Task)> {
        let day = self.state.locate(id)?;
        self.task(day, id).map(|task| (day, task))
    }

    /// Extracts a task from its bucket. Absence is reported as `None`.
    pub fn remove_task(&mut self, day: Day, id: &str) -> Option<Task> {
        let bucket = self.state.bucket_mut(day);
        let index = bucket.iter().position(|t| t.id == id)?;
        debug!("Removing task {id} from {day}");
        Some(bucket.remove(index))
    }

    /// Removes a task from `from` and appends it to `to`. If the task is not in
    /// `from`, neither bucket changes and `None` is returned.
    pub fn move_task(&mut self, from: Day, to: Day, id: &str) -> Option<&mut Task> {
        let task = self.remove_task(from, id)?;
        debug!("Moving task {id} from {from} to {to}");
        let bucket = self.state.bucket_mut(to);
        bucket.push(task);
        bucket.last_mut()
    }

    /// Sets a task's title. Blank titles are ignored and keep the old one.
    pub fn rename(&mut self, day: Day, id: &str, title: &str) -> Option<&Task> {
        let task = self.task_mut(day, id)?;
        let trimmed = title.trim();
        if !trimmed.is_empty() {
            task.title = trimmed.to_string();
        }
        Some(task)
    }

    pub fn set_color(&mut self, day: Day, id: &str, color: TaskColor) -> Option<&Task> {
        let task = self.task_mut(day, id)?;
        task.color = color;
        Some(task)
    }

    /// Advances a task's color to the next palette entry.
    pub fn cycle_color(&mut self, day: Day, id: &str) -> Option<&Task> {
        let task = self.task_mut(day, id)?;
        task.color = task.color.next();
        Some(task)
    }

    /// Empties every day bucket.
    pub fn clear(&mut self) {
        self.state = PlannerState::new();
    }

    /// Replaces the whole state with an imported JSON document.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ImportRejected` if `json` does not parse, is not
    /// an object keyed by day, or holds a bucket whose tasks do not parse. The
    /// current state is kept in that case.
    pub fn replace_all(&mut self, json: &str) -> Result<()> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| PlannerError::import_rejected(format!("could not parse JSON: {e}")))?;
        let Value::Object(map) = value else {
            return Err(PlannerError::import_rejected(
                "expected a JSON object keyed by day",
            ));
        };
        let state = PlannerState::try_from(map).map_err(PlannerError::import_rejected)?;
        self.replace_state(state);
        Ok(())
    }

    /// Replaces the whole state, forcing every task onto the grid.
    pub fn replace_state(&mut self, mut state: PlannerState) {
        normalize_state(&self.config, &mut state);
        debug!("Replacing planner state ({} tasks)", state.task_count());
        self.state = state;
    }

    /// Pretty-printed JSON of the current state, in the persisted format.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }
}

/// Forces every task's span onto the grid and inside the day.
fn normalize_state(config: &GridConfig, state: &mut PlannerState) {
    for (day, task) in state.tasks_mut() {
        let (start_min, duration_min) = config.normalize_span(task.start_min, task.duration_min);
        if (start_min, duration_min) != (task.start_min, task.duration_min) {
            debug!(
                "Normalized task {} on {day}: {}+{} -> {start_min}+{duration_min}",
                task.id, task.start_min, task.duration_min
            );
            task.start_min = start_min;
            task.duration_min = duration_min;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenBackend;

    impl StateBackend for BrokenBackend {
        fn read(&self) -> Result<Option<String>> {
            Err(PlannerError::Configuration {
                message: "unreadable".to_string(),
            })
        }

        fn write(&mut self, _contents: &str) -> Result<()> {
            Err(PlannerError::Configuration {
                message: "read-only".to_string(),
            })
        }
    }

    fn open_with(value: Option<&str>) -> TaskStore {
        let backend = match value {
            Some(v) => MemoryBackend::with_value(v),
            None => MemoryBackend::new(),
        };
        TaskStore::open(GridConfig::default(), Box::new(backend))
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = open_with(None);
        assert!(store.state().is_empty());
        assert_eq!(store.state().buckets().count(), 7);
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["{not json", "null", "[1,2]", r#"{"Mon": [{"id": 1}]}"#] {
            let store = open_with(Some(raw));
            assert!(store.state().is_empty(), "input {raw} should load empty");
        }
    }

    #[test]
    fn test_load_unreadable_backend_is_empty() {
        let store = TaskStore::open(GridConfig::default(), Box::new(BrokenBackend));
        assert!(store.state().is_empty());
    }

    #[test]
    fn test_load_normalizes_spans() {
        let raw = r#"{"Wed": [{"id": "x", "title": "Odd", "color": "bg-blue-200",
                      "startMin": 1070, "durationMin": 45}]}"#;
        let store = open_with(Some(raw));
        let task = store.task(Day::Wed, "x").unwrap();
        assert_eq!((task.start_min, task.duration_min), (1020, 60));
    }

    #[test]
    fn test_load_clamps_huge_minutes() {
        let raw = r#"{"Mon": [{"id": "late", "title": "Late", "color": "bg-blue-200",
                      "startMin": 4294967295, "durationMin": 30}]}"#;
        let store = open_with(Some(raw));
        let task = store.task(Day::Mon, "late").unwrap();
        assert_eq!((task.start_min, task.duration_min), (1050, 30));
    }

    #[test]
    fn test_replace_all_normalizes_huge_duration() {
        let mut store = open_with(None);
        let raw = r#"{"Tue": [{"id": "long", "title": "Long", "color": "bg-blue-200",
                      "startMin": 120, "durationMin": 4294967295}]}"#;
        store.replace_all(raw).unwrap();
        let task = store.task(Day::Tue, "long").unwrap();
        assert_eq!((task.start_min, task.duration_min), (0, 1080));
    }

    #[test]
    fn test_add_task_huge_duration_fills_day() {
        let mut store = open_with(None);
        let task = store.add_task(
            Day::Mon,
            NewTask {
                duration_min: Some(u32::MAX),
                ..Default::default()
            },
        );
        assert_eq!((task.start_min, task.duration_min), (0, 1080));
    }

    #[test]
    fn test_add_task_defaults() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Mon, NewTask::default());
        assert_eq!(task.title, DEFAULT_TASK_TITLE);
        assert_eq!(task.color, TaskColor::Yellow);
        assert_eq!(task.start_min, 240);
        assert_eq!(task.duration_min, 60);
        assert!(Uuid::parse_str(&task.id).is_ok());
        assert_eq!(store.state().bucket(Day::Mon), &[task]);
    }

    #[test]
    fn test_add_task_ids_are_unique() {
        let mut store = open_with(None);
        let a = store.add_task(Day::Mon, NewTask::default());
        let b = store.add_task(Day::Mon, NewTask::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_save_writes_full_state() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Fri, NewTask::default());
        store.save().unwrap();

        let written = store.backend().read().unwrap().unwrap();
        let state: PlannerState = serde_json::from_str(&written).unwrap();
        assert_eq!(state.bucket(Day::Fri)[0].id, task.id);
        assert_eq!(state.buckets().count(), 7);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut store = TaskStore::open(GridConfig::default(), Box::new(BrokenBackend));
        assert!(store.save().is_err());
    }

    #[test]
    fn test_remove_absent_is_none() {
        let mut store = open_with(None);
        assert!(store.remove_task(Day::Mon, "missing").is_none());
    }

    #[test]
    fn test_rename_blank_keeps_title() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Mon, NewTask::default());
        assert_eq!(
            store.rename(Day::Mon, &task.id, "  Review  ").unwrap().title,
            "Review"
        );
        assert_eq!(store.rename(Day::Mon, &task.id, "   ").unwrap().title, "Review");
        assert!(store.rename(Day::Tue, &task.id, "Nope").is_none());
    }

    #[test]
    fn test_cycle_and_set_color() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Mon, NewTask::default());
        assert_eq!(
            store.cycle_color(Day::Mon, &task.id).unwrap().color,
            TaskColor::Blue
        );
        assert_eq!(
            store
                .set_color(Day::Mon, &task.id, TaskColor::Orange)
                .unwrap()
                .color,
            TaskColor::Orange
        );
        assert_eq!(
            store.cycle_color(Day::Mon, &task.id).unwrap().color,
            TaskColor::Yellow
        );
    }

    #[test]
    fn test_replace_all_rejects_and_keeps_state() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Sat, NewTask::default());
        for raw in ["nope", "null", "42", "[]", r#"{"Mon": "x"}"#] {
            let err = store.replace_all(raw).unwrap_err();
            assert!(matches!(err, PlannerError::ImportRejected { .. }));
            assert_eq!(store.task(Day::Sat, &task.id), Some(&task));
        }
    }

    #[test]
    fn test_clear_keeps_all_days() {
        let mut store = open_with(None);
        store.add_task(Day::Mon, NewTask::default());
        store.clear();
        assert!(store.state().is_empty());
        assert_eq!(store.state().buckets().count(), 7);
    }

    #[test]
    fn test_find_locates_day() {
        let mut store = open_with(None);
        let task = store.add_task(Day::Thu, NewTask::default());
        let (day, found) = store.find(&task.id).unwrap();
        assert_eq!(day, Day::Thu);
        assert_eq!(found, &task);
    }
}

//! Planner state: the per-day task buckets.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{Day, Task};

/// Mapping from day label to that day's bucket of tasks.
///
/// Every one of the seven days always has a bucket, even when it is empty.
/// Serialized as a JSON object with one key per day label in column order.
/// Deserialization tolerates missing days (they start empty), `null` buckets
/// and unknown keys, but rejects buckets whose tasks do not parse.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct PlannerState {
    days: BTreeMap<Day, Vec<Task>>,
}

impl PlannerState {
    /// Creates a complete state with seven empty buckets.
    pub fn new() -> Self {
        Self {
            days: Day::ALL.into_iter().map(|day| (day, Vec::new())).collect(),
        }
    }

    /// Tasks scheduled on `day`.
    pub fn bucket(&self, day: Day) -> &[Task] {
        self.days.get(&day).map_or(&[], Vec::as_slice)
    }

    /// Mutable access to the bucket for `day`.
    pub fn bucket_mut(&mut self, day: Day) -> &mut Vec<Task> {
        self.days.entry(day).or_default()
    }

    /// Iterates over the buckets in day order.
    pub fn buckets(&self) -> impl Iterator<Item = (Day, &[Task])> {
        self.days.iter().map(|(day, tasks)| (*day, tasks.as_slice()))
    }

    /// Iterates mutably over every task, paired with its day.
    pub fn tasks_mut(&mut self) -> impl Iterator<Item = (Day, &mut Task)> {
        self.days
            .iter_mut()
            .flat_map(|(day, tasks)| tasks.iter_mut().map(move |task| (*day, task)))
    }

    /// Total number of tasks across the week.
    pub fn task_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// True if no day has any task.
    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }

    /// Finds the day holding the task with `id`.
    pub fn locate(&self, id: &str) -> Option<Day> {
        self.buckets()
            .find(|(_, tasks)| tasks.iter().any(|t| t.id == id))
            .map(|(day, _)| day)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for PlannerState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.days.iter().map(|(day, tasks)| (day.as_str(), tasks)))
    }
}

impl TryFrom<Map<String, Value>> for PlannerState {
    type Error = String;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut state = PlannerState::new();
        for (key, value) in raw {
            let Some(day) = Day::ALL.into_iter().find(|d| d.as_str() == key) else {
                debug!("Ignoring unknown day key '{key}'");
                continue;
            };
            if value.is_null() {
                continue;
            }
            let tasks: Vec<Task> = serde_json::from_value(value)
                .map_err(|e| format!("invalid tasks for {day}: {e}"))?;
            state.bucket_mut(day).extend(tasks);
        }
        Ok(state)
    }
}

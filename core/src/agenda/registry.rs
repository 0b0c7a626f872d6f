use std::collections::HashMap;

use chrono::NaiveDate;

use super::task::{Priority, SourceId, Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TaskKey {
    source: SourceId,
    name: String,
}

/// Arena of tasks indexed by `(source, name)`.
///
/// Lookups are idempotent: the same key always resolves to the same [`TaskId`]. Tasks are
/// never removed during a run.
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    index: HashMap<TaskKey, TaskId>,
    sources: Vec<String>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input source and return the namespace its task names live in.
    pub fn add_source(&mut self, name: impl Into<String>) -> SourceId {
        self.sources.push(name.into());
        SourceId(self.sources.len() - 1)
    }

    pub fn source_name(&self, source: SourceId) -> Option<&str> {
        self.sources.get(source.0).map(String::as_str)
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn lookup(&self, source: SourceId, name: &str) -> Option<TaskId> {
        self.index
            .get(&TaskKey {
                source,
                name: name.to_string(),
            })
            .copied()
    }

    /// Return the task registered under `name`, creating an uninitialized placeholder if
    /// the name has not been seen in this source yet.
    pub fn lookup_or_create(&mut self, source: SourceId, name: &str) -> TaskId {
        let key = TaskKey {
            source,
            name: name.to_string(),
        };
        if let Some(id) = self.index.get(&key) {
            return *id;
        }

        let id = TaskId(self.tasks.len());
        self.tasks.push(Task::placeholder(name, source));
        self.index.insert(key, id);
        tracing::trace!(task = name, source = source.0, "registered task");
        id
    }

    /// Apply a definition to the named task.
    ///
    /// Description, due date, priority and completion are overwritten; accumulated
    /// dependencies are kept.
    pub fn define(
        &mut self,
        source: SourceId,
        name: &str,
        description: &str,
        due: Option<NaiveDate>,
        priority: Priority,
        done: bool,
    ) -> TaskId {
        let id = self.lookup_or_create(source, name);
        let task = &mut self.tasks[id.0];
        if task.initialized {
            tracing::debug!(task = name, "redefining task");
        }
        task.description = description.to_string();
        task.due = due;
        task.priority = priority;
        task.done = done;
        task.initialized = true;
        id
    }

    /// Add an edge from `task` to the task named `depends_on` in the same source.
    pub fn add_dependency(&mut self, task: TaskId, depends_on: &str) -> TaskId {
        let source = self.tasks[task.0].source;
        let prerequisite = self.lookup_or_create(source, depends_on);
        let deps = &mut self.tasks[task.0].dependencies;
        if !deps.contains(&prerequisite) {
            deps.push(prerequisite);
        }
        prerequisite
    }

    pub fn get(&self, id: TaskId) -> &Task {
        &self.tasks[id.0]
    }

    pub fn get_mut(&mut self, id: TaskId) -> &mut Task {
        &mut self.tasks[id.0]
    }

    /// Task ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        (0..self.tasks.len()).map(TaskId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.tasks.iter().enumerate().map(|(i, t)| (TaskId(i), t))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Name used in diagnostics, prefixed with its source when several are merged.
    pub fn display_name(&self, id: TaskId) -> String {
        let task = self.get(id);
        match self.source_name(task.source) {
            Some(source) if self.sources.len() > 1 => format!("{source}: {}", task.name),
            _ => task.name.clone(),
        }
    }
}

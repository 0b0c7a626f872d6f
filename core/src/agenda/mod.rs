//! Task agenda engine.
//!
//! # Pipeline
//!
//! ```text
//! TaskRegistry (define / add_dependency)
//!   ↓
//! mark_overdue_done()            (optional policy)
//!   ↓
//! TaskGraph::topological_sort()  → Vec<TaskId>, prerequisites first
//!   ↓
//! propagate_urgency()            reverse sequence, min-reduction
//!   ↓
//! rank_unblocked()               → Vec<AgendaEntry>, most urgent first
//! ```

mod blocking;
mod graph;
mod rank;
mod registry;
mod task;
mod urgency;

use chrono::NaiveDate;

use crate::error::AgendaError;

pub use blocking::{is_blocked, mark_overdue_done};
pub use graph::TaskGraph;
pub use rank::rank_unblocked;
pub use registry::TaskRegistry;
pub use task::{Priority, SourceId, Task, TaskId};
pub use urgency::{
    days_left, own_urgency, propagate_urgency, urgency_bucket, DEFAULT_DAYS, DEFAULT_URGENCY,
    LEAST_URGENT,
};

/// Per-run inputs of the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct AgendaOptions {
    /// Reference date deadlines are measured from.
    pub today: NaiveDate,
    /// Treat tasks whose deadline has passed as done.
    pub auto_done_overdue: bool,
}

impl AgendaOptions {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            auto_done_overdue: false,
        }
    }
}

/// One line of the agenda, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaEntry {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub due: Option<NaiveDate>,
    pub urgency: i32,
    /// Originating source, set only when several sources were merged.
    pub source: Option<String>,
}

impl AgendaEntry {
    pub fn priority_label(&self) -> char {
        self.priority.label()
    }

    pub fn due_text(&self) -> Option<String> {
        self.due.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

/// Owns the registry for one run and turns it into a ranked agenda.
#[derive(Debug, Default)]
pub struct Agenda {
    registry: TaskRegistry,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registry(registry: TaskRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TaskRegistry {
        &mut self.registry
    }

    /// Run the whole pipeline. On error nothing is returned, since a partial agenda would
    /// misrepresent the ordering.
    #[tracing::instrument(name = "agenda.plan", skip(self), fields(tasks = self.registry.len()))]
    pub fn plan(&mut self, options: &AgendaOptions) -> Result<Vec<AgendaEntry>, AgendaError> {
        if options.auto_done_overdue {
            mark_overdue_done(&mut self.registry, options.today);
        }

        let sequence = TaskGraph::new(&self.registry).topological_sort()?;
        propagate_urgency(&mut self.registry, &sequence, options.today);
        let ranked = rank_unblocked(&self.registry, &sequence);

        tracing::debug!(
            total = self.registry.len(),
            unblocked = ranked.len(),
            "agenda ranked"
        );

        let prefix_source = self.registry.source_count() > 1;
        Ok(ranked
            .into_iter()
            .map(|id| self.entry(id, prefix_source))
            .collect())
    }

    fn entry(&self, id: TaskId, prefix_source: bool) -> AgendaEntry {
        let task = self.registry.get(id);
        AgendaEntry {
            name: task.name.clone(),
            description: task.description.clone(),
            priority: task.priority,
            due: task.due,
            urgency: task.urgency,
            source: prefix_source
                .then(|| self.registry.source_name(task.source).map(str::to_string))
                .flatten(),
        }
    }
}

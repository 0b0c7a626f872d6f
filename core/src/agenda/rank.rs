use std::cmp::Ordering;

use super::blocking::is_blocked;
use super::registry::TaskRegistry;
use super::task::{Task, TaskId};

/// Select the tasks that can be worked on now and order them most urgent first.
///
/// Done and blocked tasks are dropped. Equal urgencies are ordered by source, then by
/// earliest due date (undated last), then by name, so the output does not depend on the
/// sort algorithm.
pub fn rank_unblocked(registry: &TaskRegistry, sequence: &[TaskId]) -> Vec<TaskId> {
    let mut ready: Vec<TaskId> = sequence
        .iter()
        .copied()
        .filter(|id| {
            let task = registry.get(*id);
            task.initialized && !task.done && !is_blocked(registry, *id)
        })
        .collect();

    ready.sort_by(|a, b| compare_tasks(registry.get(*a), registry.get(*b)));
    ready
}

fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.urgency
        .cmp(&b.urgency)
        .then_with(|| a.source.cmp(&b.source))
        .then_with(|| match (a.due, b.due) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.name.cmp(&b.name))
}

//! Urgency ("niceness") of tasks: the lower the score, the more pressing the task.

use chrono::NaiveDate;

use super::registry::TaskRegistry;
use super::task::{Priority, TaskId};

/// Days until the deadline assumed for tasks without a due date; the power of two closest
/// to a week.
pub const DEFAULT_DAYS: i64 = 8;

/// Urgency of a regular task without due date or dependents: `log2(DEFAULT_DAYS)`.
pub const DEFAULT_URGENCY: i32 = 3;

/// Starting value for the min-reduction; any computed urgency is lower.
pub const LEAST_URGENT: i32 = i32::MAX;

/// Signed order of magnitude of `days_left`: `floor(log2(|days_left|))`, negated when the
/// deadline has passed. 0 and ±1 days map to 0.
pub fn urgency_bucket(days_left: i64) -> i32 {
    let magnitude = days_left.unsigned_abs().checked_ilog2().unwrap_or(0) as i32;
    if days_left < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// A task's urgency from its own deadline and priority, ignoring dependents.
pub fn own_urgency(days_left: i64, priority: Priority) -> i32 {
    urgency_bucket(days_left) - priority.value()
}

/// Days until `due`, or [`DEFAULT_DAYS`] when there is no deadline.
pub fn days_left(due: Option<NaiveDate>, today: NaiveDate) -> i64 {
    due.map(|due| (due - today).num_days())
        .unwrap_or(DEFAULT_DAYS)
}

/// Compute every task's urgency and push the most urgent score of each dependent down to
/// its prerequisites.
///
/// `sequence` must be a topological sequence (prerequisites first). Walking it backwards
/// visits every dependent before its prerequisites, so by the time a task is reached its
/// urgency already holds the minimum over everything depending on it, transitively.
pub fn propagate_urgency(registry: &mut TaskRegistry, sequence: &[TaskId], today: NaiveDate) {
    let mut urgency = vec![LEAST_URGENT; registry.len()];

    for &id in sequence.iter().rev() {
        let task = registry.get(id);
        let own = own_urgency(days_left(task.due, today), task.priority);
        let current = urgency[id.index()].min(own);
        urgency[id.index()] = current;

        for dep in &task.dependencies {
            let inherited = &mut urgency[dep.index()];
            *inherited = (*inherited).min(current);
        }
    }

    for (task, value) in registry.iter_mut().zip(urgency) {
        task.urgency = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::graph::TaskGraph;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn bucket_is_logarithmic_and_signed() {
        assert_eq!(urgency_bucket(0), 0);
        assert_eq!(urgency_bucket(1), 0);
        assert_eq!(urgency_bucket(2), 1);
        assert_eq!(urgency_bucket(3), 1);
        assert_eq!(urgency_bucket(8), 3);
        assert_eq!(urgency_bucket(365), 8);
        assert_eq!(urgency_bucket(-1), 0);
        assert_eq!(urgency_bucket(-4), -2);
        assert_eq!(urgency_bucket(-9), -3);
    }

    #[test]
    fn default_task_has_default_urgency() {
        assert_eq!(own_urgency(DEFAULT_DAYS, Priority::Normal), DEFAULT_URGENCY);
        assert_eq!(days_left(None, today()), DEFAULT_DAYS);
    }

    #[test]
    fn priority_shifts_urgency() {
        assert_eq!(own_urgency(DEFAULT_DAYS, Priority::High), 2);
        assert_eq!(own_urgency(DEFAULT_DAYS, Priority::Low), 4);
    }

    #[test]
    fn prerequisites_inherit_most_urgent_dependent() {
        let mut registry = TaskRegistry::new();
        let src = registry.add_source("tasks");
        let soon = today().succ_opt();
        let late = NaiveDate::from_ymd_opt(2024, 6, 1);

        let urgent = registry.define(src, "urgent", "u", soon, Priority::Normal, false);
        let relaxed = registry.define(src, "relaxed", "r", late, Priority::Low, false);
        let shared = registry.define(src, "shared", "s", late, Priority::Normal, false);
        let leaf = registry.define(src, "leaf", "l", None, Priority::Normal, false);
        registry.add_dependency(urgent, "shared");
        registry.add_dependency(relaxed, "shared");
        registry.add_dependency(shared, "leaf");

        let sequence = TaskGraph::new(&registry).topological_sort().unwrap();
        propagate_urgency(&mut registry, &sequence, today());

        assert_eq!(registry.get(urgent).urgency, 0);
        assert_eq!(registry.get(relaxed).urgency, 7);
        assert_eq!(registry.get(shared).urgency, 0);
        assert_eq!(registry.get(leaf).urgency, 0);
    }

    #[test]
    fn prerequisite_keeps_own_urgency_when_more_pressing() {
        let mut registry = TaskRegistry::new();
        let src = registry.add_source("tasks");
        let overdue = NaiveDate::from_ymd_opt(2024, 2, 20);

        let parent = registry.define(src, "parent", "p", None, Priority::Normal, false);
        let child = registry.define(src, "child", "c", overdue, Priority::Normal, false);
        registry.add_dependency(parent, "child");

        let sequence = TaskGraph::new(&registry).topological_sort().unwrap();
        propagate_urgency(&mut registry, &sequence, today());

        assert_eq!(registry.get(parent).urgency, DEFAULT_URGENCY);
        assert_eq!(registry.get(child).urgency, -3);
    }
}

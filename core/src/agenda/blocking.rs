use chrono::NaiveDate;

use super::registry::TaskRegistry;
use super::task::TaskId;

/// Mark every task whose deadline has passed as done. Returns how many were changed.
pub fn mark_overdue_done(registry: &mut TaskRegistry, today: NaiveDate) -> usize {
    let mut marked = 0;
    for task in registry.iter_mut() {
        if !task.done && task.is_overdue(today) {
            task.done = true;
            marked += 1;
        }
    }
    if marked > 0 {
        tracing::debug!(marked, "overdue tasks marked as done");
    }
    marked
}

/// A task is blocked when it is not done and at least one prerequisite is not done.
pub fn is_blocked(registry: &TaskRegistry, id: TaskId) -> bool {
    let task = registry.get(id);
    !task.done
        && task
            .dependencies
            .iter()
            .any(|dep| !registry.get(*dep).done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agenda::task::Priority;

    #[test]
    fn open_prerequisite_blocks() {
        let mut registry = TaskRegistry::new();
        let src = registry.add_source("tasks");
        let a = registry.define(src, "a", "a", None, Priority::High, false);
        let b = registry.define(src, "b", "b", None, Priority::Normal, false);
        registry.add_dependency(a, "b");

        assert!(is_blocked(&registry, a));
        assert!(!is_blocked(&registry, b));

        registry.get_mut(b).done = true;
        assert!(!is_blocked(&registry, a));
    }

    #[test]
    fn done_task_is_never_blocked() {
        let mut registry = TaskRegistry::new();
        let src = registry.add_source("tasks");
        let a = registry.define(src, "a", "a", None, Priority::Normal, true);
        registry.define(src, "b", "b", None, Priority::Normal, false);
        registry.add_dependency(a, "b");
        assert!(!is_blocked(&registry, a));
    }

    #[test]
    fn overdue_policy_only_touches_past_deadlines() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut registry = TaskRegistry::new();
        let src = registry.add_source("tasks");
        let past = registry.define(src, "past", "p", today.pred_opt(), Priority::Normal, false);
        let now = registry.define(src, "now", "n", Some(today), Priority::Normal, false);
        let open = registry.define(src, "open", "o", None, Priority::Normal, false);

        assert_eq!(mark_overdue_done(&mut registry, today), 1);
        assert!(registry.get(past).done);
        assert!(!registry.get(now).done);
        assert!(!registry.get(open).done);
    }
}

use chrono::NaiveDate;

/// Index of a task in the [`TaskRegistry`](super::TaskRegistry) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) usize);

impl TaskId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of an input source. Task names are namespaced per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SourceId(pub(crate) usize);

impl SourceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    /// Signed value subtracted from the deadline bucket.
    pub fn value(self) -> i32 {
        match self {
            Self::High => 1,
            Self::Normal => 0,
            Self::Low => -1,
        }
    }

    /// Letter used in task files: `A`, `B` or `C`.
    pub fn label(self) -> char {
        match self {
            Self::High => 'A',
            Self::Normal => 'B',
            Self::Low => 'C',
        }
    }

    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'A' => Some(Self::High),
            'B' => Some(Self::Normal),
            'C' => Some(Self::Low),
            _ => None,
        }
    }
}

/// A to-do item.
///
/// Tasks are created uninitialized the first time their name is looked up (usually from a
/// `deps:` list) and become initialized once a defining line is seen. `urgency` is only
/// meaningful after [`propagate_urgency`](super::propagate_urgency) has run.
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub source: SourceId,
    pub description: String,
    pub due: Option<NaiveDate>,
    pub priority: Priority,
    pub done: bool,
    pub initialized: bool,
    pub urgency: i32,
    pub dependencies: Vec<TaskId>,
}

impl Task {
    pub(crate) fn placeholder(name: &str, source: SourceId) -> Self {
        Self {
            name: name.to_string(),
            source,
            description: String::new(),
            due: None,
            priority: Priority::Normal,
            done: false,
            initialized: false,
            urgency: super::urgency::LEAST_URGENT,
            dependencies: Vec::new(),
        }
    }

    /// Whole days from `today` until the due date; negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due.map(|due| (due - today).num_days())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.days_until_due(today).is_some_and(|days| days < 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_labels_round_trip_through_letters() {
        for priority in [Priority::High, Priority::Normal, Priority::Low] {
            assert_eq!(Priority::from_label(priority.label()), Some(priority));
        }
        assert_eq!(Priority::from_label('D'), None);
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn priority_values_are_ternary() {
        assert_eq!(Priority::High.value(), 1);
        assert_eq!(Priority::Normal.value(), 0);
        assert_eq!(Priority::Low.value(), -1);
    }

    #[test]
    fn overdue_only_when_due_date_passed() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut task = Task::placeholder("t", SourceId::default());
        assert!(!task.is_overdue(today));

        task.due = NaiveDate::from_ymd_opt(2024, 2, 29);
        assert_eq!(task.days_until_due(today), Some(-1));
        assert!(task.is_overdue(today));

        task.due = Some(today);
        assert!(!task.is_overdue(today));
    }
}

use thiserror::Error;

/// Structural errors that abort the whole agenda run.
///
/// Neither variant is recoverable: the ordering and urgency guarantees only hold over a
/// complete, acyclic graph, so no partial agenda is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgendaError {
    #[error("cyclic dependency among tasks at \"{task}\": {}", .cycle.join(" -> "))]
    CyclicDependency { task: String, cycle: Vec<String> },

    #[error("task \"{task}\" mentioned but not defined{}", referrer_suffix(.referenced_by))]
    UndefinedTask {
        task: String,
        referenced_by: Option<String>,
    },
}

impl AgendaError {
    /// Name of the task the error is about.
    pub fn task(&self) -> &str {
        match self {
            Self::CyclicDependency { task, .. } => task,
            Self::UndefinedTask { task, .. } => task,
        }
    }
}

fn referrer_suffix(referenced_by: &Option<String>) -> String {
    match referenced_by {
        Some(name) => format!(" (required by \"{name}\")"),
        None => String::new(),
    }
}

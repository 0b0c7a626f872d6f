//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `todo_core::api` instead of reaching into internal modules.

pub use crate::agenda::{
    Agenda, AgendaEntry, AgendaOptions, Priority, SourceId, Task, TaskGraph, TaskId,
    TaskRegistry,
};
pub use crate::config::{load_default, AgendaConfig, AppConfig, LoggingConfig, OutputFormat};
pub use crate::engine::{load_agenda, plan_agenda, run_agenda, AgendaRun};
pub use crate::error::{AgendaError, CliError, LineIssue, LineIssueKind, SourceError};
pub use crate::input::{read_sources, LoadReport, Source};
pub use crate::render::AgendaRenderer;

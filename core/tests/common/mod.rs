use chrono::{Duration, NaiveDate};
use todo_core::agenda::{AgendaEntry, AgendaOptions};
use todo_core::engine::{run_agenda, AgendaRun};
use todo_core::error::AgendaError;
use todo_core::input::Source;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

/// `today + days` formatted as a task file date.
pub fn in_days(days: i64) -> String {
    (today() + Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn run_text(text: &str) -> Result<AgendaRun, AgendaError> {
    run_agenda(
        &[Source::new("tasks", text)],
        Vec::new(),
        &AgendaOptions::new(today()),
    )
}

pub fn descriptions(entries: &[AgendaEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.description.as_str()).collect()
}

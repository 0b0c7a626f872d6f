use crate::agenda::{Agenda, AgendaEntry, AgendaOptions};
use crate::error::{AgendaError, SourceError};
use crate::input::{load_sources, LoadReport, Source};

use super::types::AgendaRun;

/// Load `sources` into a fresh agenda without planning it.
///
/// `source_errors` are sources the caller failed to read; they are carried into the report
/// so the run is flagged as failed while the readable sources are still processed. The
/// report is complete before planning starts, so callers can surface line issues even when
/// planning later fails.
#[tracing::instrument(name = "engine.load_agenda", skip_all, fields(sources = sources.len()))]
pub fn load_agenda(sources: &[Source], source_errors: Vec<SourceError>) -> (Agenda, LoadReport) {
    let mut agenda = Agenda::new();
    let mut report = load_sources(agenda.registry_mut(), sources);
    report.source_errors = source_errors;

    tracing::debug!(
        tasks = agenda.registry().len(),
        issues = report.issues.len(),
        "sources loaded"
    );
    (agenda, report)
}

/// Rank a loaded agenda.
///
/// # Errors
///
/// Returns [`AgendaError`] on a dependency cycle or a task that is referenced but never
/// defined. No entries are produced in that case.
pub fn plan_agenda(
    agenda: &mut Agenda,
    options: &AgendaOptions,
) -> Result<Vec<AgendaEntry>, AgendaError> {
    tracing::info!(
        today = %options.today,
        auto_done_overdue = options.auto_done_overdue,
        tasks = agenda.registry().len(),
        "planning agenda"
    );

    agenda
        .plan(options)
        .inspect_err(|e| tracing::error!(error = %e, "agenda aborted"))
}

/// Build the agenda for `sources` in one step.
///
/// # Errors
///
/// See [`plan_agenda`]. The load report is dropped on failure; use [`load_agenda`] and
/// [`plan_agenda`] separately to keep it.
#[tracing::instrument(name = "engine.run_agenda", skip_all, fields(sources = sources.len()))]
pub fn run_agenda(
    sources: &[Source],
    source_errors: Vec<SourceError>,
    options: &AgendaOptions,
) -> Result<AgendaRun, AgendaError> {
    let (mut agenda, report) = load_agenda(sources, source_errors);
    let entries = plan_agenda(&mut agenda, options)?;
    Ok(AgendaRun { entries, report })
}

use crate::agenda::AgendaEntry;
use crate::input::LoadReport;

/// Result of a complete agenda run.
#[derive(Debug)]
pub struct AgendaRun {
    /// Unblocked tasks, most urgent first.
    pub entries: Vec<AgendaEntry>,
    /// Recoverable problems met while loading; the entries are still valid.
    pub report: LoadReport,
}

impl AgendaRun {
    pub fn had_errors(&self) -> bool {
        self.report.had_errors()
    }
}

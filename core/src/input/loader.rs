use crate::agenda::TaskRegistry;
use crate::error::{LineIssue, SourceError};

use super::lines::logical_lines;
use super::parser::parse_task_line;
use super::source::Source;

/// What happened while loading the sources into a registry.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Task definitions applied, redefinitions included.
    pub definitions: usize,
    pub issues: Vec<LineIssue>,
    pub source_errors: Vec<SourceError>,
}

impl LoadReport {
    /// Whether any recoverable error occurred. The run still produces an agenda, but
    /// should finish with a failure status.
    pub fn had_errors(&self) -> bool {
        !self.issues.is_empty() || !self.source_errors.is_empty()
    }
}

/// Apply every task line of `source` to the registry, in its own namespace.
pub fn load_source(registry: &mut TaskRegistry, source: &Source, report: &mut LoadReport) {
    let namespace = registry.add_source(source.id.clone());

    for (line_no, line) in logical_lines(&source.text) {
        let parsed = match parse_task_line(&line) {
            Ok(parsed) => parsed,
            Err(kind) => {
                report.issues.push(LineIssue {
                    origin: source.id.clone(),
                    line: line_no,
                    kind,
                });
                continue;
            }
        };

        let id = registry.define(
            namespace,
            parsed.name,
            parsed.description,
            parsed.due,
            parsed.priority,
            parsed.done,
        );
        for dep in &parsed.dependencies {
            registry.add_dependency(id, dep);
        }
        report.definitions += 1;

        report
            .issues
            .extend(parsed.issues.into_iter().map(|kind| LineIssue {
                origin: source.id.clone(),
                line: line_no,
                kind,
            }));
    }
}

/// Load all sources into the registry.
pub fn load_sources(registry: &mut TaskRegistry, sources: &[Source]) -> LoadReport {
    let mut report = LoadReport::default();
    for source in sources {
        load_source(registry, source, &mut report);
    }
    for issue in &report.issues {
        tracing::debug!(%issue, "skipped part of task line");
    }
    tracing::debug!(
        sources = sources.len(),
        definitions = report.definitions,
        tasks = registry.len(),
        "sources loaded"
    );
    report
}

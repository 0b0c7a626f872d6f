//! CLI assembly: merge flag overrides into the config, run the agenda and render it.
use std::io::Write;

use chrono::Local;
use todo_core::api::{
    load_agenda, plan_agenda, read_sources, AgendaOptions, AppConfig, CliError,
};
use todo_plugins::factory::build_renderer;

use crate::commands::cli::Args;

/// Exit status when the agenda was printed but some input had to be skipped.
pub const EXIT_PARTIAL: i32 = 1;

/// Command-line flags take precedence over file and environment settings.
pub fn apply_overrides(args: &Args, cfg: &mut AppConfig) {
    if args.done_overdue {
        cfg.agenda.auto_done_overdue = true;
    }
    if args.long {
        cfg.agenda.long_format = true;
    }
    if let Some(format) = args.format {
        cfg.agenda.format = format.into();
    }
}

#[tracing::instrument(name = "cli.run", skip_all)]
pub fn run(args: &Args, cfg: &AppConfig) -> Result<i32, CliError> {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_with_writers(args, cfg, &mut stdout.lock(), &mut stderr.lock())
}

/// Run one agenda pass, writing the agenda to `out` and diagnostics to `diag`.
///
/// Line issues are written to `diag` before planning, so they are reported even when the
/// agenda cannot be built. Nothing is written to `out` in that case.
pub fn run_with_writers(
    args: &Args,
    cfg: &AppConfig,
    out: &mut dyn Write,
    diag: &mut dyn Write,
) -> Result<i32, CliError> {
    let options = AgendaOptions {
        today: args.today.unwrap_or_else(|| Local::now().date_naive()),
        auto_done_overdue: cfg.agenda.auto_done_overdue,
    };

    let (sources, source_errors) = read_sources(&args.files);
    for err in &source_errors {
        writeln!(diag, "todo: {err}")?;
    }

    let (mut agenda, report) = load_agenda(&sources, source_errors);
    for issue in &report.issues {
        writeln!(diag, "todo: {issue}")?;
    }

    let entries = plan_agenda(&mut agenda, &options)?;

    let renderer = build_renderer(cfg.agenda.format, cfg.agenda.long_format);
    tracing::debug!(renderer = renderer.name(), entries = entries.len(), "rendering");
    renderer.render(&entries, out)?;
    out.flush()?;

    Ok(if report.had_errors() { EXIT_PARTIAL } else { 0 })
}

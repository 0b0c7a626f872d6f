use std::path::{Path, PathBuf};

use clap::Parser;
use todo_cli::app;
use todo_cli::commands::cli;
use todo_core::config::LoggingConfig;
use todo_core::error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("todo: {e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, error::CliError> {
    let args = cli::Args::parse();
    let mut cfg =
        todo_core::config::load_default().map_err(|e| error::CliError::Config(e.to_string()))?;
    app::apply_overrides(&args, &mut cfg);
    init_tracing(&cfg.logging).map_err(error::CliError::Config)?;

    app::run(&args, &cfg)
}

fn exit_code_for_error(e: &error::CliError) -> i32 {
    // 0: success
    // 1: agenda printed, some input skipped (returned as a normal exit code)
    // 2: dependency cycle / undefined task, nothing printed
    // 11: config error
    // 20: output IO error
    match e {
        error::CliError::Agenda(_) => 2,
        error::CliError::Config(_) => 11,
        error::CliError::Io(_) => 20,
    }
}

/// Install the subscriber described by `logging`.
///
/// Logging is diagnostic only: with neither console nor file output there is nothing to
/// install and the run proceeds silently.
fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled || (!logging.console && !logging.file) {
        return Ok(());
    }

    // RUST_LOG wins over the configured level.
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(&logging.level).map_err(|e| e.to_string())?,
    };

    let file_layer = if logging.file {
        let writer = open_log_file(&log_dir(logging))?;
        Some(fmt::layer().with_writer(writer).with_ansi(false))
    } else {
        None
    };
    let console_layer = logging.console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();
    Ok(())
}

fn log_dir(logging: &LoggingConfig) -> PathBuf {
    logging
        .directory
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("todo"))
}

/// One log file per process; the worker guard lives until exit.
fn open_log_file(dir: &Path) -> Result<NonBlocking, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("cannot create log directory {}: {e}", dir.display()))?;
    let appender =
        tracing_appender::rolling::never(dir, format!("todo.{}.log", std::process::id()));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(writer)
}

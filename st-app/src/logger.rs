use crate::error::{AppError, Result as AppErrorResult};

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, info};

/// Initialize logger with fern
///
/// Stdout carries the interactive prompt, so console logging goes to stderr.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (only honoured when stderr is a terminal)
#[track_caller]
pub fn initialize(
    log_level: st_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> AppErrorResult<()> {
    let level_filter = log_level.0;
    let colored = use_colors(colored, std::io::stderr().is_terminal());

    build_dispatch(log_level, log_file.as_deref(), colored)?
        .apply()
        .map_err(|e| AppError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(path) => info!(
            "Logger initialized: level={level_filter}, file={}",
            path.display()
        ),
        None => info!("Logger initialized: level={level_filter}, stderr (colored: {colored})"),
    }

    Ok(())
}

/// Colors only make sense when a person is reading the stream.
pub(crate) fn use_colors(configured: bool, terminal: bool) -> bool {
    configured && terminal
}

pub(crate) fn build_dispatch(
    log_level: st_config::LogLevel,
    log_file: Option<&Path>,
    colored: bool,
) -> AppErrorResult<Dispatch> {
    let base_dispatch = Dispatch::new().level(log_level.0);

    let dispatch = if let Some(log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| {
                AppError::logger(format!(
                    "Failed to open log file {}: {e}",
                    log_path.display()
                ))
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message} [{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    record.level(),
                    source_of(record),
                ))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message} [{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    colors.color(record.level()),
                    source_of(record),
                ))
            })
            .chain(std::io::stderr())
    } else {
        // Plain output when stderr is redirected
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} - {}] {message} [{}]",
                    humantime::format_rfc3339(SystemTime::now()),
                    record.level(),
                    source_of(record),
                ))
            })
            .chain(std::io::stderr())
    };

    Ok(base_dispatch.chain(dispatch))
}

fn source_of(record: &Record<'_>) -> String {
    format!(
        "{}:{}",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}

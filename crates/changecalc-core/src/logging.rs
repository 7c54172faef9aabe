//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays reserved for command output. When a log
//! file is configured, a non-blocking file writer is used instead.

use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Keeps the non-blocking file writer alive; drop it at the end of `main`.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Parse a level name, falling back to WARN for unknown values
pub fn parse_level(level: &str) -> Level {
    level.trim().parse::<Level>().unwrap_or(Level::WARN)
}

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls keep the first subscriber.
pub fn init_logging(level: &str, file: Option<&Path>) -> LoggingGuard {
    let level = parse_level(level);

    match file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|name| name.to_os_string())
                .unwrap_or_else(|| "changecalc.log".into());

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .try_init();

            LoggingGuard {
                _file_guard: Some(guard),
            }
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();

            LoggingGuard { _file_guard: None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("INFO"), Level::INFO);
        assert_eq!(parse_level(" trace "), Level::TRACE);
        assert_eq!(parse_level("loud"), Level::WARN);
    }
}

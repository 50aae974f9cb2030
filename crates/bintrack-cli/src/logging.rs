use crate::types::LogLevel;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "bintrack.log";

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
pub enum LogSink<'a> {
    Stderr,
    File(&'a Path),
}

/// `RUST_LOG` wins over `--log-level`. An unparsable `RUST_LOG` falls back to
/// the level and is returned as the second value so it can be reported.
fn build_filter(
    rust_log: Option<&str>,
    level: Option<LogLevel>,
) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(level.unwrap_or(LogLevel::Warn).to_string());
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        None => (fallback(), None),
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => (filter, None),
            Err(err) => (
                fallback(),
                Some(format!("ignoring RUST_LOG={:?}: {}", directives, err)),
            ),
        },
    }
}

/// Install the global subscriber. A second call keeps the first subscriber.
pub fn init(level: Option<LogLevel>, sink: LogSink<'_>) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, rejected) = build_filter(rust_log.as_deref(), level);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let installed = match sink {
        LogSink::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogSink::File(data_dir) => {
            std::fs::create_dir_all(data_dir)?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(data_dir.join(LOG_FILE))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    // Either way a subscriber is in place, so these reach whichever one won.
    if let Err(err) = installed {
        debug!(error = %err, "log subscriber already installed");
    }
    if let Some(message) = rejected {
        warn!("{}", message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_used_without_rust_log() {
        let (filter, rejected) = build_filter(None, Some(LogLevel::Debug));
        assert_eq!(filter.to_string(), "debug");
        assert!(rejected.is_none());

        let (filter, _) = build_filter(Some("  "), None);
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_rust_log_wins_over_level() {
        let (filter, rejected) = build_filter(Some("bintrack=trace"), Some(LogLevel::Error));
        assert_eq!(filter.to_string(), "bintrack=trace");
        assert!(rejected.is_none());
    }

    #[test]
    fn test_bad_rust_log_is_reported_not_dropped() {
        let (filter, rejected) = build_filter(Some("bintrack=loud"), Some(LogLevel::Info));
        assert_eq!(filter.to_string(), "info");
        assert!(rejected.unwrap().contains("bintrack=loud"));
    }

    #[test]
    fn test_second_init_is_ok() {
        init(Some(LogLevel::Warn), LogSink::Stderr).unwrap();
        init(Some(LogLevel::Debug), LogSink::Stderr).unwrap();
    }
}

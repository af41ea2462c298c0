//! Logging setup: stderr plus the run's log file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::env_store::{EnvStore, KEY_LOG_DEBUG};

/// Debug output is on when requested on the command line or through
/// `RAPIDS_USER_TOOLS_LOG_DEBUG`.
pub fn debug_enabled<S: EnvStore + ?Sized>(verbose: bool, store: &S) -> bool {
    verbose || store.flag(KEY_LOG_DEBUG)
}

fn level_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber.
///
/// Events go to stderr and, when `log_file` is given, are appended to it
/// without ANSI colors.
pub fn init_logging(debug: bool, log_file: Option<&Path>) -> Result<()> {
    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level_directive(debug)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_store::MemoryEnv;
    use tempfile::tempdir;

    #[test]
    fn test_debug_enabled() {
        let mut store = MemoryEnv::new();
        assert!(!debug_enabled(false, &store));
        assert!(debug_enabled(true, &store));

        store.set(KEY_LOG_DEBUG, "1");
        assert!(debug_enabled(false, &store));

        store.set(KEY_LOG_DEBUG, "off");
        assert!(!debug_enabled(false, &store));
    }

    #[test]
    fn test_level_directive() {
        assert_eq!(level_directive(true), "debug");
        assert_eq!(level_directive(false), "info");
    }

    // Only test in this binary that installs the global subscriber.
    #[test]
    fn test_init_logging_writes_file() {
        let tmp = tempdir().unwrap();
        let log_file = tmp.path().join("tool_run.log");

        init_logging(false, Some(log_file.as_path())).unwrap();
        tracing::info!("bootstrap complete for test_init_logging_writes_file");
        tracing::debug!("hidden at info level");

        let content = std::fs::read_to_string(&log_file).unwrap();
        assert!(content.contains("bootstrap complete for test_init_logging_writes_file"));
        assert!(!content.contains("hidden at info level"));
        assert!(!content.contains("\u{1b}["));

        assert!(init_logging(false, None).is_err());
    }

    #[test]
    fn test_init_logging_missing_directory() {
        let tmp = tempdir().unwrap();
        let log_file = tmp.path().join("missing").join("tool.log");
        assert!(init_logging(false, Some(log_file.as_path())).is_err());
    }
}

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Env var naming a log file when `--log-file` is not given
pub const LOG_FILE_ENV: &str = "BIOLINK_LOG_FILE";
/// Env var holding the filter directives, e.g. `biolink_core=debug`
pub const LOG_FILTER_ENV: &str = "BIOLINK_LOG";

/// Install the global subscriber.
///
/// The terminal belongs to the UI, so logs only go to a file. Without a
/// file from the argument or `BIOLINK_LOG_FILE`, nothing is installed and
/// tracing macros are no-ops.
pub fn init_tracing(log_file: Option<&Path>) -> Result<Option<PathBuf>> {
    let path = match log_file {
        Some(path) => path.to_path_buf(),
        None => match std::env::var_os(LOG_FILE_ENV) {
            Some(path) => PathBuf::from(path),
            None => return Ok(None),
        },
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_logs_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("biolink.log");

        let installed = init_tracing(Some(&path)).unwrap();
        assert_eq!(installed.as_deref(), Some(path.as_path()));
        assert!(path.exists());

        // Only one global subscriber per process
        assert!(init_tracing(Some(&path)).is_err());
    }
}

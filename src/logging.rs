use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_PATH_ENV: &str = "WFCHAT_LOG_PATH";
const DEFAULT_LOG_FILE: &str = "wfchat.log";
const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. The TUI owns the terminal, so whenever
/// stderr is a terminal the log goes to a file instead. Returns the file in
/// use, if any.
pub fn init() -> Result<Option<PathBuf>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    match resolve_log_path() {
        Some(path) => {
            let file = open_log_file(&path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true),
                )
                .try_init()?;
            tracing::info!(path = %path.display(), "logging to file");
            Ok(Some(path))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .try_init()?;
            Ok(None)
        }
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

fn resolve_log_path() -> Option<PathBuf> {
    std::env::var(LOG_PATH_ENV)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            if std::io::stderr().is_terminal() {
                Some(std::env::temp_dir().join(DEFAULT_LOG_FILE))
            } else {
                None
            }
        })
}

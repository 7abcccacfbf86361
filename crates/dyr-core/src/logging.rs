//! Logging init: append to a file under the XDG state dir, else stderr.
//!
//! Stdout stays reserved for command output (the JSON result), so logs never
//! go there.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,dyr_core=debug,dyr=debug";

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/<app>/<app>.log`.
pub fn log_file_path(app: &str) -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(app)?;
    Ok(xdg_dirs.get_state_home().join(format!("{app}.log")))
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}

/// Installs the global subscriber writing to `path`. Fails without installing
/// anything if the file cannot be opened.
pub fn init_logging_at(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;
    tracing::info!("logging to {}", path.display());
    Ok(())
}

/// Initialize structured logging to `~/.local/state/<app>/<app>.log`.
pub fn init_logging(app: &str) -> Result<PathBuf> {
    let path = log_file_path(app)?;
    init_logging_at(&path)?;
    Ok(path)
}

/// Initialize logging to stderr only. A no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

/// File logging for `app`, falling back to stderr when the state dir is not
/// usable. Never fails.
pub fn init_logging_or_stderr(app: &str) -> LogDestination {
    fallback(log_file_path(app))
}

fn fallback(path: Result<PathBuf>) -> LogDestination {
    let attempt = path.and_then(|p| init_logging_at(&p).map(|()| p));
    match attempt {
        Ok(p) => LogDestination::File(p),
        Err(err) => {
            init_logging_stderr();
            tracing::warn!("file logging unavailable, using stderr: {:#}", err);
            LogDestination::Stderr
        }
    }
}

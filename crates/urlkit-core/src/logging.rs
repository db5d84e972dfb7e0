//! `tracing` setup for the CLI: an append-only log file in the XDG state
//! directory, with stderr as the fallback sink.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,urlkit=debug";
const LOG_FILE_NAME: &str = "urlkit.log";

/// `RUST_LOG` if set and valid, else [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `$XDG_STATE_HOME/urlkit`.
fn state_dir() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("urlkit")?;
    Ok(dirs.get_state_home().join("urlkit"))
}

/// Creates `dir` if needed and opens its log file for appending.
fn open_log_file(dir: &Path) -> Result<(File, PathBuf)> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;
    Ok((file, path))
}

/// Installs a global subscriber that appends to the state-dir log file.
///
/// Errors leave no subscriber installed, so the caller can still use
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let (file, path) = open_log_file(&state_dir()?)?;

    // Events from any thread serialize through the one handle.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(log = %path.display(), "file logging enabled");
    Ok(())
}

/// Installs a stderr subscriber. Keeps any subscriber already set.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

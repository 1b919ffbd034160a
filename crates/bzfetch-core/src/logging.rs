//! Logging for a one-shot install run.
//!
//! By default events go to stderr, where whoever runs the install hook reads
//! them: `info` for this tool, `warn` for libraries. `init_file` appends to
//! `bzfetch.log` in the per-user state dir instead. `RUST_LOG` replaces the
//! filter in both modes.

use crate::paths;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,bzfetch=info,bzfetch_core=info";
const LOG_FILE: &str = "bzfetch.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Where `init_file` writes.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(paths::log_dir()?.join(LOG_FILE))
}

/// Terse stderr output: no timestamps or module targets.
pub fn init_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Append timestamped events to the log file. Returns its path.
/// On error nothing is installed, so the caller can still fall back to `init_stderr`.
pub fn init_file() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::debug!("logging to {}", path.display());
    Ok(path)
}

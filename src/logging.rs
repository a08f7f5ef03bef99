//! File-based logging
//!
//! The terminal belongs to the UI, so diagnostics go to
//! `<data_local_dir>/lingocards/lingocards.log` instead of stdout.

use crate::{LingoError, Result, APP_NAME, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Get the standard log file path
pub fn log_file_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        LingoError::ConfigError("Unable to determine data directory".to_string())
    })?;
    Ok(data_dir.join(APP_NAME).join(LOG_FILE))
}

/// Build the filter: RUST_LOG wins over the configured level
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", APP_NAME, default_level)))
}

/// Install the global subscriber writing to `path`
pub fn init_at(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LingoError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Install the global subscriber at the standard location
pub fn init(default_level: &str) -> Result<PathBuf> {
    let path = log_file_path()?;
    init_at(&path, default_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging initialized");
    Ok(path)
}

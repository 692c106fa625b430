//! Tracing subscriber setup
//!
//! The screen belongs to the editor while it runs, so diagnostics go to a log file.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Default log file location
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("rem.log")
}

/// Install the global subscriber writing to `log_file`.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_global(log_file: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

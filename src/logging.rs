//! File logging. The TUI owns the screen, so log lines go to
//! `<cache dir>/tasktable/tasktable.log` instead of stderr.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TASKTABLE_LOG";

const DEFAULT_FILTER: &str = "info";

/// Path of the log file, if a cache directory exists
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("tasktable").join("tasktable.log"))
}

/// Install the global subscriber. Returns the log file on success; any
/// failure leaves logging disabled.
pub fn init() -> Option<PathBuf> {
    let path = log_path()?;
    fs::create_dir_all(path.parent()?).ok()?;
    let file = File::create(&path).ok()?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(path)
}

// src/log.rs
//
// tracing-backed logging. The logf!/logd!/logw!/loge! macros are the only
// entry points the rest of the crate uses; `init_file` and `init_stderr`
// pick where the events go.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE};

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append events to `<store_dir>/debug.log` (GUI).
/// A second call, or a failure to open the file, leaves logging as it was.
pub fn init_file(store_dir: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    fs::create_dir_all(store_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store_dir.join(LOG_FILE))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
}

/// Events to stderr (CLI). `verbose` lowers the default level to debug.
pub fn init_stderr(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(filter(default))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

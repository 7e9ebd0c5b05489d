// src/logging.rs
//! Subscriber setup for the analyzer's own log.

use crate::error::{AnalyzerError, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

const TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Installs the global subscriber: appends to `log_file` when given,
/// stdout otherwise. `RUST_LOG` overrides the default `info` level.
///
/// Returns `Ok(false)` if a subscriber was already installed.
///
/// # Errors
/// Returns error if the log file cannot be opened.
pub fn init(log_file: Option<&Path>, quiet: bool) -> Result<bool> {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| AnalyzerError::io(e, parent))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| AnalyzerError::io(e, path))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None => builder.with_writer(std::io::stdout).try_init().is_ok(),
    };
    Ok(installed)
}

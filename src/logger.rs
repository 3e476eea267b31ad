//! Logging utilities.
//!
//! Two layers: a shared in-memory [`Logger`] the UI components use to trace
//! user actions, and an optional `fern` file dispatcher wired to the `log`
//! facade, enabled through the `[logging]` config section.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::LoggingConfig;

/// Most entries an in-memory logger retains before dropping the oldest.
const MAX_LOG_ENTRIES: usize = 500;

/// Shared logger that can be cloned into every component.
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record a timestamped entry, also mirrored to the `log` facade.
    pub fn log(&self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");

        let timestamp = Utc::now().format("%H:%M:%S%.3f");
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(format!("[{timestamp}] {message}"));
            if entries.len() > MAX_LOG_ENTRIES {
                let excess = entries.len() - MAX_LOG_ENTRIES;
                entries.drain(..excess);
            }
        }
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().rev().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a `fern` file logger when `[logging] enabled = true`.
///
/// Without an explicit `file` setting the log lands in `termtrack.log` in
/// the working directory. A no-op when logging is disabled.
pub fn init_file_logging(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = config
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from("termtrack.log"));

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install file logger")?;

    Ok(())
}

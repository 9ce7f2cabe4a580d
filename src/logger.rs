//! Logging setup.
//!
//! Library code logs through the `log` macros. [`Logger`] wires those macros
//! to fern: stderr and an optional file when logging is enabled, plus an
//! in-memory diagnostic log that always keeps warnings and errors so a host
//! application can show failed actions to the user.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Utc;
use log::{LevelFilter, Metadata, Record};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared diagnostic log plus the settings it was built from
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    level: LevelFilter,
    file: Option<PathBuf>,
}

impl Logger {
    /// An in-memory log only; nothing goes to stderr or disk
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            level: LevelFilter::Off,
            file: None,
        }
    }

    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        Ok(Self {
            enabled: config.enabled,
            level: config.level_filter()?,
            file: if config.enabled { config.file.clone() } else { None },
            ..Self::new()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file.is_some()
    }

    /// Add a log entry
    pub fn push(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Build the fern dispatch tree for this logger without installing it
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let diagnostics = fern::Dispatch::new()
            .level(self.level.max(LevelFilter::Warn))
            .chain(Box::new(self.clone()) as Box<dyn log::Log>);

        let mut root = fern::Dispatch::new().chain(diagnostics);

        if self.enabled {
            let mut output = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}: {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .level(self.level)
                .chain(std::io::stderr());

            if let Some(path) = &self.file {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                }
                let file =
                    fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
                output = output.chain(file);
            }

            root = root.chain(output);
        }

        Ok(root)
    }

    /// Install as the global `log` backend. Fails if one is already set.
    pub fn install(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("Failed to install logger (already initialized?)")
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.push(format!("{} {}: {}", record.level(), record.target(), record.args()));
    }

    fn flush(&self) {}
}

/// Load-and-install shortcut used by host applications at startup
pub fn init(config: &LoggingConfig) -> Result<Logger> {
    let logger = Logger::from_config(config)?;
    logger.install()?;
    Ok(logger)
}

//! Configuration management for listkit
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_GENERATED, DAY_KEY_FORMAT, DEFAULT_LOG_LEVEL,
    DEFAULT_MESSAGE_GROUP_WINDOW_MINUTES, MAX_MESSAGE_GROUP_WINDOW_MINUTES,
};
use crate::derive::{DayGrouping, SortKey};
use anyhow::{Context, Result};
use crate::utils::datetime;
use chrono::NaiveDate;
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub views: ViewsConfig,
    pub logging: LoggingConfig,
}

/// View defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Sort applied when a view opens or its filters are reset
    pub default_sort: SortKey,
    /// Consecutive chat messages from one sender closer than this are grouped
    pub message_group_window_minutes: i64,
    /// chrono format of the day keys used to bucket chat messages
    pub day_key_format: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
    /// Also append log lines to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::None,
            message_group_window_minutes: DEFAULT_MESSAGE_GROUP_WINDOW_MINUTES,
            day_key_format: DAY_KEY_FORMAT.to_string(),
        }
    }
}

impl ViewsConfig {
    /// Day bucketing options for conversation views
    pub fn day_grouping(&self) -> DayGrouping {
        DayGrouping {
            window: chrono::Duration::minutes(self.message_group_window_minutes),
            day_format: self.day_key_format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; `Off` when logging is disabled
    pub fn level_filter(&self) -> Result<LevelFilter> {
        if !self.enabled {
            return Ok(LevelFilter::Off);
        }
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let window = self.views.message_group_window_minutes;
        if !(1..=MAX_MESSAGE_GROUP_WINDOW_MINUTES).contains(&window) {
            anyhow::bail!(
                "message_group_window_minutes must be between 1 and {}, got {}",
                MAX_MESSAGE_GROUP_WINDOW_MINUTES,
                window
            );
        }

        validate_day_key_format(&self.views.day_key_format)?;

        if let Err(e) = self.logging.level.parse::<LevelFilter>() {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# listkit Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(DAY_KEY_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(CONFIG_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}

/// A day key format must render every date and give different days different keys
fn validate_day_key_format(format: &str) -> Result<()> {
    let samples = [(2025, 1, 1), (2025, 1, 2), (2025, 2, 1), (2026, 1, 1)];
    let mut keys: Vec<String> = Vec::new();

    for date in samples.iter().filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)) {
        let key = datetime::format_day(date, format)
            .ok_or_else(|| anyhow::anyhow!("Invalid day_key_format '{}': cannot format a date", format))?;
        if keys.contains(&key) {
            anyhow::bail!("Invalid day_key_format '{}': different days share the key '{}'", format, key);
        }
        keys.push(key);
    }

    Ok(())
}

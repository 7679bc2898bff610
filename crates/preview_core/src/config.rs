//! Configuration for the image preview.
//!
//! The config is a small JSON document, usually handed over from the page
//! when the preview is created. Every field has a default, so `{}` is a
//! valid config.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TARGET_ID, DEFAULT_VISIBLE_DISPLAY};
use crate::error::{PreviewError, Result};

/// Current configuration format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level.
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// What to do with a read that completes after a newer selection was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Discard completions older than the latest selection
    #[default]
    LatestSelection,
    /// Apply every completion; whichever finishes last is shown
    LastCompletion,
}

/// Preview configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Version of the configuration format
    #[serde(default = "default_version")]
    pub version: u32,

    /// Id of the element that shows the preview
    #[serde(default = "default_target_id")]
    pub target_id: String,

    /// CSS `display` value applied when the preview is shown
    #[serde(default = "default_visible_display")]
    pub visible_display: String,

    /// Handling of overlapping reads
    #[serde(default)]
    pub completion: CompletionPolicy,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_target_id() -> String {
    DEFAULT_TARGET_ID.to_string()
}

fn default_visible_display() -> String {
    DEFAULT_VISIBLE_DISPLAY.to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            target_id: default_target_id(),
            visible_display: default_visible_display(),
            completion: CompletionPolicy::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl PreviewConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the config can be used.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(PreviewError::UnsupportedConfigVersion {
                expected: CONFIG_VERSION,
                found: self.version,
            });
        }
        if self.target_id.trim().is_empty() {
            return Err(PreviewError::invalid_config("target_id must not be empty"));
        }
        if self.visible_display.trim().is_empty() || self.visible_display == "none" {
            return Err(PreviewError::invalid_config(format!(
                "visible_display '{}' does not show the element",
                self.visible_display
            )));
        }
        Ok(())
    }
}

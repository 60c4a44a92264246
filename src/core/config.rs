//! Logger configuration
//!
//! Plain settings that can be written by hand or loaded from JSON. Writers
//! and callbacks are attached through [`LoggerBuilder`](super::LoggerBuilder).

use super::error::{LoggerError, Result};
use super::level::Level;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Queue size above which an automatic flush is scheduled
pub const DEFAULT_FLUSH_THRESHOLD: usize = 10;

/// # Example
///
/// ```
/// use easy_log::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{ "min_level": "Info", "flush_threshold": 25 }"#)
///     .unwrap();
/// assert_eq!(config.min_level, Level::Info);
/// assert_eq!(config.flush_threshold, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Global minimum level for clients without their own override
    pub min_level: Level,
    /// Queue size above which a background flush is scheduled
    pub flush_threshold: usize,
    /// Rendering of the timestamp field
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: Level::default(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                path.display().to_string(),
                e,
            )
        })?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<()> {
        validate_flush_threshold(self.flush_threshold)?;
        self.timestamp_format.validate()
    }
}

pub(crate) fn validate_flush_threshold(threshold: usize) -> Result<()> {
    if threshold == 0 {
        return Err(LoggerError::invalid_argument(
            "flush_threshold",
            "must be greater than zero",
        ));
    }
    Ok(())
}

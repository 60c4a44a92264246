//! Queued log entry and its line rendering

use super::level::Level;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Field separator used when rendering an entry into a line
pub const FIELD_SEPARATOR: &str = " - ";

/// One accepted submission waiting in the queue
///
/// Created at submission time, read once when flushed, then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub client: Arc<str>,
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that every rendered line stays a single line.
    fn sanitize_message(message: String) -> String {
        if !message.contains(['\n', '\r', '\t']) {
            return message;
        }
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(client: Arc<str>, level: Level, message: impl Into<String>) -> Self {
        Self {
            client,
            timestamp: Utc::now(),
            level,
            message: Self::sanitize_message(message.into()),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render as `timestamp - client - level - message`
    ///
    /// The client field is omitted for the default (unnamed) client.
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        let timestamp = timestamp_format.format(&self.timestamp);
        let client: &str = &self.client;
        if client.trim().is_empty() {
            [timestamp.as_str(), self.level.to_str(), self.message.as_str()].join(FIELD_SEPARATOR)
        } else {
            [
                timestamp.as_str(),
                client,
                self.level.to_str(),
                self.message.as_str(),
            ]
            .join(FIELD_SEPARATOR)
        }
    }
}

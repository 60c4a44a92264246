//! Core logger types and traits

pub mod client;
pub mod config;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod timestamp;
pub mod writer;

pub use client::LogClient;
pub use config::{LoggerConfig, DEFAULT_FLUSH_THRESHOLD};
pub use diagnostics::ErrorCallback;
pub use entry::{LogEntry, FIELD_SEPARATOR};
pub use error::{LoggerError, Result};
pub use formatter::{DefaultFormatter, Formatter};
pub use level::{should_emit, Level};
pub use logger::{Logger, LoggerBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
pub use queue::EntryQueue;
pub use timestamp::TimestampFormat;
pub use writer::LogWriter;
